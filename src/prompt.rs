use std::io::BufRead;
use std::io::Write;

use anyhow::Context as _;

/// Line-oriented question/answer over a pair of terminal streams.
///
/// End-of-input is sticky: once the input is seen closed, every later
/// `ask` returns `None` without printing its prompt or touching the input
/// again. A trailing line without a terminator counts as end-of-input.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    closed: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Prompter {
            input,
            output,
            closed: false,
        }
    }

    /// Print `prompt` and wait for one line, returned without its `\n`.
    pub fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<Vec<u8>>> {
        if self.closed {
            return Ok(None);
        }

        write!(self.output, "{} ", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = Vec::new();
        self.input
            .read_until(b'\n', &mut line)
            .context("Failed to read from input")?;

        match line.pop() {
            Some(b'\n') => Ok(Some(line)),
            _ => {
                log::debug!("input closed");
                self.closed = true;
                Ok(None)
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
