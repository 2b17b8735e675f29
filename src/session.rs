use std::io;
use std::io::BufRead;
use std::io::Read;
use std::io::Seek;
use std::io::Write;

use anyhow::Context as _;

use crate::parse_int;
use crate::Command;
use crate::Prompter;
use crate::SessionError;
use crate::Whence;
use crate::MAIN_PROMPT;
use crate::OFFSET_PROMPT;
use crate::READ_PROMPT;
use crate::WHENCE_PROMPT;
use crate::WRITE_PROMPT;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    AwaitingMainCommand,
    AwaitingReadLength,
    AwaitingWriteData,
    AwaitingSeekOffset,
    AwaitingSeekWhence { offset: i64 },
    Terminated,
}

/// An open file and its cursor, driven by prompted commands.
///
/// The file is owned by the session for its whole lifetime and handed back
/// by [`Session::run`] once input is closed.
pub struct Session<F, R, W> {
    file: F,
    prompter: Prompter<R, W>,
    state: State,
}

impl<F, R, W> Session<F, R, W>
where
    F: Read + Write + Seek,
    R: BufRead,
    W: Write,
{
    pub fn new(file: F, input: R, output: W) -> Self {
        Session {
            file,
            prompter: Prompter::new(input, output),
            state: State::AwaitingMainCommand,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Run until end-of-input. Errors are only returned when the terminal
    /// streams themselves fail.
    pub fn run(mut self) -> anyhow::Result<F> {
        while self.step()? != State::Terminated {}

        self.prompter
            .output()
            .flush()
            .context("Failed to flush output")?;

        Ok(self.file)
    }

    /// Ask for the input the current state needs and act on it.
    pub fn step(&mut self) -> anyhow::Result<State> {
        let next = match self.state {
            State::AwaitingMainCommand => match self.prompter.ask(MAIN_PROMPT)? {
                None => State::Terminated,
                Some(line) => match Command::from_line(&line) {
                    Command::Read => State::AwaitingReadLength,
                    Command::Write => State::AwaitingWriteData,
                    Command::Seek => State::AwaitingSeekOffset,
                    Command::Unrecognized => State::AwaitingMainCommand,
                },
            },
            State::AwaitingReadLength => {
                if let Some(line) = self.prompter.ask(READ_PROMPT)? {
                    self.read_flow(parse_int(&line))?;
                }
                State::AwaitingMainCommand
            }
            State::AwaitingWriteData => {
                if let Some(line) = self.prompter.ask(WRITE_PROMPT)? {
                    if let Err(error) = self.write_data(&line) {
                        self.report(error)?;
                    }
                }
                State::AwaitingMainCommand
            }
            State::AwaitingSeekOffset => match self.prompter.ask(OFFSET_PROMPT)? {
                Some(line) => State::AwaitingSeekWhence {
                    offset: parse_int(&line),
                },
                None => State::AwaitingMainCommand,
            },
            State::AwaitingSeekWhence { offset } => {
                if let Some(line) = self.prompter.ask(WHENCE_PROMPT)? {
                    let result = Whence::try_from(parse_int(&line))
                        .and_then(|whence| self.seek(offset, whence));
                    if let Err(error) = result {
                        self.report(error)?;
                    }
                }
                State::AwaitingMainCommand
            }
            State::Terminated => State::Terminated,
        };

        log::debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(next)
    }

    /// Read up to `len` bytes at the cursor. Fewer bytes come back near the
    /// end of the file, none at or past it.
    pub fn read_bytes(&mut self, len: i64) -> Result<Vec<u8>, SessionError> {
        let len = u64::try_from(len).map_err(|_| SessionError::NegativeReadLength(len))?;

        let mut data = Vec::new();
        (&mut self.file)
            .take(len)
            .read_to_end(&mut data)
            .map_err(SessionError::Read)?;

        log::debug!("read {} of {} bytes", data.len(), len);
        Ok(data)
    }

    /// Write `data` at the cursor, overwriting or extending the file.
    pub fn write_data(&mut self, data: &[u8]) -> Result<usize, SessionError> {
        self.file.write_all(data).map_err(SessionError::Write)?;
        self.file.flush().map_err(SessionError::Write)?;

        log::debug!("wrote {} bytes", data.len());
        Ok(data.len())
    }

    /// Move the cursor, returning its new absolute position.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<u64, SessionError> {
        let position = self
            .file
            .seek(whence.seek_from(offset)?)
            .map_err(|error| match error.kind() {
                io::ErrorKind::InvalidInput => SessionError::OutOfRangeSeek { offset, whence },
                _ => SessionError::Seek(error),
            })?;

        log::debug!("seek {} from {} -> {}", offset, whence, position);
        Ok(position)
    }

    fn read_flow(&mut self, len: i64) -> anyhow::Result<()> {
        if len == 0 {
            return Ok(());
        }

        match self.read_bytes(len) {
            Ok(data) => {
                let output = self.prompter.output();
                output.write_all(&data).context("Failed to write data read")?;
                output.write_all(b"\n").context("Failed to write data read")
            }
            Err(error) => self.report(error),
        }
    }

    fn report(&mut self, error: SessionError) -> anyhow::Result<()> {
        log::warn!("{}", error);
        writeln!(self.prompter.output(), "pa5test error: {}", error)
            .context("Failed to report error")
    }
}
