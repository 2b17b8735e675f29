use std::fs::File;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use anyhow::anyhow;
use anyhow::Context as _;
use clap::Parser;
use pa5test::Session;

/// Read, write and seek within one file from an interactive prompt.
#[derive(Parser)]
#[command(version)]
struct Command {
    /// File to open for reading and writing
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();

    let command = Command::parse();

    let file = match command.path.as_deref().map(open) {
        Some(Ok(file)) => file,
        Some(Err(error)) => {
            log::debug!("{:#}", error);
            invalid_filename()
        }
        None => invalid_filename(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(file, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}

fn open(path: &Path) -> anyhow::Result<File> {
    log::info!("Opening {}", path.display());

    File::options()
        .read(true)
        .write(true)
        .open(path)
        .with_context(|| anyhow!("Failed to open {}", path.display()))
}

fn invalid_filename() -> ! {
    println!("./pa5test error: invalid filename");
    process::exit(1);
}
