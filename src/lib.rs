mod command;
mod error;
mod prompt;
mod session;

pub use command::parse_int;
pub use command::Command;
pub use command::Whence;
pub use error::SessionError;
pub use prompt::Prompter;
pub use session::Session;
pub use session::State;

/// Shown whenever the session waits for the next command.
pub const MAIN_PROMPT: &str = "Option (r for read, w for write, s for seek):";
/// Read flow: asks for the byte count.
pub const READ_PROMPT: &str = "Enter the number of bytes you want to read:";
/// Write flow: asks for the line to write.
pub const WRITE_PROMPT: &str = "Enter the data you want to write:";
/// Seek flow: asks for the offset.
pub const OFFSET_PROMPT: &str = "Enter an offset value:";
/// Seek flow: asks for the whence after the offset.
pub const WHENCE_PROMPT: &str = "Enter a value for whence:";
