use std::io;

use thiserror::Error;

use crate::Whence;

/// Failures inside a single read, write or seek flow.
///
/// None of these end the session; they are reported inline and the loop
/// returns to the main prompt.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid whence value: {0}")]
    InvalidWhence(i64),

    #[error("cannot seek to offset {offset} from {whence}")]
    OutOfRangeSeek { offset: i64, whence: Whence },

    #[error("cannot read a negative number of bytes: {0}")]
    NegativeReadLength(i64),

    #[error("failed to read from file: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write to file: {0}")]
    Write(#[source] io::Error),

    #[error("failed to seek: {0}")]
    Seek(#[source] io::Error),
}
