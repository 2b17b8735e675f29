use std::fmt;
use std::io::SeekFrom;

use crate::SessionError;

/// Operation selected at the main prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Read,
    Write,
    Seek,
    Unrecognized,
}

impl Command {
    /// Only the first byte of the line is significant.
    pub fn from_line(line: &[u8]) -> Self {
        match line.first() {
            Some(b'r') => Command::Read,
            Some(b'w') => Command::Write,
            Some(b's') => Command::Seek,
            _ => Command::Unrecognized,
        }
    }
}

/// Parse a decimal integer prefix the way `strtol(line, NULL, 10)` does.
///
/// Leading whitespace and a single sign are accepted, parsing stops at the
/// first non-digit, a line without digits is `0`, and overflow saturates.
pub fn parse_int(line: &[u8]) -> i64 {
    let start = line
        .iter()
        .position(|byte| !byte.is_ascii_whitespace())
        .unwrap_or(line.len());

    let (negative, digits) = match &line[start..] {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        rest => (false, rest),
    };

    digits
        .iter()
        .take_while(|byte| byte.is_ascii_digit())
        .fold(0i64, |value, digit| {
            let digit = i64::from(digit - b'0');
            if negative {
                value.saturating_mul(10).saturating_sub(digit)
            } else {
                value.saturating_mul(10).saturating_add(digit)
            }
        })
}

/// Reference point of a seek.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Whence {
    Start,
    Current,
    End,
}

impl Whence {
    pub fn seek_from(self, offset: i64) -> Result<SeekFrom, SessionError> {
        match self {
            Whence::Start => u64::try_from(offset)
                .map(SeekFrom::Start)
                .map_err(|_| SessionError::OutOfRangeSeek {
                    offset,
                    whence: self,
                }),
            Whence::Current => Ok(SeekFrom::Current(offset)),
            Whence::End => Ok(SeekFrom::End(offset)),
        }
    }
}

impl TryFrom<i64> for Whence {
    type Error = SessionError;

    fn try_from(value: i64) -> Result<Self, SessionError> {
        match libc::c_int::try_from(value) {
            Ok(libc::SEEK_SET) => Ok(Whence::Start),
            Ok(libc::SEEK_CUR) => Ok(Whence::Current),
            Ok(libc::SEEK_END) => Ok(Whence::End),
            _ => Err(SessionError::InvalidWhence(value)),
        }
    }
}

impl fmt::Display for Whence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Whence::Start => write!(f, "start of file"),
            Whence::Current => write!(f, "current position"),
            Whence::End => write!(f, "end of file"),
        }
    }
}
