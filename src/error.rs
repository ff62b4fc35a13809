use std::fmt;

use thiserror::Error;

/// The direction of a conversion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Utf16ToUtf8,
    Utf8ToUtf16,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Utf16ToUtf8 => f.write_str("UTF-16 to UTF-8"),
            Direction::Utf8ToUtf16 => f.write_str("UTF-8 to UTF-16"),
        }
    }
}

/// The reason a codec pass failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The source contains a sequence with no translation in the destination
    /// encoding, such as an unpaired surrogate or an invalid lead byte.
    NoUnicodeTranslation,
    /// The destination buffer cannot hold the converted text. The size query
    /// determines the destination length, so this indicates a caller bug.
    InsufficientBuffer,
    /// Any other platform error value, passed through unchanged.
    Other(u32),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::NoUnicodeTranslation => f.write_str("no translation for the input sequence"),
            ErrorCode::InsufficientBuffer => f.write_str("insufficient destination buffer"),
            ErrorCode::Other(code) => write!(f, "platform error {}", code),
        }
    }
}

/// A failure reported by the platform codec, tagged with the direction of the
/// conversion that was being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{direction} conversion failed: {code}")]
pub struct ConversionError {
    direction: Direction,
    code: ErrorCode,
}

impl ConversionError {
    pub(crate) fn new(direction: Direction, code: ErrorCode) -> Self {
        Self { direction, code }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// Any failure a conversion call can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The source length cannot be given to the codec. The legacy size and
    /// convert calls take signed 32-bit lengths and silently truncate longer
    /// inputs, so the length is checked before any codec call.
    #[error("source length of {len} code units exceeds the codec limit of {max}")]
    Overflow { len: usize, max: usize },
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
