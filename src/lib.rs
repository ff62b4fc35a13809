//! Conversion between UTF-16 and UTF-8 text, backed by the platform's
//! Unicode converter: the Win32 conversion calls on Windows and the standard
//! library's UTF primitives elsewhere. Malformed input is rejected with a
//! structured error, never replaced or truncated.

#![deny(unreachable_pub)]

mod conversion;
mod error;
mod generic_backend;

#[cfg(windows)]
#[path = "windows_backend/mod.rs"]
mod backend;
#[cfg(not(windows))]
#[path = "std_backend/mod.rs"]
mod backend;

pub use conversion::{utf16_to_utf8, utf8_to_utf16};
pub use error::{ConversionError, Direction, Error, ErrorCode};
