
use windows::core::PCSTR;
use windows::Win32::Foundation::{
    GetLastError, ERROR_INSUFFICIENT_BUFFER, ERROR_NO_UNICODE_TRANSLATION, WIN32_ERROR,
};
use windows::Win32::Globalization::{
    MultiByteToWideChar, WideCharToMultiByte, CP_UTF8, MB_ERR_INVALID_CHARS, WC_ERR_INVALID_CHARS,
};

use crate::error::ErrorCode;
use crate::generic_backend::GenericCodecBackend;

fn last_error_code() -> ErrorCode {
    match unsafe { GetLastError() } {
        e if e == ERROR_NO_UNICODE_TRANSLATION => ErrorCode::NoUnicodeTranslation,
        e if e == ERROR_INSUFFICIENT_BUFFER => ErrorCode::InsufficientBuffer,
        WIN32_ERROR(code) => ErrorCode::Other(code),
    }
}

/// A codec backed by `WideCharToMultiByte` and `MultiByteToWideChar` with
/// `CP_UTF8`. The `WC_ERR_INVALID_CHARS` and `MB_ERR_INVALID_CHARS` flags make
/// both calls fail on malformed input instead of substituting U+FFFD.
///
/// Passing no destination buffer turns either call into a size query. Both
/// calls return zero on failure; zero cannot be a success here because the
/// conversion functions never pass an empty source.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodecBackend;

impl GenericCodecBackend for CodecBackend {
    // The Win32 calls take int lengths and the windows crate casts slice
    // lengths down without checking, so longer sources must never get here.
    const MAX_SOURCE_UNITS: usize = i32::MAX as usize;

    fn utf8_len_of_utf16(source: &[u16]) -> Result<usize, ErrorCode> {
        // For CP_UTF8 the default-character arguments must be null.
        let len = unsafe {
            WideCharToMultiByte(CP_UTF8, WC_ERR_INVALID_CHARS, source, None, PCSTR::null(), None)
        };
        if len == 0 {
            return Err(last_error_code());
        }
        Ok(len as usize)
    }

    fn utf16_len_of_utf8(source: &[u8]) -> Result<usize, ErrorCode> {
        let len = unsafe { MultiByteToWideChar(CP_UTF8, MB_ERR_INVALID_CHARS, source, None) };
        if len == 0 {
            return Err(last_error_code());
        }
        Ok(len as usize)
    }

    fn convert_utf16_to_utf8(source: &[u16], dest: &mut [u8]) -> Result<usize, ErrorCode> {
        let written = unsafe {
            WideCharToMultiByte(
                CP_UTF8,
                WC_ERR_INVALID_CHARS,
                source,
                Some(dest),
                PCSTR::null(),
                None,
            )
        };
        if written == 0 {
            return Err(last_error_code());
        }
        Ok(written as usize)
    }

    fn convert_utf8_to_utf16(source: &[u8], dest: &mut [u16]) -> Result<usize, ErrorCode> {
        let written =
            unsafe { MultiByteToWideChar(CP_UTF8, MB_ERR_INVALID_CHARS, source, Some(dest)) };
        if written == 0 {
            return Err(last_error_code());
        }
        Ok(written as usize)
    }
}
