
use std::str;

use crate::error::ErrorCode;
use crate::generic_backend::GenericCodecBackend;

/// A codec backed by the standard library's UTF primitives. `decode_utf16`
/// and `from_utf8` do the validation and decoding; this backend only adds the
/// size-query/convert split the conversion functions are written against.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CodecBackend;

impl GenericCodecBackend for CodecBackend {
    // Kept at the signed 32-bit limit of the Win32 conversion calls so the
    // length behavior is the same on every platform.
    const MAX_SOURCE_UNITS: usize = i32::MAX as usize;

    fn utf8_len_of_utf16(source: &[u16]) -> Result<usize, ErrorCode> {
        let mut len = 0;
        for c in char::decode_utf16(source.iter().copied()) {
            match c {
                Ok(c) => len += c.len_utf8(),
                Err(_) => return Err(ErrorCode::NoUnicodeTranslation),
            }
        }
        Ok(len)
    }

    fn utf16_len_of_utf8(source: &[u8]) -> Result<usize, ErrorCode> {
        match str::from_utf8(source) {
            Ok(s) => Ok(s.chars().map(char::len_utf16).sum()),
            Err(_) => Err(ErrorCode::NoUnicodeTranslation),
        }
    }

    fn convert_utf16_to_utf8(source: &[u16], dest: &mut [u8]) -> Result<usize, ErrorCode> {
        let mut written = 0;
        for c in char::decode_utf16(source.iter().copied()) {
            let c = c.map_err(|_| ErrorCode::NoUnicodeTranslation)?;
            let len = c.len_utf8();
            if dest.len() - written < len {
                return Err(ErrorCode::InsufficientBuffer);
            }
            c.encode_utf8(&mut dest[written..written + len]);
            written += len;
        }
        Ok(written)
    }

    fn convert_utf8_to_utf16(source: &[u8], dest: &mut [u16]) -> Result<usize, ErrorCode> {
        let s = str::from_utf8(source).map_err(|_| ErrorCode::NoUnicodeTranslation)?;
        let mut written = 0;
        for unit in s.encode_utf16() {
            if written == dest.len() {
                return Err(ErrorCode::InsufficientBuffer);
            }
            dest[written] = unit;
            written += 1;
        }
        Ok(written)
    }
}
