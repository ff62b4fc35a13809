
use crate::backend::codec_backend::CodecBackend;
use crate::error::{ConversionError, Direction, Error};
use crate::generic_backend::GenericCodecBackend;

/// Converts UTF-16 text to UTF-8.
///
/// Malformed input, such as an unpaired surrogate, fails with
/// `Error::Conversion` carrying `ErrorCode::NoUnicodeTranslation`.
pub fn utf16_to_utf8(source: &[u16]) -> Result<String, Error> {
    convert_to_utf8::<CodecBackend>(source)
}

/// Converts UTF-8 text to UTF-16.
///
/// Malformed input, such as an invalid lead or continuation byte, fails with
/// `Error::Conversion` carrying `ErrorCode::NoUnicodeTranslation`.
pub fn utf8_to_utf16(source: &[u8]) -> Result<Vec<u16>, Error> {
    convert_to_utf16::<CodecBackend>(source)
}

fn check_source_len<B: GenericCodecBackend>(len: usize) -> Result<(), Error> {
    if len > B::MAX_SOURCE_UNITS {
        return Err(Error::Overflow {
            len,
            max: B::MAX_SOURCE_UNITS,
        });
    }
    Ok(())
}

fn convert_to_utf8<B: GenericCodecBackend>(source: &[u16]) -> Result<String, Error> {
    // The codec size query is ambiguous for a zero-length source, so an empty
    // string never reaches the backend. The length check has to come before
    // the size query, which assumes the length already fits.
    if source.is_empty() {
        return Ok(String::new());
    }
    check_source_len::<B>(source.len())?;

    let required = B::utf8_len_of_utf16(source)
        .map_err(|code| ConversionError::new(Direction::Utf16ToUtf8, code))?;
    let mut dest = vec![0u8; required];
    let written = B::convert_utf16_to_utf8(source, &mut dest)
        .map_err(|code| ConversionError::new(Direction::Utf16ToUtf8, code))?;
    debug_assert_eq!(written, required);

    // The convert pass validated every sequence it wrote.
    Ok(unsafe { String::from_utf8_unchecked(dest) })
}

fn convert_to_utf16<B: GenericCodecBackend>(source: &[u8]) -> Result<Vec<u16>, Error> {
    if source.is_empty() {
        return Ok(Vec::new());
    }
    check_source_len::<B>(source.len())?;

    let required = B::utf16_len_of_utf8(source)
        .map_err(|code| ConversionError::new(Direction::Utf8ToUtf16, code))?;
    let mut dest = vec![0u16; required];
    let written = B::convert_utf8_to_utf16(source, &mut dest)
        .map_err(|code| ConversionError::new(Direction::Utf8ToUtf16, code))?;
    debug_assert_eq!(written, required);

    Ok(dest)
}
