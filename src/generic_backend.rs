
use crate::error::ErrorCode;

/// The platform codec service behind the conversion functions. Each direction
/// is split into a size query and a convert pass: query the exact destination
/// length, allocate, then convert into the exactly-sized buffer. There is no
/// grow-and-retry; a destination smaller than the queried length fails with
/// `ErrorCode::InsufficientBuffer`.
///
/// Backends validate strictly. Malformed input fails both passes with
/// `ErrorCode::NoUnicodeTranslation` rather than being replaced or dropped.
pub(crate) trait GenericCodecBackend {
    /// Largest source length, in source code units, accepted in one call.
    const MAX_SOURCE_UNITS: usize;

    /// Returns the UTF-8 length, in bytes, that `source` converts to.
    fn utf8_len_of_utf16(source: &[u16]) -> Result<usize, ErrorCode>;

    /// Returns the UTF-16 length, in code units, that `source` converts to.
    fn utf16_len_of_utf8(source: &[u8]) -> Result<usize, ErrorCode>;

    /// Converts `source` into `dest`, returning the count of bytes written.
    fn convert_utf16_to_utf8(source: &[u16], dest: &mut [u8]) -> Result<usize, ErrorCode>;

    /// Converts `source` into `dest`, returning the count of code units written.
    fn convert_utf8_to_utf16(source: &[u8], dest: &mut [u16]) -> Result<usize, ErrorCode>;
}
