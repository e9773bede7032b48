// SPDX-License-Identifier: Apache-2.0

//! Conversions between user text and payload bytes.

use crate::error::Error;

/// Parse loosely formatted hex text into bytes.
///
/// Every character outside `[0-9A-Fa-f]` is ignored, so `"48 65:6c-6C 6F"`
/// and `"48656C6C6F"` decode alike. Text with no hex digits at all decodes to
/// an empty payload.
///
/// ```
/// use ultralight_raw::codec::parse_hex;
///
/// assert_eq!(parse_hex("48 65 6C 6C 6F").unwrap(), b"Hello");
/// assert!(parse_hex("!!@@").unwrap().is_empty());
/// ```
pub fn parse_hex(text: &str) -> Result<Vec<u8>, Error> {
    let cleaned: String = text.chars().filter(char::is_ascii_hexdigit).collect();

    if cleaned.is_empty() {
        return Ok(Vec::new());
    }

    if cleaned.len() % 2 != 0 {
        return Err(Error::OddLengthHex);
    }

    hex::decode(cleaned).map_err(|_| Error::OddLengthHex)
}

/// Uppercase hex, two characters per byte, no separators.
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Printable ASCII preview: one character per byte, `.` outside 32..=126.
pub fn encode_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| ascii_char(b)).collect()
}

#[inline]
pub(crate) fn ascii_char(byte: u8) -> char {
    match byte {
        32..=126 => byte as char,
        _ => '.',
    }
}
