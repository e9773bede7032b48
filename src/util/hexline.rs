// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display, Formatter};

use crate::codec::ascii_char;

/// Uppercase hex bytes separated by single spaces.
pub(crate) struct HexLine<'a>(pub &'a [u8]);

impl Display for HexLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

/// Printable preview of the bytes, `.` for anything outside 32..=126.
pub(crate) struct AsciiLine<'a>(pub &'a [u8]);

impl Display for AsciiLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{}", ascii_char(*byte))?;
        }
        Ok(())
    }
}
