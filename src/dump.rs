// SPDX-License-Identifier: Apache-2.0

//! Rendering of pages read back from a tag.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
    page::{Page, PageAddress},
    util::{AsciiLine, HexLine},
};

/// Pages read from a tag, in ascending address order.
///
/// A dump is built once per read and never modified afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDump {
    pages: Vec<Page>,
}

impl TagDump {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            pages: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// The pages of the dump.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Number of pages in the dump.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the dump holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Address of the first page, if any.
    pub fn first_address(&self) -> Option<PageAddress> {
        self.pages.first().map(|p| p.address)
    }

    /// The page contents as one contiguous buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pages.iter().flat_map(|p| p.data).collect()
    }

    /// One `"NN: XX XX XX XX"` line per page.
    pub fn format_hex(&self) -> String {
        format_hex(self)
    }

    /// The ASCII preview of every page, concatenated.
    pub fn format_ascii(&self) -> String {
        format_ascii(self)
    }
}

impl From<Vec<Page>> for TagDump {
    fn from(pages: Vec<Page>) -> Self {
        Self { pages }
    }
}

/// Render one line per page: the address padded to two digits, a colon, then
/// the four bytes as uppercase hex separated by spaces.
///
/// ```
/// use ultralight_raw::{dump::{format_hex, TagDump}, page::Page};
///
/// let dump = TagDump::from(vec![Page::new(4, [0xDE, 0xAD, 0xBE, 0xEF])]);
/// assert_eq!(format_hex(&dump), "04: DE AD BE EF");
/// ```
pub fn format_hex(dump: &TagDump) -> String {
    dump.pages
        .iter()
        .map(|page| format!("{:02}: {}", page.address, HexLine(&page.data)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the ASCII preview of every page as one unbroken string.
pub fn format_ascii(dump: &TagDump) -> String {
    dump.pages
        .iter()
        .map(|page| AsciiLine(&page.data).to_string())
        .collect()
}

impl Display for TagDump {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RAW dump (hex):\n{}\n\nRAW (ascii):\n{}",
            format_hex(self),
            format_ascii(self)
        )
    }
}
