// SPDX-License-Identifier: Apache-2.0

use std::{error, fmt::Display, io};

use crate::page::{PageAddress, PageCount, FIRST_USER_PAGE};

/// Error conditions raised while preparing or executing a RAW tag operation.
///
/// Input errors (`OddLengthHex`, `InvalidStartPage`, `PageRangeOverflow`) are
/// detected before the tag is touched. Everything the tag transport reports is
/// carried verbatim in `TransportFailure`.
#[derive(Debug)]
pub enum Error {
    /// The hex text, once stripped of non-hex characters, has an odd length.
    OddLengthHex,

    /// Writes must not target the reserved pages below [`FIRST_USER_PAGE`].
    InvalidStartPage(PageAddress),

    /// The requested page range does not fit the page address space.
    PageRangeOverflow {
        /// First page of the range.
        start: PageAddress,
        /// Number of pages requested.
        count: PageCount,
    },

    /// The tag does not expose paged memory.
    NotSupportedTag,

    /// Something went wrong when talking to the tag.
    TransportFailure(io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OddLengthHex => {
                write!(f, "HEX parse error. Use pairs like: 48 65 6C 6C 6F")
            }
            Error::InvalidStartPage(page) => write!(
                f,
                "Start page must be >= {FIRST_USER_PAGE} (got {page})"
            ),
            Error::PageRangeOverflow { start, count } => write!(
                f,
                "Page range of {count} page(s) from {start} exceeds the address space"
            ),
            Error::NotSupportedTag => write!(f, "Tag is not MifareUltralight"),
            Error::TransportFailure(e) => write!(f, "NFC error: {e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::TransportFailure(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(error: io::Error) -> Error {
        Error::TransportFailure(error)
    }
}

impl From<Error> for io::Error {
    #[inline]
    fn from(error: Error) -> io::Error {
        match error {
            Error::TransportFailure(e) => e,
            Error::NotSupportedTag => {
                io::Error::new(io::ErrorKind::Unsupported, Error::NotSupportedTag)
            }
            e => io::Error::new(io::ErrorKind::InvalidInput, e),
        }
    }
}
