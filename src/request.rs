// SPDX-License-Identifier: Apache-2.0

//! RAW read and write requests, validated up front and run against a tag.
//!
//! A host collects the user's choices into a [`RawRequest`], and hands it
//! together with the discovered tag to [`RawRequest::execute`]. Requests are
//! plain values and can be deserialized from any `serde` format:
//!
//! ```
//! use ultralight_raw::request::RawRequest;
//!
//! let request: RawRequest = serde_json::from_str(
//!     r#"{ "write": { "payload": { "hex": "48 65 6C 6C 6F" } } }"#,
//! )
//! .unwrap();
//!
//! let prepared = match request {
//!     RawRequest::Write(write) => write.prepare().unwrap(),
//!     RawRequest::Read(_) => unreachable!(),
//! };
//! assert_eq!(prepared.start_page, 4);
//! assert_eq!(prepared.page_count, 2);
//! ```

use std::fmt::{self, Display, Formatter};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    codec::parse_hex,
    dump::TagDump,
    error::Error,
    page::{effective_page_count, pages_needed, Page, PageAddress, PageCount, FIRST_USER_PAGE},
    raw::{compose, read_pages, write_pages},
    tag::{with_session, Tag, TagInfo},
};

/// Pages read when the user does not say otherwise.
pub const DEFAULT_READ_PAGES: PageCount = 4;

fn default_start_page() -> PageAddress {
    FIRST_USER_PAGE
}

fn default_read_pages() -> PageCount {
    DEFAULT_READ_PAGES
}

/// The content to write, as the user typed it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// Text written as its UTF-8 encoding.
    Text(String),

    /// Hex digits; anything else in the string is ignored.
    Hex(String),
}

impl Payload {
    /// The bytes this payload stands for.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        match self {
            Payload::Text(text) => Ok(text.as_bytes().to_vec()),
            Payload::Hex(text) => parse_hex(text),
        }
    }

    /// Size feedback for the payload as typed so far.
    ///
    /// Hex text that does not parse yet counts as zero bytes.
    pub fn byte_info(&self) -> ByteInfo {
        let bytes = match self {
            Payload::Text(text) => text.len(),
            Payload::Hex(text) => parse_hex(text).map(|b| b.len()).unwrap_or(0),
        };

        ByteInfo {
            bytes,
            pages: pages_needed(bytes),
        }
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Text(String::new())
    }
}

/// Payload size and the pages it needs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ByteInfo {
    /// Payload size in bytes.
    pub bytes: usize,

    /// Pages needed to hold the payload.
    pub pages: PageCount,
}

impl Display for ByteInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes (pages needed: {})", self.bytes, self.pages)
    }
}

/// Dump a range of pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadRequest {
    /// First page to read.
    #[serde(default = "default_start_page")]
    pub start_page: PageAddress,

    /// Pages to read.
    #[serde(default = "default_read_pages")]
    pub page_count: PageCount,
}

impl Default for ReadRequest {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
            page_count: DEFAULT_READ_PAGES,
        }
    }
}

/// Write a payload over a range of pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRequest {
    /// First page to write; must not be a reserved page.
    #[serde(default = "default_start_page")]
    pub start_page: PageAddress,

    /// Pages to write. `None` or zero sizes the write to the payload.
    #[serde(default)]
    pub page_count: Option<PageCount>,

    /// What to write.
    #[serde(default)]
    pub payload: Payload,
}

impl Default for WriteRequest {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
            page_count: None,
            payload: Payload::default(),
        }
    }
}

impl WriteRequest {
    /// Validate the request and lay it out into pages.
    ///
    /// Nothing here touches a tag, so a bad start page or malformed hex is
    /// reported before the user is asked to present one.
    pub fn prepare(&self) -> Result<PreparedWrite, Error> {
        if self.start_page < FIRST_USER_PAGE {
            return Err(Error::InvalidStartPage(self.start_page));
        }

        let bytes = self.payload.to_bytes()?;
        let page_count = effective_page_count(self.page_count, bytes.len());
        let pages = compose(self.start_page, page_count, &bytes)?;

        debug!(
            "prepared RAW write: {} bytes -> {page_count} page(s) from page {}",
            bytes.len(),
            self.start_page
        );

        Ok(PreparedWrite {
            start_page: self.start_page,
            page_count,
            byte_len: bytes.len(),
            pages,
        })
    }
}

/// A validated write, ready to be sent to a tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedWrite {
    /// First page written.
    pub start_page: PageAddress,

    /// Pages written.
    pub page_count: PageCount,

    /// Payload size before padding or truncation.
    pub byte_len: usize,

    /// The pages, in write order.
    pub pages: Vec<Page>,
}

impl PreparedWrite {
    /// Last page written, or `None` for an empty write.
    pub fn last_page(&self) -> Option<PageAddress> {
        self.pages.last().map(|p| p.address)
    }
}

impl Display for PreparedWrite {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RAW WRITE: {} bytes → {} page(s). Hold tag…",
            self.byte_len, self.page_count
        )
    }
}

/// What to do with the next tag presented.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RawRequest {
    /// Dump pages.
    Read(ReadRequest),

    /// Write pages.
    Write(WriteRequest),
}

impl RawRequest {
    /// Run the request against `tag`.
    ///
    /// Inputs are validated before the tag session is opened. The session is
    /// closed once, whatever the outcome.
    pub fn execute<T: Tag + ?Sized>(&self, tag: &T) -> Result<Outcome, Error> {
        match self {
            RawRequest::Read(read) => {
                let mut session = tag.paged_session().ok_or(Error::NotSupportedTag)?;
                let dump = with_session(&mut session, |s| {
                    read_pages(s, read.start_page, read.page_count)
                })?;

                Ok(Outcome::Read {
                    info: TagInfo::from_tag(tag),
                    dump,
                })
            }
            RawRequest::Write(write) => {
                let prepared = write.prepare()?;
                let mut session = tag.paged_session().ok_or(Error::NotSupportedTag)?;
                with_session(&mut session, |s| write_pages(s, &prepared.pages))?;

                Ok(Outcome::Write {
                    info: TagInfo::from_tag(tag),
                    first_page: prepared.start_page,
                    last_page: prepared.last_page(),
                })
            }
        }
    }
}

/// Result of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Pages were read.
    Read {
        /// The tag that was read.
        info: TagInfo,
        /// What was read.
        dump: TagDump,
    },

    /// Pages were written.
    Write {
        /// The tag that was written.
        info: TagInfo,
        /// First page written.
        first_page: PageAddress,
        /// Last page written; `None` when the payload was empty.
        last_page: Option<PageAddress>,
    },
}

impl Outcome {
    /// The tag the request ran against.
    pub fn info(&self) -> &TagInfo {
        match self {
            Outcome::Read { info, .. } | Outcome::Write { info, .. } => info,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Read { .. } => write!(f, "RAW READ OK"),
            Outcome::Write {
                first_page,
                last_page: Some(last),
                ..
            } => write!(f, "RAW WRITE OK (pages {first_page}..{last})"),
            Outcome::Write { .. } => write!(f, "RAW WRITE OK (no pages)"),
        }
    }
}
