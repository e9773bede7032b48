// SPDX-License-Identifier: Apache-2.0

//! Page geometry of Ultralight-class tags and the arithmetic around it.

use std::convert::TryFrom;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

use crate::error::Error;

/// Index of a page in tag memory.
pub type PageAddress = u32;

/// Number of pages an operation spans.
pub type PageCount = u32;

/// Bytes per page.
pub const PAGE_SIZE: usize = 4;

/// Pages returned by a single hardware read.
pub const PAGES_PER_BLOCK: usize = 4;

/// Bytes returned by a single hardware read.
pub const BLOCK_SIZE: usize = PAGE_SIZE * PAGES_PER_BLOCK;

/// Pages 0-3 hold the UID, lock bytes and OTP area.
pub const FIRST_USER_PAGE: PageAddress = 4;

/// The atomic write unit.
pub type PageBuffer = [u8; PAGE_SIZE];

/// The result of one hardware read: four consecutive pages.
pub type Block = [u8; BLOCK_SIZE];

const_assert_eq!(std::mem::size_of::<PageBuffer>(), 4);
const_assert_eq!(std::mem::size_of::<Block>(), 16);

/// A page buffer together with the address it lives at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Where the page lives in tag memory.
    pub address: PageAddress,

    /// The four bytes of the page.
    pub data: PageBuffer,
}

impl Page {
    /// Create a page at `address` holding `data`.
    pub fn new(address: PageAddress, data: PageBuffer) -> Self {
        Self { address, data }
    }
}

/// Number of pages required to hold `byte_count` bytes.
///
/// Zero bytes need zero pages; anything else rounds up to whole pages.
/// Counts beyond the page address space saturate at `PageCount::MAX`.
pub fn pages_needed(byte_count: usize) -> PageCount {
    PageCount::try_from(byte_count.div_ceil(PAGE_SIZE)).unwrap_or(PageCount::MAX)
}

/// Page count for a write of `byte_count` bytes.
///
/// An explicit count above zero is used as is, even when it is smaller than
/// the payload needs (the excess is dropped) or larger (the tail is zeroed).
/// Otherwise the count is derived from the payload size.
pub fn effective_page_count(explicit: Option<PageCount>, byte_count: usize) -> PageCount {
    match explicit {
        Some(count) if count > 0 => count,
        _ => pages_needed(byte_count),
    }
}

/// Address range covered by `count` pages starting at `start`.
pub fn page_range(start: PageAddress, count: PageCount) -> Result<Range<PageAddress>, Error> {
    let end = start
        .checked_add(count)
        .ok_or(Error::PageRangeOverflow { start, count })?;
    Ok(start..end)
}

/// Split `bytes` into page-sized chunks, zero-padding the last one.
pub fn chunk_pages(bytes: &[u8]) -> impl Iterator<Item = PageBuffer> + '_ {
    bytes.chunks(PAGE_SIZE).map(|chunk| {
        let mut buf = PageBuffer::default();
        buf[..chunk.len()].copy_from_slice(chunk);
        buf
    })
}
