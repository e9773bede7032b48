// SPDX-License-Identifier: Apache-2.0

use std::io;

use log::{debug, trace};

use crate::{
    dump::TagDump,
    error::Error,
    page::{page_range, Block, Page, PageAddress, PageCount, PAGES_PER_BLOCK},
    parser::Decoder,
    tag::TagSession,
};

/// Upper bound on pages reserved up front; larger dumps grow as blocks arrive.
const MAX_RESERVED_PAGES: usize = PAGES_PER_BLOCK * 64;

/// Read `page_count` pages starting at `start_page` through `read_block`.
///
/// `read_block(address)` stands for one hardware read and always yields the
/// four pages at `address..address + 4`. Reads are issued at `start_page`,
/// `start_page + 4`, ... until enough pages are collected. Pages of the final
/// block beyond `page_count` are discarded.
///
/// The first failing read aborts the whole operation.
pub fn assemble<F>(
    start_page: PageAddress,
    page_count: PageCount,
    mut read_block: F,
) -> Result<TagDump, Error>
where
    F: FnMut(PageAddress) -> io::Result<Block>,
{
    debug!("reading {page_count} page(s) from page {start_page}");

    page_range(start_page, page_count)?;

    let mut dump = TagDump::with_capacity((page_count as usize).min(MAX_RESERVED_PAGES));
    let mut remaining = page_count as usize;
    let mut address = start_page;

    while remaining > 0 {
        trace!("read block {address:#04x}");
        let block = read_block(address)?;
        let count = remaining.min(PAGES_PER_BLOCK);

        let mut rdr: &[u8] = &block;
        for i in 0..count {
            dump.push(Page::decode(&mut rdr, address + i as PageAddress)?);
        }

        remaining -= count;
        if remaining > 0 {
            address += PAGES_PER_BLOCK as PageAddress;
        }
    }

    Ok(dump)
}

/// [`assemble`] driven by a tag session's block reads.
pub fn read_pages<S>(
    session: &mut S,
    start_page: PageAddress,
    page_count: PageCount,
) -> Result<TagDump, Error>
where
    S: TagSession + ?Sized,
{
    assemble(start_page, page_count, |address| session.read_block(address))
}
