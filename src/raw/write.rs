// SPDX-License-Identifier: Apache-2.0

use log::{debug, trace};

use crate::{
    error::Error,
    page::{chunk_pages, page_range, Page, PageAddress, PageCount, FIRST_USER_PAGE, PAGE_SIZE},
    tag::TagSession,
};

/// Lay `payload` out over `page_count` pages starting at `start_page`.
///
/// Page `i` receives payload bytes `i * 4 .. i * 4 + 4`. Positions past the end
/// of the payload are zero. If the pages hold less than the payload, the rest
/// of the payload is dropped: a short explicit page count truncates the write.
///
/// ```
/// use ultralight_raw::{page::Page, raw::compose};
///
/// let pages = compose(4, 2, &[0x01, 0x02, 0x03]).unwrap();
/// assert_eq!(
///     pages,
///     vec![Page::new(4, [0x01, 0x02, 0x03, 0x00]), Page::new(5, [0; 4])]
/// );
/// ```
pub fn compose(
    start_page: PageAddress,
    page_count: PageCount,
    payload: &[u8],
) -> Result<Vec<Page>, Error> {
    if start_page < FIRST_USER_PAGE {
        return Err(Error::InvalidStartPage(start_page));
    }

    let range = page_range(start_page, page_count)?;
    let mut chunks = chunk_pages(payload);

    let pages: Vec<Page> = range
        .map(|address| Page::new(address, chunks.next().unwrap_or_default()))
        .collect();

    let capacity = pages.len() * PAGE_SIZE;
    if capacity < payload.len() {
        debug!(
            "truncating write: {} of {} payload bytes fit in {page_count} page(s)",
            capacity,
            payload.len()
        );
    }

    Ok(pages)
}

/// Write `pages` to `session` in the order given.
///
/// The first failed write aborts the operation; pages already written stay
/// written.
pub fn write_pages<S>(session: &mut S, pages: &[Page]) -> Result<(), Error>
where
    S: TagSession + ?Sized,
{
    debug!("writing {} page(s)", pages.len());

    for page in pages {
        trace!("write page {:#04x}", page.address);
        session.write_page(page.address, &page.data)?;
    }

    Ok(())
}
