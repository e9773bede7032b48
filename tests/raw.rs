// SPDX-License-Identifier: Apache-2.0

mod common;

use common::{Call, MockTag};
use ultralight_raw::{
    page::Page,
    raw::{compose, read_pages, write_pages},
    tag::{with_session, Tag},
    Error,
};

#[test]
fn write_then_read_back() {
    let tag = MockTag::new(16);
    let mut session = tag.paged_session().unwrap();

    let pages = compose(4, 3, b"Hello, NFC").unwrap();
    with_session(&mut session, |s| write_pages(s, &pages)).unwrap();

    let dump = with_session(&mut session, |s| read_pages(s, 4, 3)).unwrap();
    assert_eq!(dump.pages(), &pages[..]);
    assert_eq!(dump.to_bytes(), b"Hello, NFC\0\0".to_vec());
    assert_eq!(dump.format_ascii(), "Hello, NFC..");
    assert_eq!(
        dump.format_hex(),
        "04: 48 65 6C 6C\n05: 6F 2C 20 4E\n06: 46 43 00 00"
    );
}

#[test]
fn writes_go_out_in_ascending_order() {
    let tag = MockTag::new(16);
    let mut session = tag.paged_session().unwrap();

    let pages = compose(5, 3, &[0x11; 9]).unwrap();
    with_session(&mut session, |s| write_pages(s, &pages)).unwrap();

    assert_eq!(
        tag.calls(),
        vec![
            Call::Connect,
            Call::WritePage(5, [0x11; 4]),
            Call::WritePage(6, [0x11; 4]),
            Call::WritePage(7, [0x11, 0, 0, 0]),
            Call::Close,
        ]
    );
}

#[test]
fn write_failure_aborts_and_closes_once() {
    let tag = MockTag::new(16);
    tag.state.borrow_mut().fail_write_at = Some(5);
    let mut session = tag.paged_session().unwrap();

    let pages = compose(4, 4, &[0xAB; 16]).unwrap();
    let result = with_session(&mut session, |s| write_pages(s, &pages));

    assert!(matches!(result, Err(Error::TransportFailure(_))));
    assert_eq!(
        tag.calls(),
        vec![
            Call::Connect,
            Call::WritePage(4, [0xAB; 4]),
            Call::WritePage(5, [0xAB; 4]),
            Call::Close,
        ]
    );
    // page 4 stays written
    assert_eq!(tag.page(4), [0xAB; 4]);
    assert_eq!(tag.page(6), [0; 4]);
}

#[test]
fn read_over_fetches_and_discards() {
    let tag = MockTag::counting(16);
    let mut session = tag.paged_session().unwrap();

    let dump = with_session(&mut session, |s| read_pages(s, 4, 6)).unwrap();

    assert_eq!(
        tag.calls(),
        vec![
            Call::Connect,
            Call::ReadBlock(4),
            Call::ReadBlock(8),
            Call::Close
        ]
    );
    assert_eq!(dump.len(), 6);
    assert_eq!(dump.pages()[0], Page::new(4, [16, 17, 18, 19]));
    assert_eq!(dump.pages()[5], Page::new(9, [36, 37, 38, 39]));
}

#[test]
fn read_near_end_of_memory_wraps_in_transport() {
    // 16 page tag: the block at page 14 returns pages 14, 15, 0, 1
    let tag = MockTag::counting(16);
    let mut session = tag.paged_session().unwrap();

    let dump = with_session(&mut session, |s| read_pages(s, 14, 2)).unwrap();

    assert_eq!(
        dump.pages(),
        &[
            Page::new(14, [56, 57, 58, 59]),
            Page::new(15, [60, 61, 62, 63]),
        ]
    );
}

#[test]
fn read_failure_propagates_verbatim() {
    let tag = MockTag::counting(32);
    tag.state.borrow_mut().fail_read_at = Some(8);
    let mut session = tag.paged_session().unwrap();

    let err = with_session(&mut session, |s| read_pages(s, 4, 8)).unwrap_err();

    match err {
        Error::TransportFailure(e) => {
            assert_eq!(e.kind(), std::io::ErrorKind::TimedOut);
            assert_eq!(e.to_string(), "read failed: tag lost");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        tag.calls(),
        vec![
            Call::Connect,
            Call::ReadBlock(4),
            Call::ReadBlock(8),
            Call::Close
        ]
    );
}

#[test]
fn close_failure_keeps_read_result() {
    let tag = MockTag::counting(16);
    tag.state.borrow_mut().fail_close = true;
    let mut session = tag.paged_session().unwrap();

    let dump = with_session(&mut session, |s| read_pages(s, 4, 1)).unwrap();
    assert_eq!(dump.pages(), &[Page::new(4, [16, 17, 18, 19])]);
}
