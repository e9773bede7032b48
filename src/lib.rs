// SPDX-License-Identifier: Apache-2.0

//! The `ultralight_raw` crate maps arbitrary payloads onto the paged memory
//! of Ultralight-class NFC tags and back.
//!
//! ## Memory layout
//!
//! These tags expose their memory as flat 4 byte pages. Pages 0 to 3 hold the
//! UID, lock bytes and OTP area; user data starts at page 4. Writes happen one
//! page at a time, while a single read always returns four consecutive pages
//! (16 bytes), whether or not all of them are needed.
//!
//! ## Writing
//!
//! [`request::WriteRequest::prepare`] turns user input (text or loosely
//! formatted hex) into a list of pages, zero-padding the last one. An explicit
//! page count may be larger than the payload (the extra pages are zeroed) or
//! smaller (the payload is truncated). The pages are then written in ascending
//! order by [`raw::write_pages`].
//!
//! ## Reading
//!
//! [`raw::assemble`] issues block reads four pages apart, keeps only the
//! requested pages and returns a [`dump::TagDump`], which renders as an
//! address-prefixed hex listing plus a contiguous ASCII preview.
//!
//! ## Remarks
//!
//! The crate does not talk to hardware. Transports implement
//! [`tag::TagSession`] and [`tag::Tag`]; everything here is synchronous and
//! holds no state between calls. The crate logs through the `log` facade and
//! never installs a logger.
//!
//! ```
//! use std::io;
//! use ultralight_raw::{
//!     page::{Block, PageAddress, PageBuffer},
//!     raw::{compose, read_pages, write_pages},
//!     tag::{with_session, TagSession},
//! };
//!
//! struct Memory(Vec<u8>);
//!
//! impl TagSession for Memory {
//!     fn connect(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//!
//!     fn read_block(&mut self, address: PageAddress) -> io::Result<Block> {
//!         let start = address as usize * 4;
//!         let mut block = [0u8; 16];
//!         block.copy_from_slice(&self.0[start..start + 16]);
//!         Ok(block)
//!     }
//!
//!     fn write_page(&mut self, address: PageAddress, data: &PageBuffer) -> io::Result<()> {
//!         let start = address as usize * 4;
//!         self.0[start..start + 4].copy_from_slice(data);
//!         Ok(())
//!     }
//!
//!     fn close(&mut self) -> io::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut tag = Memory(vec![0; 64 * 4]);
//! let pages = compose(4, 2, b"Hello").unwrap();
//! with_session(&mut tag, |s| write_pages(s, &pages)).unwrap();
//!
//! let dump = with_session(&mut tag, |s| read_pages(s, 4, 2)).unwrap();
//! assert_eq!(dump.format_hex(), "04: 48 65 6C 6C\n05: 6F 00 00 00");
//! assert_eq!(dump.format_ascii(), "Hello...");
//! ```

#![deny(clippy::all)]
#![deny(missing_docs)]

pub mod codec;

pub mod dump;

/// Error module.
pub mod error;

pub mod page;

/// Module for Encoding and Decoding pages.
pub mod parser;

pub mod raw;
pub mod request;
pub mod tag;
mod util;

pub use error::Error;
