// SPDX-License-Identifier: Apache-2.0

//! Page-aligned RAW reads and writes.
//!
//! Writes go out one page at a time; reads come back four pages at a time.
//! Both walk the tag in ascending address order and stop at the first
//! transport failure.

mod read;
mod write;

pub use read::{assemble, read_pages};
pub use write::{compose, write_pages};
