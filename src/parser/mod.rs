// SPDX-License-Identifier: Apache-2.0

//! Byte-level encoding of pages.
//!
//! Pages leave the tag as flat bytes (a 16 byte block per read) and go back as
//! flat bytes (4 bytes per write). The traits here move between the two.

mod decoder;

mod encoder;

pub use decoder::Decoder;

pub use encoder::Encoder;
