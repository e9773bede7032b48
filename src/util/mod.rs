// SPDX-License-Identifier: Apache-2.0

//! Helpful primitives for developing the crate.

mod hexline;

pub(crate) use hexline::{AsciiLine, HexLine};
