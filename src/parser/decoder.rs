// SPDX-License-Identifier: Apache-2.0

use crate::page::{Page, PageAddress, PageBuffer};
use std::io::Read;

/// Trait used to express decoding relationships.
pub trait Decoder<T>: Sized {
    /// Decodes from the reader with the given parameters.
    fn decode(reader: &mut impl Read, params: T) -> Result<Self, std::io::Error>;
}

impl<const N: usize> Decoder<()> for [u8; N] {
    fn decode(reader: &mut impl Read, _params: ()) -> Result<Self, std::io::Error> {
        let mut buf = [0u8; N];
        reader.read_exact(&mut buf)?;
        Ok(buf)
    }
}

/// A page carries no address on the wire; the caller supplies it.
impl Decoder<PageAddress> for Page {
    fn decode(reader: &mut impl Read, address: PageAddress) -> Result<Self, std::io::Error> {
        Ok(Page::new(
            address,
            <PageBuffer as Decoder<()>>::decode(reader, ())?,
        ))
    }
}
