// SPDX-License-Identifier: Apache-2.0

use crate::page::Page;
use std::io::Write;

/// Trait used to express encoding relationships.
pub trait Encoder<T> {
    /// Encodes the object to raw bytes.
    fn encode(&self, writer: &mut impl Write, params: T) -> Result<(), std::io::Error>;
}

impl<const N: usize> Encoder<()> for [u8; N] {
    fn encode(&self, writer: &mut impl Write, _params: ()) -> Result<(), std::io::Error> {
        writer.write_all(self)?;
        Ok(())
    }
}

impl Encoder<()> for Page {
    fn encode(&self, writer: &mut impl Write, params: ()) -> Result<(), std::io::Error> {
        self.data.encode(writer, params)
    }
}

impl Encoder<()> for [Page] {
    fn encode(&self, writer: &mut impl Write, _params: ()) -> Result<(), std::io::Error> {
        for page in self {
            page.encode(writer, ())?;
        }
        Ok(())
    }
}
