// SPDX-License-Identifier: Apache-2.0

//! The tag as seen by this crate: metadata plus an optional paged-memory session.
//!
//! Transports (PC/SC readers, platform NFC stacks, test doubles) implement
//! [`TagSession`] and [`Tag`]; the codec only ever talks to those traits.

use std::{fmt, io};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::{
    codec::encode_hex,
    error::Error,
    page::{Block, PageAddress, PageBuffer},
};

/// A connection to the paged memory of a single tag.
///
/// Every call is synchronous. Timeouts, cancellation and retries are the
/// business of the implementation.
pub trait TagSession {
    /// Open the connection.
    fn connect(&mut self) -> io::Result<()>;

    /// Read the four pages starting at `address`.
    ///
    /// The hardware always transfers a full block, even when the caller only
    /// needs part of it.
    fn read_block(&mut self, address: PageAddress) -> io::Result<Block>;

    /// Write a single page.
    fn write_page(&mut self, address: PageAddress, data: &PageBuffer) -> io::Result<()>;

    /// Close the connection.
    fn close(&mut self) -> io::Result<()>;
}

impl<S: TagSession + ?Sized> TagSession for &mut S {
    fn connect(&mut self) -> io::Result<()> {
        (**self).connect()
    }

    fn read_block(&mut self, address: PageAddress) -> io::Result<Block> {
        (**self).read_block(address)
    }

    fn write_page(&mut self, address: PageAddress, data: &PageBuffer) -> io::Result<()> {
        (**self).write_page(address, data)
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// A discovered tag.
pub trait Tag {
    /// Session type handed out for paged-memory access.
    type Session: TagSession;

    /// Raw tag identifier.
    fn id(&self) -> &[u8];

    /// Fully qualified names of the technologies the tag supports.
    fn tech_list(&self) -> Vec<String>;

    /// A paged-memory session, or `None` if the tag has no such capability.
    fn paged_session(&self) -> Option<Self::Session>;
}

/// Connect `session`, run `op`, then close the session.
///
/// The close is attempted whether `op` succeeded or not, and its failure is
/// only logged: the result of `op` is what the caller gets. If connecting
/// fails, `op` is not run and no close is attempted.
pub fn with_session<S, T, F>(session: &mut S, op: F) -> Result<T, Error>
where
    S: TagSession + ?Sized,
    F: FnOnce(&mut S) -> Result<T, Error>,
{
    session.connect()?;
    debug!("tag session connected");

    let result = op(session);

    if let Err(e) = session.close() {
        warn!("ignoring failure to close tag session: {e}");
    }

    result
}

/// Presentational summary of a tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    /// Raw tag identifier.
    #[serde(with = "serde_bytes")]
    pub uid: Vec<u8>,

    /// Short technology names, e.g. `MifareUltralight`.
    pub techs: Vec<String>,
}

impl TagInfo {
    /// Collect the summary from `tag`.
    pub fn from_tag<T: Tag + ?Sized>(tag: &T) -> Self {
        Self {
            uid: tag.id().to_vec(),
            techs: tag
                .tech_list()
                .iter()
                .map(|tech| short_tech_name(tech).to_string())
                .collect(),
        }
    }
}

impl fmt::Display for TagInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tag UID: {}\nTech: {}",
            encode_hex(&self.uid),
            self.techs.join(", ")
        )
    }
}

fn short_tech_name(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i + 1..],
        None => name,
    }
}
