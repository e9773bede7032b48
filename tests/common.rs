// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, io, rc::Rc};

use ultralight_raw::{
    page::{Block, PageAddress, PageBuffer, BLOCK_SIZE, PAGE_SIZE},
    tag::{Tag, TagSession},
};

/// Every collaborator call the codec makes, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Connect,
    ReadBlock(PageAddress),
    WritePage(PageAddress, PageBuffer),
    Close,
}

#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct State {
    pub memory: Vec<u8>,
    pub calls: Vec<Call>,
    pub fail_connect: bool,
    pub fail_read_at: Option<PageAddress>,
    pub fail_write_at: Option<PageAddress>,
    pub fail_close: bool,
}

/// An in-memory Ultralight tag.
///
/// Reads past the end of memory wrap around to page 0, like the real chips.
#[derive(Clone, Debug)]
pub struct MockTag {
    pub uid: Vec<u8>,
    pub techs: Vec<String>,
    pub paged: bool,
    pub state: Rc<RefCell<State>>,
}

impl MockTag {
    pub fn new(pages: usize) -> Self {
        Self {
            uid: vec![0x04, 0x5A, 0x3C, 0x21, 0x9B, 0x6E, 0x80],
            techs: vec![
                "android.nfc.tech.NfcA".to_string(),
                "android.nfc.tech.MifareUltralight".to_string(),
            ],
            paged: true,
            state: Rc::new(RefCell::new(State {
                memory: vec![0; pages * PAGE_SIZE],
                ..Default::default()
            })),
        }
    }

    /// A tag whose memory holds its own byte offsets.
    #[allow(dead_code)]
    pub fn counting(pages: usize) -> Self {
        let tag = Self::new(pages);
        for (i, b) in tag.state.borrow_mut().memory.iter_mut().enumerate() {
            *b = i as u8;
        }
        tag
    }

    #[allow(dead_code)]
    pub fn page(&self, address: PageAddress) -> PageBuffer {
        let state = self.state.borrow();
        let start = address as usize * PAGE_SIZE;
        let mut buf = [0u8; PAGE_SIZE];
        buf.copy_from_slice(&state.memory[start..start + PAGE_SIZE]);
        buf
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }
}

pub struct MockSession(Rc<RefCell<State>>);

fn failure(what: &str) -> io::Error {
    io::Error::new(io::ErrorKind::TimedOut, format!("{what} failed: tag lost"))
}

impl TagSession for MockSession {
    fn connect(&mut self) -> io::Result<()> {
        let mut state = self.0.borrow_mut();
        state.calls.push(Call::Connect);
        if state.fail_connect {
            return Err(failure("connect"));
        }
        Ok(())
    }

    fn read_block(&mut self, address: PageAddress) -> io::Result<Block> {
        let mut state = self.0.borrow_mut();
        state.calls.push(Call::ReadBlock(address));
        if state.fail_read_at == Some(address) {
            return Err(failure("read"));
        }

        let len = state.memory.len();
        let mut block = [0u8; BLOCK_SIZE];
        for (i, b) in block.iter_mut().enumerate() {
            *b = state.memory[(address as usize * PAGE_SIZE + i) % len];
        }
        Ok(block)
    }

    fn write_page(&mut self, address: PageAddress, data: &PageBuffer) -> io::Result<()> {
        let mut state = self.0.borrow_mut();
        state.calls.push(Call::WritePage(address, *data));
        if state.fail_write_at == Some(address) {
            return Err(failure("write"));
        }

        let start = address as usize * PAGE_SIZE;
        if start + PAGE_SIZE > state.memory.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "page out of range",
            ));
        }
        state.memory[start..start + PAGE_SIZE].copy_from_slice(data);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        let mut state = self.0.borrow_mut();
        state.calls.push(Call::Close);
        if state.fail_close {
            return Err(failure("close"));
        }
        Ok(())
    }
}

impl Tag for MockTag {
    type Session = MockSession;

    fn id(&self) -> &[u8] {
        &self.uid
    }

    fn tech_list(&self) -> Vec<String> {
        self.techs.clone()
    }

    fn paged_session(&self) -> Option<MockSession> {
        if self.paged {
            Some(MockSession(self.state.clone()))
        } else {
            None
        }
    }
}
