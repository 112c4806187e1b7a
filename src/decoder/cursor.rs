// Tue Jan 13 2026 - Alex

use std::fmt;

/// Absolute file offset of the next read. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cursor {
    offset: u64,
}

impl Cursor {
    pub fn new(offset: u64) -> Self {
        Self { offset }
    }

    pub fn start() -> Self {
        Self { offset: 0 }
    }

    pub fn position(&self) -> u64 {
        self.offset
    }

    /// Moves past `len` bytes and returns the offset they started at.
    pub fn advance(&mut self, len: usize) -> u64 {
        let start = self.offset;
        self.offset = self.offset.saturating_add(len as u64);
        start
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.offset)
    }
}

impl From<u64> for Cursor {
    fn from(offset: u64) -> Self {
        Self::new(offset)
    }
}
