// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Out of range: {length} bytes at offset {offset:#x}, source holds {available}")]
    OutOfRange {
        offset: u64,
        length: usize,
        available: u64,
    },
    #[error("Read cancelled")]
    Cancelled,
    #[error("Read deadline exceeded")]
    TimedOut,
}
