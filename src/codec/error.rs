// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Integer too wide: {width} bytes, at most {max} supported")]
    IntegerTooWide { width: usize, max: usize },
}
