// Tue Jan 13 2026 - Alex

use crate::codec::CodecError;
use crate::source::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Read out of bounds for {structure}: needed {needed} bytes at offset {offset:#x}, {available} available")]
    ReadBounds {
        structure: &'static str,
        offset: u64,
        needed: usize,
        available: u64,
    },
    #[error("Field not found: {structure}.{field}")]
    MissingField {
        structure: &'static str,
        field: String,
    },
    #[error("Codec error in {structure}.{field}: {source}")]
    Codec {
        structure: &'static str,
        field: &'static str,
        #[source]
        source: CodecError,
    },
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}
