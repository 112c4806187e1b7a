// Tue Jan 13 2026 - Alex

use crate::source::traits::checked_range;
use crate::source::{ByteSource, SourceError};
use bytes::Bytes;
use std::fs;
use std::path::Path;

/// In-memory source. Reads are zero-copy slices of the shared buffer.
#[derive(Debug, Clone)]
pub struct BufferSource {
    data: Bytes,
}

impl BufferSource {
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    pub fn from_slice(data: &[u8]) -> Self {
        Self { data: Bytes::copy_from_slice(data) }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let data = fs::read(path.as_ref())?;
        Ok(Self::new(data))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for BufferSource {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl ByteSource for BufferSource {
    fn len(&self) -> u64 {
        self.data.len() as u64
    }

    fn read_range(&self, offset: u64, length: usize) -> Result<Bytes, SourceError> {
        let range = checked_range(offset, length, self.len())?;
        Ok(self.data.slice(range))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_range() {
        let source = BufferSource::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(source.len(), 5);
        assert_eq!(&source.read_range(1, 3).unwrap()[..], &[2, 3, 4]);
        assert!(source.read_range(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_read_past_end() {
        let source = BufferSource::from_slice(&[0u8; 8]);
        let err = source.read_range(6, 4).unwrap_err();
        assert!(matches!(err, SourceError::OutOfRange { offset: 6, length: 4, available: 8 }));
    }
}
