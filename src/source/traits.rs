// Wed Jan 15 2026 - Alex

use crate::source::SourceError;
use bytes::Bytes;
use std::ops::Range;
use std::sync::Arc;

/// Randomly addressable, read-only bytes.
///
/// Reads never return short: a request that reaches past `len()` fails with
/// [`SourceError::OutOfRange`].
pub trait ByteSource: Send + Sync {
    fn len(&self) -> u64;
    fn read_range(&self, offset: u64, length: usize) -> Result<Bytes, SourceError>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    fn len(&self) -> u64 {
        (**self).len()
    }

    fn read_range(&self, offset: u64, length: usize) -> Result<Bytes, SourceError> {
        (**self).read_range(offset, length)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Arc<S> {
    fn len(&self) -> u64 {
        (**self).len()
    }

    fn read_range(&self, offset: u64, length: usize) -> Result<Bytes, SourceError> {
        (**self).read_range(offset, length)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn len(&self) -> u64 {
        (**self).len()
    }

    fn read_range(&self, offset: u64, length: usize) -> Result<Bytes, SourceError> {
        (**self).read_range(offset, length)
    }
}

pub(crate) fn checked_range(offset: u64, length: usize, available: u64) -> Result<Range<usize>, SourceError> {
    let out_of_range = || SourceError::OutOfRange { offset, length, available };
    let end = offset.checked_add(length as u64).ok_or_else(out_of_range)?;
    if end > available {
        return Err(out_of_range());
    }
    let start = usize::try_from(offset).map_err(|_| out_of_range())?;
    let end = usize::try_from(end).map_err(|_| out_of_range())?;
    Ok(start..end)
}
