// Tue Jan 13 2026 - Alex

use crate::source::traits::checked_range;
use crate::source::{ByteSource, SourceError};
use bytes::Bytes;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// File-backed source over a read-only memory map.
pub struct MmapSource {
    // Zero-length files cannot be mapped on every platform.
    mmap: Option<Arc<Mmap>>,
}

impl MmapSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let file = File::open(path.as_ref())?;
        let mmap = if file.metadata()?.len() == 0 {
            None
        } else {
            // The map is read-only; callers must not truncate the file while it is open.
            Some(Arc::new(unsafe { Mmap::map(&file) }?))
        };
        log::trace!("Mapped {} ({} bytes)", path.as_ref().display(), mmap.as_ref().map_or(0, |m| m.len()));
        Ok(Self { mmap })
    }

    pub fn as_slice(&self) -> &[u8] {
        match &self.mmap {
            Some(mmap) => mmap.as_ref(),
            None => &[],
        }
    }
}

impl ByteSource for MmapSource {
    fn len(&self) -> u64 {
        self.as_slice().len() as u64
    }

    fn read_range(&self, offset: u64, length: usize) -> Result<Bytes, SourceError> {
        let range = checked_range(offset, length, self.len())?;
        Ok(Bytes::copy_from_slice(&self.as_slice()[range]))
    }
}
