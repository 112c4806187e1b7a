// Wed Jan 15 2026 - Alex

use crate::source::{ByteSource, SourceError};
use bytes::Bytes;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Wraps a source so every read first checks a cancel token and an optional deadline.
pub struct CancellableSource<S> {
    inner: S,
    token: CancelToken,
    deadline: Option<Instant>,
}

impl<S: ByteSource> CancellableSource<S> {
    pub fn new(inner: S, token: CancelToken) -> Self {
        Self {
            inner,
            token,
            deadline: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn check(&self) -> Result<(), SourceError> {
        if self.token.is_cancelled() {
            return Err(SourceError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(SourceError::TimedOut),
            _ => Ok(()),
        }
    }
}

impl<S: ByteSource> ByteSource for CancellableSource<S> {
    fn len(&self) -> u64 {
        self.inner.len()
    }

    fn read_range(&self, offset: u64, length: usize) -> Result<Bytes, SourceError> {
        self.check()?;
        self.inner.read_range(offset, length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BufferSource;

    #[test]
    fn test_cancelled_read() {
        let token = CancelToken::new();
        let source = CancellableSource::new(BufferSource::from(vec![0u8; 16]), token.clone());
        assert!(source.read_range(0, 4).is_ok());

        token.cancel();
        assert!(matches!(source.read_range(0, 4), Err(SourceError::Cancelled)));
    }

    #[test]
    fn test_expired_deadline() {
        let source = CancellableSource::new(BufferSource::from(vec![0u8; 16]), CancelToken::new())
            .with_deadline(Instant::now());
        assert!(matches!(source.read_range(0, 4), Err(SourceError::TimedOut)));
    }
}
