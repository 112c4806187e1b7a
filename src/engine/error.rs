// Tue Jan 13 2026 - Alex

use crate::pe::PeError;
use crate::source::SourceError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("cannot read {path}: {source}", path = path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: SourceError,
    },
    #[error(transparent)]
    Parse(#[from] PeError),
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl EngineError {
    pub fn is_cancelled(&self) -> bool {
        match self {
            EngineError::Source { source, .. } => {
                matches!(source, SourceError::Cancelled | SourceError::TimedOut)
            }
            EngineError::Parse(err) => err.is_cancelled(),
            EngineError::ThreadPool(_) => false,
        }
    }
}
