// Tue Jan 13 2026 - Alex

use crate::engine::EngineError;
use crate::format::FileFormat;
use crate::pe::{DecodedRecord, Mismatch, VerifyError};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub enum Outcome {
    Decoded(Box<DecodedRecord>),
    /// Not a PE file; only the sniffed format is reported.
    Skipped,
    Failed(EngineError),
}

impl Outcome {
    pub fn is_decoded(&self) -> bool {
        matches!(self, Outcome::Decoded(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn record(&self) -> Option<&DecodedRecord> {
        match self {
            Outcome::Decoded(record) => Some(record),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&EngineError> {
        match self {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Result of inspecting one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub size: u64,
    pub format: FileFormat,
    pub outcome: Outcome,
    /// Present only when verification was requested and a record was decoded.
    pub verification: Option<Result<Vec<Mismatch>, VerifyError>>,
    pub elapsed: Duration,
}

impl FileReport {
    pub fn new(path: PathBuf, size: u64, format: FileFormat, outcome: Outcome) -> Self {
        Self {
            path,
            size,
            format,
            outcome,
            verification: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_verification(mut self, verification: Result<Vec<Mismatch>, VerifyError>) -> Self {
        self.verification = Some(verification);
        self
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// A PE file that could not be decoded, or a file that could not be read.
    pub fn is_failure(&self) -> bool {
        self.outcome.is_failed()
    }

    pub fn mismatches(&self) -> &[Mismatch] {
        match &self.verification {
            Some(Ok(mismatches)) => mismatches,
            _ => &[],
        }
    }
}
