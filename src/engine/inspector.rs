// Tue Jan 13 2026 - Alex

use crate::config::Config;
use crate::engine::{EngineError, FileReport, Outcome};
use crate::format::{FileFormat, FormatSniffer};
use crate::pe::{self, PeParser, VerifyError};
use crate::source::{BufferSource, ByteSource, CancelToken, CancellableSource, MmapSource, SourceError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Sniffs, decodes and optionally verifies input files.
///
/// Every file gets its own source and parse context; the inspector only
/// holds configuration and the shared cancel token, so it is safe to use
/// from the rayon pool.
pub struct Inspector {
    config: Config,
    sniffer: FormatSniffer,
    parser: PeParser,
    cancel: CancelToken,
}

impl Inspector {
    pub fn new(config: Config) -> Self {
        let parser = PeParser::from_config(&config);
        Self {
            config,
            sniffer: FormatSniffer::new(),
            parser,
            cancel: CancelToken::new(),
        }
    }

    pub fn with_sniffer(mut self, sniffer: FormatSniffer) -> Self {
        self.sniffer = sniffer;
        self
    }

    /// Cancelling this token aborts every inspection still reading.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn inspect_path(&self, path: &Path) -> FileReport {
        let start = Instant::now();
        let opened: Result<Box<dyn ByteSource>, SourceError> = if self.config.use_mmap {
            MmapSource::open(path).map(|s| Box::new(s) as Box<dyn ByteSource>)
        } else {
            BufferSource::load(path).map(|s| Box::new(s) as Box<dyn ByteSource>)
        };

        match opened {
            Ok(source) => self.inspect_source(path, source),
            Err(source) => {
                log::error!("Failed to open {}: {}", path.display(), source);
                let err = EngineError::Source {
                    path: path.to_path_buf(),
                    source,
                };
                FileReport::new(path.to_path_buf(), 0, FileFormat::Unknown, Outcome::Failed(err))
                    .with_elapsed(start.elapsed())
            }
        }
    }

    pub fn inspect_source<S: ByteSource>(&self, path: &Path, source: S) -> FileReport {
        let start = Instant::now();
        let mut source = CancellableSource::new(source, self.cancel.clone());
        if let Some(timeout) = self.config.read_timeout() {
            source = source.with_timeout(timeout);
        }
        let size = source.len();

        let format = match self.sniffer.sniff_source(&source) {
            Ok(format) => format,
            Err(err) => {
                let err = EngineError::Source {
                    path: path.to_path_buf(),
                    source: err,
                };
                return FileReport::new(path.to_path_buf(), size, FileFormat::Unknown, Outcome::Failed(err))
                    .with_elapsed(start.elapsed());
            }
        };

        if format != FileFormat::Pe {
            log::info!("{}: {} file, skipping PE decode", path.display(), format);
            return FileReport::new(path.to_path_buf(), size, format, Outcome::Skipped).with_elapsed(start.elapsed());
        }

        let record = match self.parser.parse(&source) {
            Ok(record) => record,
            Err(err) => {
                log::error!("{}: {}", path.display(), err);
                return FileReport::new(path.to_path_buf(), size, format, Outcome::Failed(err.into()))
                    .with_elapsed(start.elapsed());
            }
        };

        let verification = if self.config.verify_with_reference {
            Some(Self::verify(&source, &record))
        } else {
            None
        };

        let mut report = FileReport::new(path.to_path_buf(), size, format, Outcome::Decoded(Box::new(record)));
        if let Some(verification) = verification {
            report = report.with_verification(verification);
        }
        report.with_elapsed(start.elapsed())
    }

    /// Inspects every path on a pool of `max_threads` workers. Reports come
    /// back in input order; `on_done` is called as each one finishes.
    pub fn inspect_all<F>(&self, paths: &[PathBuf], on_done: F) -> Result<Vec<FileReport>, EngineError>
    where
        F: Fn(&FileReport) + Sync,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.max_threads)
            .build()?;

        log::debug!("Inspecting {} files on {} threads", paths.len(), self.config.max_threads);

        let reports = pool.install(|| {
            paths
                .par_iter()
                .map(|path| {
                    let report = self.inspect_path(path);
                    on_done(&report);
                    report
                })
                .collect()
        });
        Ok(reports)
    }

    fn verify<S: ByteSource>(source: &S, record: &pe::DecodedRecord) -> Result<Vec<pe::Mismatch>, VerifyError> {
        let headers = source.read_range(0, record.header_end() as usize)?;
        pe::cross_check(record, &headers)
    }
}
