// Wed Jan 15 2026 - Alex

use crate::decoder::DecodeError;
use crate::pe::ParseState;
use crate::source::SourceError;
use thiserror::Error;

/// Fatal parse failures. Every variant knows the stage it stopped in.
#[derive(Error, Debug)]
pub enum PeError {
    #[error("{state}: read out of bounds for {structure}: needed {needed} bytes at offset {offset:#x}, {available} available")]
    ReadBounds {
        state: ParseState,
        structure: &'static str,
        offset: u64,
        needed: usize,
        available: u64,
    },
    #[error("DOS_STUB: e_lfanew {e_lfanew:#x} precedes the end of the DOS header ({header_size:#x})")]
    MalformedStubLength { e_lfanew: u64, header_size: usize },
    #[error("ARCH_PROBE: unknown optional header magic {magic:#x}")]
    UnknownArchitecture { magic: u64 },
    #[error("ARCH_PROBE: SizeOfOptionalHeader is zero")]
    MissingOptionalHeader,
    #[error("{state}: {source}")]
    Source {
        state: ParseState,
        #[source]
        source: SourceError,
    },
    #[error("{state}: {source}")]
    Decode {
        state: ParseState,
        #[source]
        source: DecodeError,
    },
}

impl PeError {
    pub fn state(&self) -> ParseState {
        match self {
            PeError::ReadBounds { state, .. } => *state,
            PeError::MalformedStubLength { .. } => ParseState::DosStub,
            PeError::UnknownArchitecture { .. } => ParseState::ArchProbe,
            PeError::MissingOptionalHeader => ParseState::ArchProbe,
            PeError::Source { state, .. } => *state,
            PeError::Decode { state, .. } => *state,
        }
    }

    /// True when the parse stopped because its source was cancelled or timed out.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            PeError::Source {
                source: SourceError::Cancelled | SourceError::TimedOut,
                ..
            }
        )
    }

    pub(crate) fn from_decode(state: ParseState, err: DecodeError) -> Self {
        match err {
            DecodeError::ReadBounds {
                structure,
                offset,
                needed,
                available,
            } => PeError::ReadBounds {
                state,
                structure,
                offset,
                needed,
                available,
            },
            DecodeError::Source(source) => PeError::Source { state, source },
            other => PeError::Decode { state, source: other },
        }
    }
}
