// Wed Jan 15 2026 - Alex

pub mod architecture;
pub mod characteristics;
pub mod context;
pub mod descriptions;
pub mod error;
pub mod machine;
pub mod parser;
pub mod record;
pub mod state;
pub mod verify;

#[cfg(test)]
pub(crate) mod fixture;

pub use architecture::{Architecture, PE32_MAGIC, PE32_PLUS_MAGIC};
pub use characteristics::{CoffCharacteristics, SectionCharacteristics};
pub use context::ParseContext;
pub use error::PeError;
pub use machine::MachineType;
pub use parser::PeParser;
pub use record::{DecodedRecord, SECTION_KEYS};
pub use state::ParseState;
pub use verify::{cross_check, Mismatch, VerifyError};
