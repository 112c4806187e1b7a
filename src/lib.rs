// Tue Jan 15 2026 - Alex

pub mod codec;
pub mod config;
pub mod decoder;
pub mod engine;
pub mod format;
pub mod output;
pub mod pe;
pub mod schema;
pub mod source;
pub mod ui;
pub mod utils;

pub use config::{Config, DirectoryPolicy};
pub use decoder::{RawField, RawRecord, SequentialDecoder};
pub use engine::{FileReport, Inspector};
pub use format::{sniff, FileFormat, FormatSniffer};
pub use pe::{Architecture, DecodedRecord, ParseState, PeError, PeParser};
pub use schema::StructSchema;
pub use source::{BufferSource, ByteSource, CancelToken, CancellableSource, MmapSource};
