// Tue Jan 13 2026 - Alex

pub mod cursor;
pub mod error;
pub mod record;
pub mod sequential;

pub use cursor::Cursor;
pub use error::DecodeError;
pub use record::{RawField, RawRecord};
pub use sequential::{decode, SequentialDecoder};
