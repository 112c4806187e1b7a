// Tue Jan 13 2026 - Alex

pub mod display;
pub mod error;
pub mod integer;

pub use display::{ascii, hex, section_name};
pub use error::CodecError;
pub use integer::{uint, uint_le, ByteOrder, MAX_INTEGER_WIDTH};
