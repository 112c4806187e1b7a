// Wed Jan 15 2026 - Alex

pub mod magic;

pub use magic::{sniff, FileFormat, FormatSniffer, MagicSignature, ELF_MAGIC, PE_MAGIC};
