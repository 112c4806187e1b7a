// Tue Jan 13 2026 - Alex

pub mod error;
pub mod inspector;
pub mod report;

pub use error::EngineError;
pub use inspector::Inspector;
pub use report::{FileReport, Outcome};
