// Tue Jan 13 2026 - Alex

pub mod json;
pub mod report;

pub use json::{FileView, JsonError, JsonSerializer, RecordView};
pub use report::ReportGenerator;
