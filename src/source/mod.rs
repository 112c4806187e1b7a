// Tue Jan 13 2026 - Alex

pub mod buffer;
pub mod cancel;
pub mod error;
pub mod mmap;
pub mod traits;

pub use buffer::BufferSource;
pub use cancel::{CancelToken, CancellableSource};
pub use error::SourceError;
pub use mmap::MmapSource;
pub use traits::ByteSource;
