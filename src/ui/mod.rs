// Wed Jan 15 2026 - Alex

pub mod cli;
pub mod progress;

pub use cli::{Args, CommandHandler};
pub use progress::ProgressManager;
