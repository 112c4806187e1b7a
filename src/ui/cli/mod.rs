// Wed Jan 15 2026 - Alex

pub mod args;
pub mod handler;

pub use args::{Args, DirectoryArg};
pub use handler::CommandHandler;

use clap::Parser;

pub fn parse_args() -> Args {
    Args::parse()
}

/// Parses the command line and inspects every input. Returns `false` when
/// any file failed to decode.
pub fn run() -> anyhow::Result<bool> {
    let args = parse_args();
    let handler = CommandHandler::new();
    handler.execute(args)
}
