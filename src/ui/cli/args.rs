// Wed Jan 15 2026 - Alex

use crate::config::{Config, DirectoryPolicy};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exe-anatomy")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Identifies executable formats and decodes PE/COFF headers", long_about = None)]
pub struct Args {
    /// Files to inspect.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print the decoded records as JSON.
    #[arg(long)]
    pub json: bool,

    /// Write JSON to this file instead of stdout (implies --json).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How much of the data-directory table to decode.
    #[arg(long, value_enum)]
    pub directories: Option<DirectoryArg>,

    /// Abort a file's decode once this many milliseconds have passed.
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Cross-check headline values against goblin.
    #[arg(long)]
    pub verify: bool,

    /// Show every decoded header field in the text report.
    #[arg(long)]
    pub fields: bool,

    #[arg(long)]
    pub threads: Option<usize>,

    /// Read files into memory instead of mapping them.
    #[arg(long)]
    pub no_mmap: bool,

    /// JSON config file; command-line flags override it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long)]
    pub no_progress: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryArg {
    Full,
    Declared,
}

impl From<DirectoryArg> for DirectoryPolicy {
    fn from(arg: DirectoryArg) -> Self {
        match arg {
            DirectoryArg::Full => DirectoryPolicy::Full,
            DirectoryArg::Declared => DirectoryPolicy::Declared,
        }
    }
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(missing) = self.files.iter().find(|path| !path.exists()) {
            return Err(format!("Input file does not exist: {:?}", missing));
        }
        if self.threads == Some(0) {
            return Err("--threads must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Layers the command-line flags over `base`.
    pub fn apply(&self, mut base: Config) -> Config {
        if let Some(directories) = self.directories {
            base.directory_policy = directories.into();
        }
        if self.timeout_ms.is_some() {
            base.read_timeout_ms = self.timeout_ms;
        }
        if let Some(threads) = self.threads {
            base.max_threads = threads;
        }
        if self.no_mmap {
            base.use_mmap = false;
        }
        if self.verify {
            base.verify_with_reference = true;
        }
        if self.json || self.output.is_some() {
            base.json_output = true;
        }
        if self.no_color {
            base.enable_color = false;
        }
        if self.no_progress {
            base.enable_progress_bars = false;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let args = Args::parse_from([
            "exe-anatomy",
            "--directories",
            "declared",
            "--timeout-ms",
            "500",
            "--threads",
            "2",
            "--verify",
            "-o",
            "out.json",
            "a.exe",
            "b.dll",
        ]);
        assert_eq!(args.files.len(), 2);

        let config = args.apply(Config::default());
        assert_eq!(config.directory_policy, DirectoryPolicy::Declared);
        assert_eq!(config.read_timeout_ms, Some(500));
        assert_eq!(config.max_threads, 2);
        assert!(config.verify_with_reference);
        assert!(config.json_output);
        assert!(config.use_mmap);
    }

    #[test]
    fn test_defaults_keep_config() {
        let args = Args::parse_from(["exe-anatomy", "a.exe"]);
        let base = Config::default().with_directory_policy(DirectoryPolicy::Declared);
        let config = args.apply(base);
        assert_eq!(config.directory_policy, DirectoryPolicy::Declared);
        assert!(!config.json_output);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_files_required() {
        assert!(Args::try_parse_from(["exe-anatomy"]).is_err());
    }

    #[test]
    fn test_validate_missing_file() {
        let args = Args::parse_from(["exe-anatomy", "/nonexistent/exe-anatomy.exe"]);
        assert!(args.validate().is_err());
    }
}
