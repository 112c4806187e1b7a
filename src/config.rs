// Tue Jan 13 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// How much of the data-directory table to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryPolicy {
    /// All sixteen entries, whatever NumberOfRvaAndSizes says.
    #[default]
    Full,
    /// Only the entries NumberOfRvaAndSizes declares (capped at sixteen).
    Declared,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub directory_policy: DirectoryPolicy,
    pub read_timeout_ms: Option<u64>,
    pub max_threads: usize,
    pub use_mmap: bool,
    pub verify_with_reference: bool,
    pub json_output: bool,
    pub enable_progress_bars: bool,
    pub enable_color: bool,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory_policy: DirectoryPolicy::Full,
            read_timeout_ms: None,
            max_threads: num_cpus::get(),
            use_mmap: true,
            verify_with_reference: false,
            json_output: false,
            enable_progress_bars: true,
            enable_color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_directory_policy(mut self, policy: DirectoryPolicy) -> Self {
        self.directory_policy = policy;
        self
    }

    pub fn with_read_timeout_ms(mut self, timeout: Option<u64>) -> Self {
        self.read_timeout_ms = timeout;
        self
    }

    pub fn with_max_threads(mut self, threads: usize) -> Self {
        self.max_threads = threads;
        self
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }

    pub fn with_verification(mut self, verify: bool) -> Self {
        self.verify_with_reference = verify;
        self
    }

    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout_ms.map(Duration::from_millis)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_threads == 0 {
            return Err(ConfigError::Invalid("max_threads must be greater than 0".to_string()));
        }
        if self.read_timeout_ms == Some(0) {
            return Err(ConfigError::Invalid("read_timeout_ms must be greater than 0".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.directory_policy, DirectoryPolicy::Full);
        assert!(config.read_timeout().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: Config = serde_json::from_str(r#"{"directory_policy":"declared","read_timeout_ms":250}"#).unwrap();
        assert_eq!(config.directory_policy, DirectoryPolicy::Declared);
        assert_eq!(config.read_timeout(), Some(Duration::from_millis(250)));
        assert!(config.use_mmap);
    }

    #[test]
    fn test_validate() {
        assert!(Config::new().with_max_threads(0).validate().is_err());
        assert!(Config::new().with_read_timeout_ms(Some(0)).validate().is_err());
    }
}
