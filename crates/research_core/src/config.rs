//! Explicit configuration passed into core components.
//!
//! Nothing here reads files or environment variables; callers construct
//! values and inject them.

use std::path::{Path, PathBuf};

/// Default knowledge-base directory, relative to the working directory.
pub const DEFAULT_STORAGE_PATH: &str = "./data/knowledge_base";

/// Knowledge store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding one `<entry_id>.json` file per entry.
    pub storage_path: PathBuf,
}

impl StoreConfig {
    /// Config storing entries under `storage_path`.
    pub fn new(storage_path: impl AsRef<Path>) -> Self {
        Self {
            storage_path: storage_path.as_ref().to_path_buf(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

/// Logging configuration consumed by [`crate::init_logging`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// One of `trace|debug|info|warn|error`, case-insensitive.
    pub level: String,
    /// Absolute directory for rotated log files.
    pub log_dir: PathBuf,
}

impl LogConfig {
    /// Config with an explicit level and log directory.
    pub fn new(level: impl Into<String>, log_dir: impl AsRef<Path>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.as_ref().to_path_buf(),
        }
    }

    /// Config at the build-mode default level.
    pub fn with_default_level(log_dir: impl AsRef<Path>) -> Self {
        Self::new(crate::logging::default_log_level(), log_dir)
    }
}
