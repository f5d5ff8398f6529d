//! Flat-file storage bootstrap and JSON file I/O.
//!
//! # Responsibility
//! - Create the knowledge-base storage directory before first use.
//! - Read and write one pretty-printed JSON document per file.
//!
//! # Invariants
//! - Writes are synchronous single `fs::write` calls; no locking.
//! - A missing file on read is reported as `Ok(None)`, not an error.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

mod open;

pub use open::open_storage_dir;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug)]
pub enum StorageError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "I/O error at `{}`: {source}", path.display()),
            Self::Json { path, source } => {
                write!(f, "JSON error at `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
        }
    }
}

/// Serializes `value` with two-space indentation and writes it to `path`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let body = serde_json::to_vec_pretty(value).map_err(|source| StorageError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, body).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and deserializes `path`, returning `Ok(None)` if it does not exist.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> StorageResult<Option<T>> {
    let body = match std::fs::read(path) {
        Ok(body) => body,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    serde_json::from_slice(&body)
        .map(Some)
        .map_err(|source| StorageError::Json {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::{read_json_file, write_json_file, StorageError};
    use serde_json::{json, Value};

    #[test]
    fn read_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<Value> = read_json_file(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn written_file_is_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        write_json_file(&path, &json!({ "a": 1 })).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n  \"a\": 1"));
        let loaded: Option<Value> = read_json_file(&path).unwrap();
        assert_eq!(loaded, Some(json!({ "a": 1 })));
    }

    #[test]
    fn malformed_file_reports_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let err = read_json_file::<Value>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json { .. }));
    }
}
