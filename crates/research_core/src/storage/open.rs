//! Storage directory bootstrap.
//!
//! # Invariants
//! - The returned directory exists when this call succeeds.
//! - Existing entry files are left untouched; nothing is loaded.

use super::{StorageError, StorageResult};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Creates `path` (and parents) if absent and returns it.
///
/// # Side effects
/// - Emits `storage_open` logging events with duration and status.
pub fn open_storage_dir(path: impl AsRef<Path>) -> StorageResult<PathBuf> {
    let started_at = Instant::now();
    let path = path.as_ref();
    info!(
        "event=storage_open module=storage status=start path={}",
        path.display()
    );

    match std::fs::create_dir_all(path) {
        Ok(()) => {
            info!(
                "event=storage_open module=storage status=ok path={} duration_ms={}",
                path.display(),
                started_at.elapsed().as_millis()
            );
            Ok(path.to_path_buf())
        }
        Err(source) => {
            error!(
                "event=storage_open module=storage status=error path={} duration_ms={} error_code=storage_create_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                source
            );
            Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::open_storage_dir;

    #[test]
    fn creates_nested_directory_and_is_repeatable() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("data").join("knowledge_base");

        let opened = open_storage_dir(&nested).unwrap();
        assert_eq!(opened, nested);
        assert!(nested.is_dir());

        open_storage_dir(&nested).unwrap();
    }
}
