//! Entry repository contract and one-JSON-file-per-entry implementation.
//!
//! # Responsibility
//! - Persist entries to `<root>/<entry_id>.json`.
//! - Load a single persisted entry by ID.
//!
//! # Invariants
//! - Write paths call `Entry::validate()` before serializing.
//! - Last write wins; there is no locking or version check.

use crate::model::entry::{Entry, EntryValidationError};
use crate::storage::{open_storage_dir, read_json_file, write_json_file, StorageError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Storage(StorageError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for RepoError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Persistence contract for knowledge entries.
pub trait EntryRepository {
    fn save_entry(&self, entry_id: &str, entry: &Entry) -> RepoResult<()>;
    fn load_entry(&self, entry_id: &str) -> RepoResult<Option<Entry>>;
    /// Whether `entry_id` is already persisted, including by earlier sessions.
    fn contains_entry(&self, entry_id: &str) -> bool;
}

/// Entry repository writing one pretty-printed JSON file per entry.
#[derive(Debug, Clone)]
pub struct JsonFileEntryRepository {
    root: PathBuf,
}

impl JsonFileEntryRepository {
    /// Opens the repository, creating `root` if it does not exist.
    pub fn open(root: impl AsRef<Path>) -> RepoResult<Self> {
        let root = open_storage_dir(root)?;
        Ok(Self { root })
    }

    /// Directory holding the entry files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File that mirrors `entry_id`.
    pub fn entry_path(&self, entry_id: &str) -> PathBuf {
        self.root.join(format!("{entry_id}.json"))
    }
}

impl EntryRepository for JsonFileEntryRepository {
    fn save_entry(&self, entry_id: &str, entry: &Entry) -> RepoResult<()> {
        entry.validate()?;
        write_json_file(&self.entry_path(entry_id), entry)?;
        Ok(())
    }

    fn load_entry(&self, entry_id: &str) -> RepoResult<Option<Entry>> {
        let Some(entry) = read_json_file::<Entry>(&self.entry_path(entry_id))? else {
            return Ok(None);
        };
        entry
            .validate()
            .map_err(|err| RepoError::InvalidData(format!("entry `{entry_id}`: {err}")))?;
        Ok(Some(entry))
    }

    fn contains_entry(&self, entry_id: &str) -> bool {
        self.entry_path(entry_id).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryRepository, JsonFileEntryRepository, RepoError};
    use crate::model::entry::Entry;
    use chrono::{TimeDelta, Utc};
    use serde_json::json;

    #[test]
    fn save_then_load_reproduces_entry() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileEntryRepository::open(dir.path()).unwrap();
        let entry = Entry::new("ML", json!({ "k": [1, 2] }), Utc::now());

        repo.save_entry("ML_1", &entry).unwrap();
        assert!(repo.entry_path("ML_1").is_file());
        assert_eq!(repo.load_entry("ML_1").unwrap(), Some(entry));
        assert_eq!(repo.load_entry("ML_2").unwrap(), None);
        assert!(repo.contains_entry("ML_1"));
        assert!(!repo.contains_entry("ML_2"));
    }

    #[test]
    fn save_rejects_invalid_topic() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileEntryRepository::open(dir.path()).unwrap();
        let entry = Entry::new("", json!(null), Utc::now());

        let err = repo.save_entry("x", &entry).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[test]
    fn load_rejects_entry_modified_before_created() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileEntryRepository::open(dir.path()).unwrap();
        let mut entry = Entry::new("ML", json!(1), Utc::now());
        entry.last_modified = entry.created_at - TimeDelta::seconds(5);
        std::fs::write(
            repo.entry_path("bad"),
            serde_json::to_vec(&entry).unwrap(),
        )
        .unwrap();

        let err = repo.load_entry("bad").unwrap_err();
        assert!(matches!(err, RepoError::InvalidData(_)));
    }
}
