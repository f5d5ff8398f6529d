//! Knowledge store use-case service.
//!
//! # Responsibility
//! - Own the in-memory entry map and mirror every write to the repository.
//! - Provide add/get/update/search over knowledge entries.
//!
//! # Invariants
//! - Memory is only mutated after the repository write succeeded.
//! - `get` and `search` never read from disk.
//! - Entry IDs never reuse an ID held in memory or already persisted;
//!   same-second adds to the same topic get a numeric suffix instead of
//!   overwriting each other.
//! - Search order is insertion order.

use crate::config::StoreConfig;
use crate::model::entry::{
    base_entry_id, disambiguate_entry_id, validate_topic, Entry, EntryId,
};
use crate::repo::entry_repo::{EntryRepository, JsonFileEntryRepository, RepoResult};
use crate::search::substring::{search_entries, SearchHit};
use chrono::{Local, Utc};
use indexmap::IndexMap;
use log::{error, info};
use serde_json::Value;
use std::path::Path;

/// In-memory knowledge base mirrored to a persistence repository.
pub struct KnowledgeStore<R: EntryRepository = JsonFileEntryRepository> {
    repo: R,
    entries: IndexMap<EntryId, Entry>,
}

impl KnowledgeStore<JsonFileEntryRepository> {
    /// Opens a store backed by one JSON file per entry under
    /// `config.storage_path`, creating the directory if needed.
    ///
    /// Previously persisted entries are not loaded.
    pub fn open(config: &StoreConfig) -> RepoResult<Self> {
        let repo = JsonFileEntryRepository::open(&config.storage_path)?;
        Ok(Self::with_repository(repo))
    }

    /// Directory holding the mirrored entry files.
    pub fn storage_path(&self) -> &Path {
        self.repo.root()
    }
}

impl<R: EntryRepository> KnowledgeStore<R> {
    /// Creates an empty store over an existing repository.
    pub fn with_repository(repo: R) -> Self {
        info!("event=store_init module=store status=ok");
        Self {
            repo,
            entries: IndexMap::new(),
        }
    }

    /// Adds a new entry and persists it.
    ///
    /// # Errors
    /// - `RepoError::Validation` when `topic` is empty or contains a path
    ///   separator.
    /// - `RepoError::Storage` when the entry file cannot be written; the
    ///   in-memory map is left unchanged.
    pub fn add(&mut self, topic: impl Into<String>, content: Value) -> RepoResult<EntryId> {
        let topic = topic.into();
        validate_topic(&topic)?;

        let now = Utc::now();
        let base_id = base_entry_id(&topic, now.with_timezone(&Local));
        let entry_id = disambiguate_entry_id(base_id, |candidate| {
            self.entries.contains_key(candidate) || self.repo.contains_entry(candidate)
        });
        let entry = Entry::new(topic, content, now);

        if let Err(err) = self.repo.save_entry(&entry_id, &entry) {
            error!(
                "event=entry_add module=store status=error entry_id={} error={}",
                entry_id, err
            );
            return Err(err);
        }

        self.entries.insert(entry_id.clone(), entry);
        info!("event=entry_add module=store status=ok entry_id={}", entry_id);
        Ok(entry_id)
    }

    /// Returns the in-memory entry for `entry_id`.
    pub fn get(&self, entry_id: &str) -> Option<&Entry> {
        self.entries.get(entry_id)
    }

    /// Replaces entry content and persists it.
    ///
    /// Returns `Ok(false)` without side effects when `entry_id` is unknown.
    pub fn update(&mut self, entry_id: &str, content: Value) -> RepoResult<bool> {
        let Some(current) = self.entries.get_mut(entry_id) else {
            info!(
                "event=entry_update module=store status=not_found entry_id={}",
                entry_id
            );
            return Ok(false);
        };

        let mut updated = current.clone();
        updated.replace_content(content, Utc::now());
        if let Err(err) = self.repo.save_entry(entry_id, &updated) {
            error!(
                "event=entry_update module=store status=error entry_id={} error={}",
                entry_id, err
            );
            return Err(err);
        }

        *current = updated;
        info!("event=entry_update module=store status=ok entry_id={}", entry_id);
        Ok(true)
    }

    /// Case-insensitive substring search over entry content.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let hits = search_entries(&self.entries, query);
        info!(
            "event=entry_search module=store status=ok scanned={} hits={}",
            self.entries.len(),
            hits.len()
        );
        hits
    }

    /// Reads the persisted copy of `entry_id` straight from the repository.
    ///
    /// The result is not inserted into memory.
    pub fn load_persisted(&self, entry_id: &str) -> RepoResult<Option<Entry>> {
        self.repo.load_entry(entry_id)
    }

    /// Entry IDs in insertion order.
    pub fn entry_ids(&self) -> impl Iterator<Item = &EntryId> {
        self.entries.keys()
    }

    /// Number of entries held in memory.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been added in this session.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ends the store lifecycle. Entry files stay on disk.
    pub fn close(self) {
        info!(
            "event=store_close module=store status=ok entries={}",
            self.entries.len()
        );
    }
}
