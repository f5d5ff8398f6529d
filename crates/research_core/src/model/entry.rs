//! Knowledge entry model.
//!
//! # Responsibility
//! - Define the canonical record persisted by the knowledge store.
//! - Derive entry IDs from topic plus second-granularity wall-clock time.
//!
//! # Invariants
//! - `topic` and `created_at` never change after construction.
//! - Every content replacement moves `last_modified` strictly forward.
//! - Topics are usable as file-name components (no separators, no NUL).

use chrono::{DateTime, Local, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Entry identifier, `{topic}_{YYYYmmdd_HHMMSS}` with an optional `_N` suffix.
pub type EntryId = String;

/// `strftime` pattern for the time component of an entry ID.
pub const ENTRY_ID_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

/// One stored knowledge-base record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub topic: String,
    /// Arbitrary caller-supplied structured value. Never validated.
    pub content: Value,
    pub created_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl Entry {
    /// Creates an entry whose both timestamps equal `now`.
    pub fn new(topic: impl Into<String>, content: Value, now: DateTime<Utc>) -> Self {
        Self {
            topic: topic.into(),
            content,
            created_at: now,
            last_modified: now,
        }
    }

    /// Replaces content and bumps `last_modified`.
    ///
    /// When `now` does not advance past the previous modification time (coarse
    /// or stepped-back clock) the timestamp is nudged forward by one microsecond.
    pub fn replace_content(&mut self, content: Value, now: DateTime<Utc>) {
        self.content = content;
        self.last_modified = if now > self.last_modified {
            now
        } else {
            self.last_modified + TimeDelta::microseconds(1)
        };
    }

    /// Checks invariants that must hold for every stored entry.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        validate_topic(&self.topic)?;
        if self.last_modified < self.created_at {
            return Err(EntryValidationError::ModifiedBeforeCreated);
        }
        Ok(())
    }
}

/// Validation failures for entry topics and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    EmptyTopic,
    /// Topic contains a character that cannot appear in a file name.
    InvalidTopicCharacter { topic: String, character: char },
    ModifiedBeforeCreated,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTopic => write!(f, "entry topic must not be empty"),
            Self::InvalidTopicCharacter { topic, character } => write!(
                f,
                "entry topic `{topic}` contains unsupported character {character:?}"
            ),
            Self::ModifiedBeforeCreated => {
                write!(f, "entry last_modified is earlier than created_at")
            }
        }
    }
}

impl Error for EntryValidationError {}

/// Rejects topics that would not survive as part of `<entry_id>.json`.
pub fn validate_topic(topic: &str) -> Result<(), EntryValidationError> {
    if topic.trim().is_empty() {
        return Err(EntryValidationError::EmptyTopic);
    }
    if let Some(character) = topic.chars().find(|c| matches!(c, '/' | '\\' | '\0')) {
        return Err(EntryValidationError::InvalidTopicCharacter {
            topic: topic.to_string(),
            character,
        });
    }
    Ok(())
}

/// Formats the collision-prone base ID for `topic` at local time `at`.
pub fn base_entry_id(topic: &str, at: DateTime<Local>) -> EntryId {
    format!("{topic}_{}", at.format(ENTRY_ID_TIME_FORMAT))
}

/// Returns `base`, or the first `base_N` (N >= 2) for which `is_taken` is false.
pub fn disambiguate_entry_id(base: EntryId, is_taken: impl Fn(&str) -> bool) -> EntryId {
    if !is_taken(&base) {
        return base;
    }
    let mut suffix: u32 = 2;
    loop {
        let candidate = format!("{base}_{suffix}");
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
