//! Research topic model tracked by the research tracker.
//!
//! # Invariants
//! - Paper and note lists only grow; there is no removal path.
//! - A paper record never carries two `added_at` values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-supplied paper metadata (title, authors, url, ...).
pub type PaperInfo = Map<String, Value>;

/// One paper attached to a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperRecord {
    #[serde(flatten)]
    pub info: PaperInfo,
    pub added_at: DateTime<Utc>,
}

/// One free-text note attached to a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Named research subject with its papers and notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub description: String,
    pub created_at: DateTime<Utc>,
    papers: Vec<PaperRecord>,
    notes: Vec<NoteRecord>,
}

impl Topic {
    /// Creates a topic with empty paper and note lists.
    pub fn new(description: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            description: description.into(),
            created_at: now,
            papers: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Papers in the order they were added.
    pub fn papers(&self) -> &[PaperRecord] {
        &self.papers
    }

    /// Notes in the order they were added.
    pub fn notes(&self) -> &[NoteRecord] {
        &self.notes
    }

    /// Appends a paper stamped with `now`.
    ///
    /// A caller-supplied `added_at` key is replaced by the record timestamp.
    pub fn push_paper(&mut self, mut info: PaperInfo, now: DateTime<Utc>) -> &PaperRecord {
        info.remove("added_at");
        self.papers.push(PaperRecord {
            info,
            added_at: now,
        });
        &self.papers[self.papers.len() - 1]
    }

    /// Appends a note stamped with `now`.
    pub fn push_note(&mut self, content: impl Into<String>, now: DateTime<Utc>) -> &NoteRecord {
        self.notes.push(NoteRecord {
            content: content.into(),
            created_at: now,
        });
        &self.notes[self.notes.len() - 1]
    }
}
