//! Research tracker service.
//!
//! # Responsibility
//! - Track research topics with their papers and notes in memory.
//!
//! # Invariants
//! - Adding an existing topic name replaces the whole record.
//! - Papers and notes can only be appended to existing topics.
//! - Nothing is persisted.

use crate::model::topic::{NoteRecord, PaperInfo, PaperRecord, Topic};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TrackerResult<T> = Result<T, TrackerError>;

/// Research tracker error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// Target topic was never added.
    TopicNotFound(String),
}

impl Display for TrackerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopicNotFound(name) => write!(f, "Topic {name} not found"),
        }
    }
}

impl Error for TrackerError {}

/// In-memory registry of research topics.
#[derive(Debug)]
pub struct ResearchTracker {
    started_at: DateTime<Utc>,
    topics: IndexMap<String, Topic>,
}

impl ResearchTracker {
    /// Creates an empty tracker and records its start time.
    pub fn new() -> Self {
        let started_at = Utc::now();
        info!(
            "event=tracker_init module=tracker status=ok started_at={}",
            started_at.to_rfc3339()
        );
        Self {
            started_at,
            topics: IndexMap::new(),
        }
    }

    /// When this tracker was created.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Creates `name` with empty paper and note lists, replacing any
    /// existing topic of the same name.
    pub fn add_topic(&mut self, name: impl Into<String>, description: impl Into<String>) {
        let name = name.into();
        let replaced = self
            .topics
            .insert(name.clone(), Topic::new(description, Utc::now()))
            .is_some();
        info!(
            "event=topic_add module=tracker status=ok topic={} replaced={}",
            name, replaced
        );
    }

    /// Appends a paper to `topic`.
    ///
    /// # Errors
    /// - `TrackerError::TopicNotFound` when `topic` was never added.
    pub fn add_paper(&mut self, topic: &str, paper_info: PaperInfo) -> TrackerResult<&PaperRecord> {
        let record = self.topic_mut(topic, "paper_add")?.push_paper(paper_info, Utc::now());
        info!("event=paper_add module=tracker status=ok topic={}", topic);
        Ok(record)
    }

    /// Appends a note to `topic`.
    ///
    /// # Errors
    /// - `TrackerError::TopicNotFound` when `topic` was never added.
    pub fn add_note(&mut self, topic: &str, note: impl Into<String>) -> TrackerResult<&NoteRecord> {
        let record = self.topic_mut(topic, "note_add")?.push_note(note, Utc::now());
        info!("event=note_add module=tracker status=ok topic={}", topic);
        Ok(record)
    }

    /// Looks up a topic by name.
    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.get(name)
    }

    /// Topic names in the order they were first added.
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    /// Number of tracked topics.
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether no topic has been added.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    fn topic_mut(&mut self, name: &str, event: &str) -> TrackerResult<&mut Topic> {
        match self.topics.get_mut(name) {
            Some(topic) => Ok(topic),
            None => {
                warn!(
                    "event={} module=tracker status=error error_code=topic_not_found topic={}",
                    event, name
                );
                Err(TrackerError::TopicNotFound(name.to_string()))
            }
        }
    }
}

impl Default for ResearchTracker {
    fn default() -> Self {
        Self::new()
    }
}
