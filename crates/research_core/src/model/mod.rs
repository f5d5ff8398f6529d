//! Domain model for knowledge entries, research topics and paper analysis.
//!
//! # Responsibility
//! - Define the records owned by the knowledge store and research tracker.
//! - Provide lifecycle helpers that keep timestamp invariants intact.
//!
//! # Invariants
//! - `Entry::last_modified` is never earlier than `Entry::created_at`.
//! - Topic paper/note lists are append-only.

pub mod analysis;
pub mod entry;
pub mod topic;
