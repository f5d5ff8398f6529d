//! Knowledge-base search entry points.
//!
//! # Responsibility
//! - Match entries by case-insensitive substring over content text.
//! - Keep search result shaping inside core.
//!
//! Ranked or tokenized search is out of scope for this module.

pub mod substring;
