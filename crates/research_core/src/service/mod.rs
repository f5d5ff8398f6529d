//! Core use-case services.
//!
//! # Responsibility
//! - Expose the knowledge store, paper analyzer and research tracker.
//! - Keep callers decoupled from storage details.
//!
//! The three services are independent; none calls another.

pub mod knowledge_store;
pub mod paper_analyzer;
pub mod research_tracker;
