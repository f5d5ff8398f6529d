//! Core domain logic for the research assistant.
//!
//! Three independent components live here: a knowledge store mirrored to
//! one JSON file per entry, a paper analyzer whose operations are declared
//! but not implemented, and an in-memory research tracker.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod storage;

pub use config::{LogConfig, StoreConfig, DEFAULT_STORAGE_PATH};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::analysis::{AnalysisCapability, AnalysisOutcome, Citation, PaperAnalysis};
pub use model::entry::{Entry, EntryId, EntryValidationError};
pub use model::topic::{NoteRecord, PaperInfo, PaperRecord, Topic};
pub use repo::entry_repo::{EntryRepository, JsonFileEntryRepository, RepoError, RepoResult};
pub use search::substring::{search_entries, SearchHit};
pub use service::knowledge_store::KnowledgeStore;
pub use service::paper_analyzer::PaperAnalyzer;
pub use service::research_tracker::{ResearchTracker, TrackerError, TrackerResult};
pub use storage::{StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
