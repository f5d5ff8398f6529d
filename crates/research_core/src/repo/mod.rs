//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the persistence contract the knowledge store mirrors into.
//! - Isolate file layout and JSON details from service orchestration.
//!
//! # Invariants
//! - Writes enforce `Entry::validate()` before touching disk.
//! - Reads reject invalid persisted state instead of masking it.

pub mod entry_repo;
