//! Paper analyzer service.
//!
//! # Responsibility
//! - Declare the paper analysis entry points callers integrate against.
//!
//! # Invariants
//! - No operation has an implementation yet: every call returns
//!   `AnalysisOutcome::NotImplemented` holding an empty placeholder.
//! - Input text is never inspected or stored.

use crate::model::analysis::{AnalysisCapability, AnalysisOutcome, Citation, PaperAnalysis};
use chrono::Utc;
use log::{debug, info};

/// Stub analyzer for research paper text.
#[derive(Debug)]
pub struct PaperAnalyzer;

impl PaperAnalyzer {
    /// Creates the analyzer and logs its initialization.
    pub fn new() -> Self {
        info!("event=analyzer_init module=analyzer status=ok");
        Self
    }

    /// Extracts key findings, methodology, conclusions, citations and topics.
    pub fn analyze(&self, paper_content: &str) -> AnalysisOutcome<PaperAnalysis> {
        self.not_implemented(
            AnalysisCapability::Analysis,
            paper_content,
            PaperAnalysis::empty(Utc::now()),
        )
    }

    /// Extracts the paper's citations.
    pub fn extract_citations(&self, paper_content: &str) -> AnalysisOutcome<Vec<Citation>> {
        self.not_implemented(
            AnalysisCapability::CitationExtraction,
            paper_content,
            Vec::new(),
        )
    }

    /// Summarizes the paper, bounded by `max_length` characters when given.
    pub fn summarize(
        &self,
        paper_content: &str,
        max_length: Option<usize>,
    ) -> AnalysisOutcome<String> {
        debug!(
            "event=paper_summarize module=analyzer max_length={}",
            max_length.map_or_else(|| "none".to_string(), |len| len.to_string())
        );
        self.not_implemented(
            AnalysisCapability::Summarization,
            paper_content,
            String::new(),
        )
    }

    /// Identifies the key concepts the paper discusses.
    pub fn identify_key_concepts(&self, paper_content: &str) -> AnalysisOutcome<Vec<String>> {
        self.not_implemented(
            AnalysisCapability::ConceptIdentification,
            paper_content,
            Vec::new(),
        )
    }

    fn not_implemented<T>(
        &self,
        capability: AnalysisCapability,
        paper_content: &str,
        placeholder: T,
    ) -> AnalysisOutcome<T> {
        info!(
            "event=paper_analysis module=analyzer status=not_implemented capability={} input_chars={}",
            capability.as_str(),
            paper_content.chars().count()
        );
        AnalysisOutcome::not_implemented(capability, placeholder)
    }
}

impl Default for PaperAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
