//! Paper analysis result model.
//!
//! Analysis operations are not implemented yet. Every result is wrapped in
//! [`AnalysisOutcome`] so callers can tell a placeholder from real output.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One extracted citation; shape is left open until extraction exists.
pub type Citation = Map<String, Value>;

/// Analysis capability identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCapability {
    Analysis,
    CitationExtraction,
    Summarization,
    ConceptIdentification,
}

impl AnalysisCapability {
    /// Stable string id used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Analysis => "analysis",
            Self::CitationExtraction => "citation_extraction",
            Self::Summarization => "summarization",
            Self::ConceptIdentification => "concept_identification",
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Analysis => "Extract key findings, methodology and conclusions from a paper.",
            Self::CitationExtraction => "Extract the citation list from a paper.",
            Self::Summarization => "Produce a length-bounded summary of a paper.",
            Self::ConceptIdentification => "Identify the key concepts a paper discusses.",
        }
    }
}

/// Result of an analysis operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome<T> {
    /// Produced by a real implementation.
    Complete { value: T },
    /// Capability has no implementation; `placeholder` is the empty default.
    NotImplemented {
        capability: AnalysisCapability,
        placeholder: T,
    },
}

impl<T> AnalysisOutcome<T> {
    /// Marks `capability` as missing, carrying its empty default.
    pub fn not_implemented(capability: AnalysisCapability, placeholder: T) -> Self {
        Self::NotImplemented {
            capability,
            placeholder,
        }
    }

    /// Whether a real implementation produced this result.
    pub fn is_implemented(&self) -> bool {
        matches!(self, Self::Complete { .. })
    }

    /// Capability that produced a placeholder, `None` for complete results.
    pub fn capability(&self) -> Option<AnalysisCapability> {
        match self {
            Self::Complete { .. } => None,
            Self::NotImplemented { capability, .. } => Some(*capability),
        }
    }

    /// Borrows the result or placeholder.
    pub fn value(&self) -> &T {
        match self {
            Self::Complete { value } => value,
            Self::NotImplemented { placeholder, .. } => placeholder,
        }
    }

    /// Consumes the outcome, returning the result or placeholder.
    pub fn into_value(self) -> T {
        match self {
            Self::Complete { value } => value,
            Self::NotImplemented { placeholder, .. } => placeholder,
        }
    }
}

/// Structured analysis of one paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperAnalysis {
    pub timestamp: DateTime<Utc>,
    pub key_findings: Vec<String>,
    pub methodology: String,
    pub conclusions: String,
    pub citations: Vec<Citation>,
    pub topics: Vec<String>,
}

impl PaperAnalysis {
    /// Skeleton with every field empty, stamped with `now`.
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            timestamp: now,
            key_findings: Vec::new(),
            methodology: String::new(),
            conclusions: String::new(),
            citations: Vec::new(),
            topics: Vec::new(),
        }
    }
}
