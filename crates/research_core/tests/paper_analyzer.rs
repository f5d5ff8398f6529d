use research_core::{AnalysisCapability, AnalysisOutcome, PaperAnalyzer};

const PAPER: &str = "Abstract. We study fairness.\n[1] Smith et al. 2020.";

#[test]
fn analyze_reports_not_implemented_with_empty_skeleton() {
    let analyzer = PaperAnalyzer::new();
    let outcome = analyzer.analyze(PAPER);

    assert!(!outcome.is_implemented());
    assert_eq!(outcome.capability(), Some(AnalysisCapability::Analysis));
    let analysis = outcome.into_value();
    assert!(analysis.key_findings.is_empty());
    assert!(analysis.methodology.is_empty());
    assert!(analysis.conclusions.is_empty());
    assert!(analysis.citations.is_empty());
    assert!(analysis.topics.is_empty());
}

#[test]
fn every_operation_is_a_marked_placeholder() {
    let analyzer = PaperAnalyzer::default();

    let citations = analyzer.extract_citations(PAPER);
    assert_eq!(
        citations.capability(),
        Some(AnalysisCapability::CitationExtraction)
    );
    assert!(citations.value().is_empty());

    let summary = analyzer.summarize(PAPER, Some(50));
    assert_eq!(
        summary,
        AnalysisOutcome::NotImplemented {
            capability: AnalysisCapability::Summarization,
            placeholder: String::new(),
        }
    );

    let concepts = analyzer.identify_key_concepts(PAPER);
    assert_eq!(
        concepts.capability(),
        Some(AnalysisCapability::ConceptIdentification)
    );
    assert!(concepts.into_value().is_empty());
}

#[test]
fn outcome_serializes_with_status_tag() {
    let outcome = PaperAnalyzer::new().identify_key_concepts("");
    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], "not_implemented");
    assert_eq!(value["capability"], "concept_identification");
    assert_eq!(value["placeholder"], serde_json::json!([]));
}

#[test]
fn capability_ids_are_stable() {
    assert_eq!(AnalysisCapability::Analysis.as_str(), "analysis");
    assert_eq!(AnalysisCapability::Summarization.as_str(), "summarization");
    assert!(!AnalysisCapability::CitationExtraction.description().is_empty());
}
