use research_core::{PaperInfo, ResearchTracker, TrackerError};
use serde_json::json;

fn paper(title: &str) -> PaperInfo {
    let mut info = PaperInfo::new();
    info.insert("title".to_string(), json!(title));
    info.insert("year".to_string(), json!(2024));
    info
}

#[test]
fn add_topic_starts_with_empty_lists() {
    let mut tracker = ResearchTracker::new();
    tracker.add_topic("AI Ethics", "Ethical considerations in AI");

    let topic = tracker.topic("AI Ethics").unwrap();
    assert_eq!(topic.description, "Ethical considerations in AI");
    assert!(topic.papers().is_empty());
    assert!(topic.notes().is_empty());
    assert!(topic.created_at >= tracker.started_at());
}

#[test]
fn add_paper_and_note_to_unknown_topic_fail_with_not_found() {
    let mut tracker = ResearchTracker::new();

    let err = tracker.add_paper("Quantum", paper("Shor")).unwrap_err();
    assert_eq!(err, TrackerError::TopicNotFound("Quantum".to_string()));
    let err = tracker.add_note("Quantum", "qubits").unwrap_err();
    assert_eq!(err, TrackerError::TopicNotFound("Quantum".to_string()));
    assert!(tracker.is_empty());
}

#[test]
fn add_paper_appends_exactly_one_record() {
    let mut tracker = ResearchTracker::new();
    tracker.add_topic("NLP", "Language models");

    let record = tracker.add_paper("NLP", paper("Attention")).unwrap().clone();
    assert_eq!(record.info["title"], json!("Attention"));
    tracker.add_paper("NLP", paper("BERT")).unwrap();

    let papers = tracker.topic("NLP").unwrap().papers();
    assert_eq!(papers.len(), 2);
    assert_eq!(papers[0].info["title"], json!("Attention"));
    assert_eq!(papers[1].info["title"], json!("BERT"));
    assert!(papers[0].added_at <= papers[1].added_at);
}

#[test]
fn add_note_appends_content_with_timestamp() {
    let mut tracker = ResearchTracker::new();
    tracker.add_topic("NLP", "Language models");

    tracker.add_note("NLP", "read the survey").unwrap();
    let notes = tracker.topic("NLP").unwrap().notes();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "read the survey");
}

#[test]
fn re_adding_a_topic_replaces_it_entirely() {
    let mut tracker = ResearchTracker::new();
    tracker.add_topic("NLP", "first");
    tracker.add_paper("NLP", paper("Attention")).unwrap();
    tracker.add_note("NLP", "note").unwrap();

    tracker.add_topic("NLP", "second");

    let topic = tracker.topic("NLP").unwrap();
    assert_eq!(topic.description, "second");
    assert!(topic.papers().is_empty());
    assert!(topic.notes().is_empty());
    assert_eq!(tracker.len(), 1);
}

#[test]
fn topic_names_keep_first_insertion_order() {
    let mut tracker = ResearchTracker::new();
    tracker.add_topic("b", "");
    tracker.add_topic("a", "");
    tracker.add_topic("b", "again");

    let names: Vec<&str> = tracker.topic_names().collect();
    assert_eq!(names, vec!["b", "a"]);
}
