//! Linear substring scan over knowledge entries.
//!
//! # Invariants
//! - Hits keep the iteration order of the scanned entries.
//! - Matching is case-insensitive and never tokenizes.

use crate::model::entry::{Entry, EntryId};
use serde::Serialize;
use serde_json::Value;

/// Single search hit returned by [`search_entries`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    #[serde(rename = "id")]
    pub entry_id: EntryId,
    #[serde(flatten)]
    pub entry: Entry,
}

/// Text that search matches against for one content value.
///
/// String leaves and object keys are emitted unescaped; objects render as
/// `{key: value, ...}` and arrays as `[a, b]`.
pub fn content_search_text(content: &Value) -> String {
    let mut text = String::new();
    push_search_text(content, &mut text);
    text
}

fn push_search_text(value: &Value, out: &mut String) {
    match value {
        Value::String(text) => out.push_str(text),
        Value::Array(items) => {
            out.push('[');
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                push_search_text(item, out);
            }
            out.push(']');
        }
        Value::Object(fields) => {
            out.push('{');
            for (index, (key, item)) in fields.iter().enumerate() {
                if index > 0 {
                    out.push_str(", ");
                }
                out.push_str(key);
                out.push_str(": ");
                push_search_text(item, out);
            }
            out.push('}');
        }
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// Returns every entry whose content text contains `query`, ignoring case.
///
/// A blank query matches all entries.
pub fn search_entries<'a, I>(entries: I, query: &str) -> Vec<SearchHit>
where
    I: IntoIterator<Item = (&'a EntryId, &'a Entry)>,
{
    let needle = query.to_lowercase();
    entries
        .into_iter()
        .filter(|(_, entry)| {
            content_search_text(&entry.content)
                .to_lowercase()
                .contains(&needle)
        })
        .map(|(entry_id, entry)| SearchHit {
            entry_id: entry_id.clone(),
            entry: entry.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{content_search_text, search_entries};
    use crate::model::entry::{Entry, EntryId};
    use chrono::Utc;
    use serde_json::json;

    fn entry(topic: &str, content: serde_json::Value) -> Entry {
        Entry::new(topic, content, Utc::now())
    }

    #[test]
    fn string_content_is_matched_without_json_quoting() {
        assert_eq!(content_search_text(&json!("Gradient")), "Gradient");
        assert_eq!(
            content_search_text(&json!({ "a": 1, "b": [true, null, "x"] })),
            "{a: 1, b: [true, null, x]}"
        );
    }

    #[test]
    fn quotes_inside_structured_content_are_searchable() {
        let entries: Vec<(EntryId, Entry)> = vec![
            (
                "structured".into(),
                entry("NLP", json!({ "title": "The \"Attention\" paper" })),
            ),
            ("plain".into(), entry("NLP", json!("The \"Attention\" paper"))),
        ];

        let hits = search_entries(entries.iter().map(|(id, e)| (id, e)), "\"attention\"");
        let ids: Vec<&str> = hits.iter().map(|hit| hit.entry_id.as_str()).collect();
        assert_eq!(ids, vec!["structured", "plain"]);
    }

    #[test]
    fn matches_nested_content_case_insensitively_in_order() {
        let entries: Vec<(EntryId, Entry)> = vec![
            ("a".into(), entry("ML", json!({ "notes": ["Deep LEARNING"] }))),
            ("b".into(), entry("ML", json!("unrelated"))),
            ("c".into(), entry("ML", json!("machine learning basics"))),
        ];

        let hits = search_entries(entries.iter().map(|(id, e)| (id, e)), "learning");
        let ids: Vec<&str> = hits.iter().map(|hit| hit.entry_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn hit_serializes_with_id_alongside_entry_fields() {
        let entries: Vec<(EntryId, Entry)> = vec![("x".into(), entry("ML", json!("text")))];
        let hits = search_entries(entries.iter().map(|(id, e)| (id, e)), "");
        let value = serde_json::to_value(&hits[0]).unwrap();
        assert_eq!(value["id"], json!("x"));
        assert_eq!(value["topic"], json!("ML"));
        assert_eq!(value["content"], json!("text"));
    }
}
