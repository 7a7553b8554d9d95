// ============================================================
// Layer 4 - Lookups
// ============================================================
// The operations a presentation layer calls:
//
//   sections / topics / sub_topics  → dropdown options (index)
//   topic_label / sub_topic_label   → display text (raw doc)
//
// All of them are pure. A miss is a normal outcome: an empty
// Vec or None, never an error.
//
// Label lookups scan the raw document linearly; there is no
// reverse index.

use serde_json::Value;

use crate::domain::tag::{
    label_of, question_tags, value_of, RawDocument, SUB_TOPICS, SUB_TOPIC_NAME, TOPIC_NAME,
};
use crate::domain::taxonomy::TaxonomyIndex;

/// All section values, ascending.
pub fn sections(index: &TaxonomyIndex) -> Vec<String> {
    let mut out: Vec<String> = index.iter().map(|(s, _)| s.clone()).collect();
    out.sort();
    out
}

/// Topic values of a section, ascending. Empty if the section is unknown.
pub fn topics(index: &TaxonomyIndex, section_value: &str) -> Vec<String> {
    let mut out: Vec<String> = index
        .section(section_value)
        .map(|topics| topics.keys().cloned().collect())
        .unwrap_or_default();
    out.sort();
    out
}

/// Sub-topic values under (section, topic), ascending. Empty on any miss.
pub fn sub_topics(index: &TaxonomyIndex, section_value: &str, topic_value: &str) -> Vec<String> {
    let mut out = index
        .section(section_value)
        .and_then(|topics| topics.get(topic_value))
        .cloned()
        .unwrap_or_default();
    out.sort();
    out
}

/// Label of the first entry in `section_value` whose topic value matches.
pub fn topic_label(doc: &RawDocument, section_value: &str, topic_value: &str) -> Option<String> {
    section_entries(doc, section_value)?
        .find(|item| value_of(item, TOPIC_NAME) == Some(topic_value))
        .and_then(|item| label_of(item, TOPIC_NAME))
        .map(str::to_owned)
}

/// Label of a sub-topic under the given section and topic.
///
/// Every entry carrying `topic_value` is searched, so a duplicate topic
/// record with a malformed `sub_topics` does not hide a later good one.
pub fn sub_topic_label(
    doc: &RawDocument,
    section_value: &str,
    topic_value: &str,
    sub_topic_value: &str,
) -> Option<String> {
    section_entries(doc, section_value)?
        .filter(|item| value_of(item, TOPIC_NAME) == Some(topic_value))
        .filter_map(|item| item.get(SUB_TOPICS)?.as_array())
        .flatten()
        .find(|sub| value_of(sub, SUB_TOPIC_NAME) == Some(sub_topic_value))
        .and_then(|sub| label_of(sub, SUB_TOPIC_NAME))
        .map(str::to_owned)
}

/// Entries of a section in document order, if it is a list.
fn section_entries<'a>(
    doc: &'a RawDocument,
    section_value: &str,
) -> Option<impl Iterator<Item = &'a Value>> {
    let items = question_tags(doc)?.get(section_value)?.as_array()?;
    Some(items.iter().filter(|item| item.is_object()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::indexer::build;
    use serde_json::json;

    fn sample() -> RawDocument {
        json!({"question_tags": {
            "S2": [],
            "S1": [
                {"topic_name": {"value": "t2", "label": "Topic Two"}, "sub_topics": [
                    {"sub_topic_name": {"value": "b", "label": "B"}},
                    {"sub_topic_name": {"value": "a", "label": "A"}}
                ]},
                {"topic_name": {"value": "t1", "label": "Topic One"}, "sub_topics": []},
                {"topic_name": {"value": "t3"}, "sub_topics": [
                    {"sub_topic_name": {"value": "z"}}
                ]}
            ]
        }})
    }

    #[test]
    fn test_option_listings() {
        let index = build(Some(&sample()));
        assert_eq!(sections(&index), vec!["S1", "S2"]);
        assert_eq!(topics(&index, "S1"), vec!["t1", "t2", "t3"]);
        assert_eq!(sub_topics(&index, "S1", "t2"), vec!["a", "b"]);
        assert!(sub_topics(&index, "S1", "t1").is_empty());
    }

    #[test]
    fn test_listing_misses_are_empty() {
        let index = build(Some(&sample()));
        assert!(topics(&index, "nonexistent").is_empty());
        assert!(sub_topics(&index, "nonexistent", "t2").is_empty());
        assert!(sub_topics(&index, "S1", "nonexistent").is_empty());
    }

    #[test]
    fn test_labels() {
        let doc = sample();
        assert_eq!(topic_label(&doc, "S1", "t2").as_deref(), Some("Topic Two"));
        assert_eq!(sub_topic_label(&doc, "S1", "t2", "a").as_deref(), Some("A"));
    }

    #[test]
    fn test_label_misses_are_none() {
        let doc = sample();
        assert_eq!(topic_label(&doc, "nonexistent", "x"), None);
        assert_eq!(topic_label(&doc, "S1", "x"), None);
        assert_eq!(sub_topic_label(&doc, "S1", "t2", "x"), None);
        assert_eq!(sub_topic_label(&doc, "S1", "x", "a"), None);
        assert_eq!(topic_label(&json!(null), "S1", "t2"), None);
    }

    #[test]
    fn test_missing_label_is_none() {
        let doc = sample();
        assert_eq!(topic_label(&doc, "S1", "t3"), None);
        assert_eq!(sub_topic_label(&doc, "S1", "t3", "z"), None);
    }

    #[test]
    fn test_sub_topic_label_skips_malformed_duplicate() {
        let doc = json!({"question_tags": {"S": [
            {"topic_name": {"value": "t"}, "sub_topics": "broken"},
            {"topic_name": {"value": "t"}, "sub_topics": [
                {"sub_topic_name": {"value": "u", "label": "U"}}
            ]}
        ]}});
        assert_eq!(sub_topic_label(&doc, "S", "t", "u").as_deref(), Some("U"));
    }
}
