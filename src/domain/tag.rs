// ============================================================
// Layer 3 - Tag Domain Types
// ============================================================
// The raw document is kept as an untyped serde_json::Value.
// A strict typed parse would reject the whole document over a
// single bad record; walking the Value lets us drop only the
// record that is malformed.
//
// Expected shape:
//
//   { "question_tags": {
//       "<section>": [
//         { "topic_name": {"value": "..", "label": ".."},
//           "sub_topics": [
//             { "sub_topic_name": {"value": "..", "label": ".."} }
//           ] } ] } }
//
// Reference: serde_json::Value documentation

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The parsed tag document exactly as it came off the wire or disk.
pub type RawDocument = Value;

/// Root key holding the section map.
pub const QUESTION_TAGS: &str = "question_tags";
/// Key of a section entry's (value, label) pair.
pub const TOPIC_NAME: &str = "topic_name";
/// Key of a section entry's sub-topic list.
pub const SUB_TOPICS: &str = "sub_topics";
/// Key of a sub-topic entry's (value, label) pair.
pub const SUB_TOPIC_NAME: &str = "sub_topic_name";

const VALUE: &str = "value";
const LABEL: &str = "label";

/// A taxonomy node: machine-stable value plus human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedValue {
    pub value: String,
    pub label: Option<String>,
}

impl NamedValue {
    pub fn new(value: impl Into<String>, label: Option<String>) -> Self {
        Self {
            value: value.into(),
            label,
        }
    }

    /// Text to show for this node; falls back to the value when the
    /// document carries no label.
    pub fn display(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// `node[key].value` if it is a string.
///
/// Any other shape (missing key, non-object node, non-string value)
/// yields `None`.
pub fn value_of<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key)?.get(VALUE)?.as_str()
}

/// `node[key].label` if it is a string.
pub fn label_of<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key)?.get(LABEL)?.as_str()
}

/// The section map under `question_tags`, if the document has one.
pub fn question_tags(doc: &RawDocument) -> Option<&serde_json::Map<String, Value>> {
    doc.get(QUESTION_TAGS)?.as_object()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_and_label_extraction() {
        let node = json!({"topic_name": {"value": "t1", "label": "Topic One"}});
        assert_eq!(value_of(&node, TOPIC_NAME), Some("t1"));
        assert_eq!(label_of(&node, TOPIC_NAME), Some("Topic One"));
    }

    #[test]
    fn test_wrong_shapes_yield_none() {
        assert_eq!(value_of(&json!({"topic_name": "t1"}), TOPIC_NAME), None);
        assert_eq!(value_of(&json!({"topic_name": {"value": 3}}), TOPIC_NAME), None);
        assert_eq!(value_of(&json!([1, 2]), TOPIC_NAME), None);
        assert_eq!(label_of(&json!({"topic_name": {"value": "t"}}), TOPIC_NAME), None);
    }

    #[test]
    fn test_display_falls_back_to_value() {
        assert_eq!(NamedValue::new("a", None).display(), "a");
        assert_eq!(NamedValue::new("a", Some("Alpha".into())).display(), "Alpha");
    }

    #[test]
    fn test_question_tags_requires_object() {
        assert!(question_tags(&json!({"question_tags": {}})).is_some());
        assert!(question_tags(&json!({"question_tags": []})).is_none());
        assert!(question_tags(&json!({})).is_none());
    }
}
