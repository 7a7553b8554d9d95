// ============================================================
// Layer 4 - Taxonomy Indexer
// ============================================================
// Turns the loosely-structured raw document into the forward
// index:
//
//   { section_value: { topic_value: [sub_topic_value, ...] } }
//
// Malformed nodes are dropped at the smallest granularity:
//   - section value not a list     → section kept, no topics
//   - entry not an object          → entry dropped
//   - topic_name.value missing/""  → entry dropped
//   - sub_topics not a list        → entry dropped
//   - sub-topic entry malformed    → that sub-topic dropped
// A topic whose sub-topics were all dropped stays in the index
// with an empty list.
//
// Reference: Rust Book §8 (Collections)
//            Rust Book §13 (Iterators)

use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::tag::{question_tags, value_of, RawDocument, SUB_TOPICS, SUB_TOPIC_NAME, TOPIC_NAME};
use crate::domain::taxonomy::{TaxonomyIndex, TopicMap};

/// Build the forward index. An absent document, or one without
/// `question_tags`, gives an empty index rather than an error.
pub fn build(doc: Option<&RawDocument>) -> TaxonomyIndex {
    let Some(tags) = doc.and_then(question_tags) else {
        tracing::warn!("'question_tags' not found in tag document or document is empty");
        return TaxonomyIndex::default();
    };

    // serde_json::Map iteration order depends on features; the
    // BTreeMap below is what guarantees sorted section keys.
    let sections: BTreeMap<String, TopicMap> = tags
        .iter()
        .map(|(section, items)| (section.clone(), index_section(section, items)))
        .collect();

    let index = TaxonomyIndex::from_sections(sections);
    tracing::debug!("Built taxonomy index with {} sections", index.section_count());
    index
}

fn index_section(section: &str, items: &Value) -> TopicMap {
    let mut topics = TopicMap::new();

    let Some(items) = items.as_array() else {
        tracing::debug!("Section '{section}' is not a list; keeping it without topics");
        return topics;
    };

    for item in items {
        if let Some((topic, sub_topics)) = index_entry(item) {
            // Later duplicates replace earlier ones
            topics.insert(topic, sub_topics);
        } else {
            tracing::debug!("Skipping malformed entry in section '{section}'");
        }
    }
    topics
}

/// One section entry → (topic_value, sub_topic_values), or `None`
/// when the entry itself is unusable.
fn index_entry(item: &Value) -> Option<(String, Vec<String>)> {
    let topic = value_of(item, TOPIC_NAME).filter(|v| !v.is_empty())?;

    // A missing `sub_topics` key counts as an empty list
    let mut sub_topics = Vec::new();
    if let Some(list) = item.get(SUB_TOPICS) {
        for sub in list.as_array()? {
            match value_of(sub, SUB_TOPIC_NAME).filter(|v| !v.is_empty()) {
                Some(value) => sub_topics.push(value.to_owned()),
                None => tracing::debug!("Skipping malformed sub-topic under topic '{topic}'"),
            }
        }
    }

    Some((topic.to_owned(), sub_topics))
}
