// ============================================================
// Layer 3 - TaxonomyIndex Domain Type
// ============================================================
// The forward index that dependent dropdowns are populated
// from:
//
//   section_value ──► topic_value ──► [sub_topic_value, ...]
//
// BTreeMap keeps section and topic keys in ascending order, so
// iteration order is the display order. Sub-topic lists are
// sorted once when the index is built.
//
// Labels are deliberately absent here; they are recovered by
// re-scanning the raw document (see data::lookup).
//
// Reference: Rust Book §8 (Collections)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Topics of one section, each mapped to its sorted sub-topic values.
pub type TopicMap = BTreeMap<String, Vec<String>>;

/// Immutable section → topic → sorted sub-topic index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonomyIndex {
    sections: BTreeMap<String, TopicMap>,
}

impl TaxonomyIndex {
    /// Wrap an already-built section map.
    ///
    /// Sub-topic lists are sorted here so the ordering invariant holds
    /// no matter how the map was assembled.
    pub fn from_sections(mut sections: BTreeMap<String, TopicMap>) -> Self {
        for topics in sections.values_mut() {
            for sub_topics in topics.values_mut() {
                sub_topics.sort();
            }
        }
        Self { sections }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn section(&self, section_value: &str) -> Option<&TopicMap> {
        self.sections.get(section_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TopicMap)> {
        self.sections.iter()
    }
}
