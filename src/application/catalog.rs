// ============================================================
// Layer 2 - Catalog
// ============================================================
// The raw document and the index derived from it, loaded once
// and then only read. Use cases take a &Catalog; nothing reads
// the document from global state.
//
//   SourceConfig ──► load() ──► RawDocument ──► build() ──► Catalog

use anyhow::Result;

use crate::data::{indexer, lookup};
use crate::domain::tag::{NamedValue, RawDocument};
use crate::domain::taxonomy::TaxonomyIndex;
use crate::domain::traits::TaxonomySource;
use crate::infra::config::SourceConfig;

/// Load the tag document from the configured source, exactly once.
///
/// `Ok(None)` means the source was unavailable (already logged).
pub fn load(config: &SourceConfig) -> Result<Option<RawDocument>> {
    let source = config.source();
    tracing::debug!("Loading tag document from {}", source.describe());
    source.load()
}

/// Frozen document plus forward index.
#[derive(Debug, Clone)]
pub struct Catalog {
    raw: RawDocument,
    index: TaxonomyIndex,
}

impl Catalog {
    pub fn new(raw: RawDocument) -> Self {
        let index = indexer::build(Some(&raw));
        Self { raw, index }
    }

    /// Load and index. `Ok(None)` when the source had no data.
    pub fn open(source: &dyn TaxonomySource) -> Result<Option<Self>> {
        Ok(source.load()?.map(Self::new))
    }

    pub fn index(&self) -> &TaxonomyIndex {
        &self.index
    }

    pub fn sections(&self) -> Vec<String> {
        lookup::sections(&self.index)
    }

    /// Topics of a section, each with its label.
    pub fn topics(&self, section: &str) -> Vec<NamedValue> {
        lookup::topics(&self.index, section)
            .into_iter()
            .map(|topic| {
                let label = lookup::topic_label(&self.raw, section, &topic);
                NamedValue::new(topic, label)
            })
            .collect()
    }

    /// Sub-topics of (section, topic), each with its label.
    pub fn sub_topics(&self, section: &str, topic: &str) -> Vec<NamedValue> {
        lookup::sub_topics(&self.index, section, topic)
            .into_iter()
            .map(|sub| {
                let label = lookup::sub_topic_label(&self.raw, section, topic, &sub);
                NamedValue::new(sub, label)
            })
            .collect()
    }

    pub fn topic_label(&self, section: &str, topic: &str) -> Option<String> {
        lookup::topic_label(&self.raw, section, topic)
    }

    pub fn sub_topic_label(&self, section: &str, topic: &str, sub_topic: &str) -> Option<String> {
        lookup::sub_topic_label(&self.raw, section, topic, sub_topic)
    }
}
