// ============================================================
// Layer 2 - Export Use Case
// ============================================================
// Flattens the catalog into TagRows (index order, labels from
// the raw document) and hands them to the CSV exporter.

use anyhow::Result;
use std::path::PathBuf;

use crate::application::catalog::Catalog;
use crate::infra::exporter::{CsvExporter, TagRow};

pub struct ExportUseCase {
    out: PathBuf,
}

impl ExportUseCase {
    pub fn new(out: impl Into<PathBuf>) -> Self {
        Self { out: out.into() }
    }

    /// Write the export; returns the number of rows written.
    pub fn execute(&self, catalog: &Catalog) -> Result<usize> {
        let rows = rows(catalog);
        let written = CsvExporter::new(&self.out).write(&rows)?;
        tracing::info!("Exported {written} rows to '{}'", self.out.display());
        Ok(written)
    }
}

/// One row per sub-topic, plus one bare row per topic with none.
pub fn rows(catalog: &Catalog) -> Vec<TagRow> {
    let mut rows = Vec::new();

    for section in catalog.sections() {
        for topic in catalog.topics(&section) {
            let base = TagRow {
                section: section.clone(),
                topic: topic.value.clone(),
                topic_label: topic.label.clone(),
                ..TagRow::default()
            };

            let subs = catalog.sub_topics(&section, &topic.value);
            if subs.is_empty() {
                rows.push(base);
                continue;
            }
            rows.extend(subs.into_iter().map(|sub| TagRow {
                sub_topic: Some(sub.value),
                sub_topic_label: sub.label,
                ..base.clone()
            }));
        }
    }
    rows
}
