// ============================================================
// Layer 6 - CSV Exporter
// ============================================================
// Writes the taxonomy as a flat CSV so it can be opened in a
// spreadsheet or diffed between document versions.
//
// One row per sub-topic; a topic without sub-topics still gets
// one row with the sub-topic columns left empty.
//
// Example output:
//   section,topic,topic_label,sub_topic,sub_topic_label
//   S1,t1,Topic One,,
//   S1,t2,Topic Two,a,A
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

const HEADER: &str = "section,topic,topic_label,sub_topic,sub_topic_label";

/// One flattened taxonomy row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRow {
    pub section: String,
    pub topic: String,
    pub topic_label: Option<String>,
    pub sub_topic: Option<String>,
    pub sub_topic_label: Option<String>,
}

/// Writes TagRows to a CSV file, replacing any previous export.
pub struct CsvExporter {
    csv_path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { csv_path: path.into() }
    }

    /// Write the header plus every row. Returns the number of rows.
    pub fn write(&self, rows: &[TagRow]) -> Result<usize> {
        if let Some(dir) = self.csv_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
        }

        let file = fs::File::create(&self.csv_path)
            .with_context(|| format!("Cannot create '{}'", self.csv_path.display()))?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{HEADER}")?;
        for row in rows {
            writeln!(
                out,
                "{},{},{},{},{}",
                field(&row.section),
                field(&row.topic),
                field(row.topic_label.as_deref().unwrap_or("")),
                field(row.sub_topic.as_deref().unwrap_or("")),
                field(row.sub_topic_label.as_deref().unwrap_or("")),
            )?;
        }
        out.flush()?;

        tracing::debug!("Wrote {} rows to '{}'", rows.len(), self.csv_path.display());
        Ok(rows.len())
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }
}

/// Quote a field when it contains a delimiter, quote, or line break.
fn field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
