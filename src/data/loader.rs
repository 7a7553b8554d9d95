// ============================================================
// Layer 4 - Local File Loader
// ============================================================
// Reads the tag document from a JSON file that ships with the
// deployment. Unlike the network variant, a missing or broken
// file is a configuration defect, so errors propagate to the
// caller instead of turning into "no data".
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json::from_str

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::domain::tag::{question_tags, RawDocument};
use crate::domain::traits::TaxonomySource;

/// Loads the tag document from a fixed path.
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaxonomySource for FileLoader {
    fn load(&self) -> Result<Option<RawDocument>> {
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read tag file '{}'", self.path.display()))?;

        let doc: RawDocument = serde_json::from_str(&text)
            .with_context(|| format!("Malformed JSON in tag file '{}'", self.path.display()))?;

        tracing::info!(
            "Loaded tag document from '{}' ({} sections)",
            self.path.display(),
            question_tags(&doc).map_or(0, |tags| tags.len()),
        );
        Ok(Some(doc))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
