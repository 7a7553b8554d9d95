// ============================================================
// Layer 6 - Source Configuration
// ============================================================
// Where the tag document comes from. Resolved in this order:
//
//   explicit CLI flag  >  --config JSON file  >  built-in default
//
// The CLI layer converts its clap args into a SourceConfig;
// nothing below Layer 1 sees clap types.
//
// Example config file:
//   { "kind": "local", "path": "data/question_tags.json" }

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};

use crate::data::{fetcher::UrlFetcher, loader::FileLoader};
use crate::domain::traits::TaxonomySource;

/// Static-content endpoint serving the production tag document.
pub const DEFAULT_TAGS_URL: &str = "https://nxtwave-assessments-backend-nxtwave-media-static.s3.ap-south-1.amazonaws.com/topin_config_prod/static/static_content.json";

/// Bundled copy of the tag document, relative to the working directory.
pub const DEFAULT_TAGS_FILE: &str = "data/question_tags.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub kind: SourceKind,
    pub url: String,
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::Remote,
            url: DEFAULT_TAGS_URL.to_string(),
            path: PathBuf::from(DEFAULT_TAGS_FILE),
        }
    }
}

impl SourceConfig {
    /// Read a JSON config file. Fields it omits keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file '{}'", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Malformed config file '{}'", path.display()))?;
        tracing::debug!("Loaded source config from '{}'", path.display());
        Ok(config)
    }

    /// Instantiate the configured source.
    pub fn source(&self) -> Box<dyn TaxonomySource> {
        match self.kind {
            SourceKind::Remote => Box::new(UrlFetcher::new(self.url.clone())),
            SourceKind::Local => Box::new(FileLoader::new(self.path.clone())),
        }
    }
}
