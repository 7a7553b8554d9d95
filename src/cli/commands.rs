// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// One subcommand per question a user asks the taxonomy, plus
// the shared flags that pick the document source.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::selection::Selection;
use crate::infra::config::{SourceConfig, SourceKind};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List section values
    Sections,

    /// List the topics of a section with their labels
    Topics(TopicsArgs),

    /// List the sub-topics of a topic with their labels
    SubTopics(SubTopicsArgs),

    /// Print the label of a topic or sub-topic
    Label(LabelArgs),

    /// Resolve the three dependent dropdowns for a selection
    Browse(BrowseArgs),

    /// Print the whole section → topic → sub-topic index
    Tree,

    /// Write the taxonomy as a flat CSV file
    Export(ExportArgs),
}

/// Where the tag document comes from. Every flag is optional:
/// unset flags fall back to --config, then to built-in defaults.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Load from the remote endpoint or the bundled local file
    #[arg(long, value_enum, global = true)]
    pub source: Option<SourceArg>,

    /// URL of the remote tag document
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Path of the local tag document
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// JSON file with `kind`, `url` and `path` settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceArg {
    Remote,
    Local,
}

impl From<SourceArg> for SourceKind {
    fn from(a: SourceArg) -> Self {
        match a {
            SourceArg::Remote => SourceKind::Remote,
            SourceArg::Local  => SourceKind::Local,
        }
    }
}

impl SourceArgs {
    /// Layer explicit flags over the base config (file or defaults).
    /// This is the boundary between Layer 1 and the layers below.
    pub fn resolve(self) -> anyhow::Result<SourceConfig> {
        let mut config = match &self.config {
            Some(path) => SourceConfig::from_file(path)?,
            None       => SourceConfig::default(),
        };
        if let Some(kind) = self.source {
            config.kind = kind.into();
        }
        if let Some(url) = self.url {
            config.url = url;
        }
        if let Some(path) = self.file {
            config.path = path;
        }
        Ok(config)
    }
}

#[derive(Args, Debug)]
pub struct TopicsArgs {
    #[arg(long)]
    pub section: String,
}

#[derive(Args, Debug)]
pub struct SubTopicsArgs {
    #[arg(long)]
    pub section: String,

    #[arg(long)]
    pub topic: String,
}

#[derive(Args, Debug)]
pub struct LabelArgs {
    #[arg(long)]
    pub section: String,

    #[arg(long)]
    pub topic: String,

    /// Look up this sub-topic's label instead of the topic's
    #[arg(long)]
    pub sub_topic: Option<String>,
}

/// Omitted levels default to the first available option.
#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    #[arg(long)]
    pub section: Option<String>,

    #[arg(long)]
    pub topic: Option<String>,

    #[arg(long)]
    pub sub_topic: Option<String>,
}

impl From<BrowseArgs> for Selection {
    fn from(a: BrowseArgs) -> Self {
        Selection::new(a.section, a.topic, a.sub_topic)
    }
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination CSV file
    #[arg(long, default_value = "question_tags.csv")]
    pub out: PathBuf,
}
