//! Question tag taxonomy: section → topic → sub-topic.
//!
//! Load the raw tag document once, build the forward index from it,
//! and answer dropdown and label queries against the two:
//!
//! ```no_run
//! use topin_tags::{build, load, sub_topics, topic_label, topics, SourceConfig};
//!
//! # fn main() -> anyhow::Result<()> {
//! let Some(doc) = load(&SourceConfig::default())? else { return Ok(()) };
//! let index = build(Some(&doc));
//! for topic in topics(&index, "python") {
//!     println!("{topic}: {:?} {:?}", topic_label(&doc, "python", &topic), sub_topics(&index, "python", &topic));
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;

pub use application::catalog::{load, Catalog};
pub use data::indexer::build;
pub use data::lookup::{sections, sub_topic_label, sub_topics, topic_label, topics};
pub use domain::tag::{NamedValue, RawDocument};
pub use domain::taxonomy::TaxonomyIndex;
pub use domain::traits::TaxonomySource;
pub use infra::config::{SourceConfig, SourceKind};
