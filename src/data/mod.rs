// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything between the raw tag document and the answers the
// dropdowns need:
//
//   FileLoader / UrlFetcher   → obtain the raw JSON document
//       │
//       ▼
//   indexer::build            → section → topic → [sub_topic]
//       │
//       ▼
//   lookup::*                 → options per level, labels per value
//
// Each module does one step and can be tested on its own.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Reads the tag document from a local JSON file
pub mod loader;

/// Fetches the tag document over HTTP
pub mod fetcher;

/// Builds the forward TaxonomyIndex from a raw document
pub mod indexer;

/// Option listings and label lookups
pub mod lookup;
