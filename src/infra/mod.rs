// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Cross-cutting pieces that don't belong to one business layer:
//
//   config.rs   - Which source to load the tag document from,
//                 with defaults and an optional JSON file.
//
//   error.rs    - LoadError: why a remote fetch failed.
//
//   exporter.rs - Flat CSV export of the taxonomy.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Source selection and defaults
pub mod config;

/// Remote load failure taxonomy
pub mod error;

/// Taxonomy CSV writer
pub mod exporter;
