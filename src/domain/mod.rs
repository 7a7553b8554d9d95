// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust types and traits describing the question tag
// taxonomy:
//
//   section ──► topic ──► sub-topic
//
// Every node below a section is a (value, label) pair. The
// value is the stable identifier; the label is what a person
// reads in a dropdown.
//
// Rules for this layer:
//   - NO network or file I/O
//   - NO clap types
//   - Only structs, enums, and traits
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Value/label pairs and the raw document alias
pub mod tag;

// The forward index used to populate dropdowns
pub mod taxonomy;

// Dropdown selection state for cascading browsing
pub mod selection;

// Core abstractions (traits) that other layers implement
pub mod traits;
