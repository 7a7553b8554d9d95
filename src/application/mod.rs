// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Coordinates the data layer to answer what the presentation
// layer asks for. No printing here (that's Layer 1) and no
// direct file or network access (that's Layers 4 and 6).
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Loaded document + index, shared by every use case
pub mod catalog;

// Cascading dropdown resolution
pub mod browse_use_case;

// Flat CSV export of the taxonomy
pub mod export_use_case;
