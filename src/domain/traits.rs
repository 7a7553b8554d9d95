// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The application layer loads the tag document through this
// trait and never learns whether it came from the network or
// from disk.
//
// Implementations:
//   - UrlFetcher  → one HTTP GET against the static endpoint
//   - FileLoader  → reads a bundled JSON file
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::tag::RawDocument;

// ─── TaxonomySource ───────────────────────────────────────────────────────────
/// Anything that can produce the raw tag document.
///
/// The two failure channels mean different things:
///   - `Ok(None)` → source unavailable; a diagnostic has been logged
///     and the caller should stop and tell the user.
///   - `Err(_)`   → configuration defect (e.g. bundled file missing);
///     fatal at startup.
pub trait TaxonomySource {
    /// Load the document once. No retries.
    fn load(&self) -> Result<Option<RawDocument>>;

    /// Short human description of where the document comes from.
    fn describe(&self) -> String;
}
