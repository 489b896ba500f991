//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `patina-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by the application, implemented by
//!   infrastructure
//!   - [`PatternCatalog`]: documentation storage/retrieval
//!
//! - **Driving (Input) Ports**: Called by the external world, implemented by
//!   the application services (the CLI layer calls them directly)

use crate::domain::{Category, Pattern, PatternDoc};
use crate::error::PatinaResult;

/// Port for pattern documentation storage and retrieval.
///
/// Implemented by:
/// - `patina_adapters::catalog::InMemoryCatalog` (built-in docs)
///
/// ## Design Notes
///
/// - `get` returns `Ok(None)` for a pattern without a doc; "missing doc" is
///   an application-level decision, not a storage error
/// - `list` and `find_by_category` return docs in catalogue order
/// - Thread-safe by contract; the built-in adapter wraps an `RwLock`
pub trait PatternCatalog: Send + Sync {
    /// Get the doc for a specific pattern.
    fn get(&self, pattern: Pattern) -> PatinaResult<Option<PatternDoc>>;

    /// List all docs in catalogue order.
    fn list(&self) -> PatinaResult<Vec<PatternDoc>>;

    /// List the docs for one category, in catalogue order.
    fn find_by_category(&self, category: Category) -> PatinaResult<Vec<PatternDoc>>;

    /// Insert or replace a doc.
    fn insert(&self, doc: PatternDoc) -> PatinaResult<()>;
}
