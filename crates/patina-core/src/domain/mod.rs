//! Core domain layer for Patina.
//!
//! This module contains pure catalogue logic with ZERO external dependencies
//! beyond `thiserror`, `tracing` (event emission only), `serde`, and `uuid`.
//! All presentation and storage concerns are handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or terminal calls
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services

// Public API - what the world sees
pub mod doc;
pub mod error;
pub mod money;
pub mod pattern;
pub mod report;

// Re-exports for convenience
pub use doc::PatternDoc;
pub use error::{DomainError, ErrorCategory};
pub use money::{Money, Rate};
pub use pattern::{Category, PATTERN_REGISTRY, Pattern, PatternDef};
pub use report::DemoReport;
