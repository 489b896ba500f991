//! Patina Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Patina, a
//! runnable catalogue of the classic design patterns illustrated with small
//! fintech examples (loans, transactions, notifications, credit checks).
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           patina-cli (CLI)              │
//! │     (run / demo / list / describe)      │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (DemoService, CatalogService)       │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (PatternCatalog)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     patina-adapters (Infrastructure)    │
//! │     (InMemoryCatalog, builtin docs)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Pattern, Money, DemoReport, patterns) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use patina_core::{
//!     domain::{Category, Pattern},
//!     patterns,
//! };
//!
//! // Run a single pattern demonstration.
//! let report = patterns::run(Pattern::Strategy).unwrap();
//! assert!(report.lines().iter().any(|l| l.contains("tax")));
//!
//! // Patterns are grouped by GoF category.
//! assert_eq!(Pattern::Strategy.category(), Category::Behavioral);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Pattern implementations (the catalogue content itself)
pub mod patterns;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{CatalogService, DemoService, ports::PatternCatalog};
    pub use crate::domain::{
        Category, DemoReport, DomainError, Money, Pattern, PatternDoc, Rate,
    };
    pub use crate::error::{PatinaError, PatinaResult};
    pub use crate::patterns;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
