//! Application layer for Patina.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (DemoService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! catalogue content itself. Pattern mechanics live in `crate::patterns`,
//! value types in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CatalogService, DemoRun, DemoService};

// Re-export port traits (for adapter implementation)
pub use ports::PatternCatalog;

pub use error::ApplicationError;
