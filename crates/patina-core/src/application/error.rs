//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::Pattern;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The catalog has no doc for a pattern that exists in the registry.
    #[error("no documentation found for pattern '{pattern}'")]
    DocNotFound { pattern: Pattern },

    /// Catalog access failed (lock poisoned).
    #[error("pattern catalog unavailable")]
    CatalogLock,

    /// A demo reported a failure the service could not attribute to a
    /// narrated business rule.
    #[error("demo for '{pattern}' failed: {reason}")]
    DemoFailed { pattern: Pattern, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DocNotFound { pattern } => vec![
                format!("The catalog is missing the doc for '{}'", pattern),
                "Run with the built-in catalog: this should never happen there".into(),
                "If you loaded a custom catalog, check it is complete".into(),
            ],
            Self::CatalogLock => vec![
                "The pattern catalog is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::DemoFailed { pattern, .. } => vec![
                format!("The '{}' demonstration did not complete", pattern),
                "Re-run with -vv for the full event trail".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DocNotFound { .. } => ErrorCategory::NotFound,
            Self::CatalogLock | Self::DemoFailed { .. } => ErrorCategory::Internal,
        }
    }
}
