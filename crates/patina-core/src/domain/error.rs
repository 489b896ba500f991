// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::pattern::Pattern;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reports and errors travel together through services)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Lookup Errors (404-level equivalent)
    // ========================================================================
    #[error("unknown pattern '{0}'")]
    UnknownPattern(String),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("doc for '{pattern}' has an empty {section} section")]
    EmptyDoc {
        pattern: Pattern,
        section: &'static str,
    },

    #[error("invalid mortgage application: {0}")]
    InvalidApplication(String),

    // ========================================================================
    // Business-rule Errors surfaced by the demos themselves
    // ========================================================================
    #[error("access denied for role: {role}")]
    AccessDenied { role: String },

    #[error("payment declined for card: {card}")]
    PaymentDeclined { card: String },

    #[error("connection pool exhausted")]
    PoolExhausted,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownPattern(name) => vec![
                format!("'{}' is not a catalogued pattern", name),
                "Try: patina list".into(),
                "Slugs are kebab-case, e.g. factory-method, chain-of-responsibility".into(),
            ],
            Self::UnknownCategory(name) => vec![
                format!("'{}' is not a category", name),
                "Categories: creational, structural, behavioral".into(),
            ],
            Self::EmptyDoc { pattern, section } => vec![
                format!("The built-in doc for '{}' is missing its {}", pattern, section),
                "This is a packaging defect; please report it".into(),
            ],
            Self::AccessDenied { role } => vec![
                format!("Role '{}' may not read credit data", role),
                "The proxy demo accepts roles: admin, audit".into(),
            ],
            _ => vec!["See the pattern's doc: patina describe <pattern>".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownPattern(_) | Self::UnknownCategory(_) => ErrorCategory::NotFound,
            Self::EmptyDoc { .. } => ErrorCategory::Internal,
            Self::InvalidApplication(_) => ErrorCategory::Validation,
            Self::AccessDenied { .. } | Self::PaymentDeclined { .. } | Self::PoolExhausted => {
                ErrorCategory::Validation
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_pattern_suggests_list() {
        let err = DomainError::UnknownPattern("monad".into());
        assert!(err.suggestions().iter().any(|s| s.contains("patina list")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn access_denied_names_allowed_roles() {
        let err = DomainError::AccessDenied { role: "teller".into() };
        assert!(err.suggestions().iter().any(|s| s.contains("admin")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            DomainError::PoolExhausted.to_string(),
            "connection pool exhausted"
        );
        assert_eq!(
            DomainError::PaymentDeclined { card: "4000".into() }.to_string(),
            "payment declined for card: 4000"
        );
    }
}
