//! Command handler modules.

pub mod completions;
pub mod config;
pub mod demo;
pub mod describe;
pub mod init;
pub mod list;
pub mod run;

use crate::error::{CliError, CliResult};
use patina_adapters::InMemoryCatalog;
use patina_core::domain::{Category, Pattern};

/// Build the catalog every read command works against.
pub(crate) fn open_catalog() -> CliResult<InMemoryCatalog> {
    InMemoryCatalog::with_builtin().map_err(CliError::Core)
}

/// Parse a pattern argument, turning the domain rejection into a CLI error
/// with slug suggestions.
pub(crate) fn parse_pattern(name: &str) -> CliResult<Pattern> {
    name.parse()
        .map_err(|_| CliError::UnknownPattern { name: name.to_string() })
}

/// Parse a category argument.
pub(crate) fn parse_category(name: &str) -> CliResult<Category> {
    name.parse()
        .map_err(|_| CliError::UnknownCategory { name: name.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pattern_accepts_aliases() {
        assert_eq!(parse_pattern("factory").unwrap(), Pattern::FactoryMethod);
        assert_eq!(parse_pattern("cor").unwrap(), Pattern::ChainOfResponsibility);
    }

    #[test]
    fn parse_pattern_rejects_unknown() {
        assert!(matches!(
            parse_pattern("monoid"),
            Err(CliError::UnknownPattern { .. })
        ));
    }

    #[test]
    fn parse_category_accepts_british_spelling() {
        assert_eq!(parse_category("behavioural").unwrap(), Category::Behavioral);
    }

    #[test]
    fn parse_category_rejects_unknown() {
        assert!(matches!(
            parse_category("functional"),
            Err(CliError::UnknownCategory { .. })
        ));
    }
}
