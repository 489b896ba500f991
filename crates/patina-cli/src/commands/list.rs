//! Implementation of the `patina list` command.

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};
use patina_core::application::CatalogService;
use patina_core::domain::PatternDoc;

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new(Box::new(super::open_catalog()?));

    let docs: Vec<PatternDoc> = match &args.category {
        Some(name) => {
            let category = super::parse_category(name)?;
            service.find_by_category(category).map_err(CliError::Core)?
        }
        None => service.list().map_err(CliError::Core)?,
    };

    match args.format {
        ListFormat::Table => {
            output.header("Catalogued Patterns:")?;
            for doc in &docs {
                let pattern = doc.pattern;
                output.print(&format!(
                    "  {:<24} {:<12} {}",
                    pattern.slug(),
                    pattern.category(),
                    pattern.summary(),
                ))?;
            }
        }

        ListFormat::List => {
            for doc in &docs {
                println!("{}", doc.pattern.slug());
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&docs).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise pattern list: {e}"),
                source: Some(Box::new(e)),
            })?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("slug,name,category,summary");
            for doc in &docs {
                let pattern = doc.pattern;
                println!(
                    "{},{},{},{}",
                    csv_field(pattern.slug()),
                    csv_field(pattern.name()),
                    csv_field(pattern.category().as_str()),
                    csv_field(pattern.summary()),
                );
            }
        }
    }

    Ok(())
}

/// Quote a CSV field when it contains a delimiter, quote, or newline
/// (RFC 4180); summaries are prose and routinely contain commas.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patina_core::domain::Pattern;

    #[test]
    fn plain_fields_pass_through_unquoted() {
        assert_eq!(csv_field("factory-method"), "factory-method");
        assert_eq!(csv_field("creational"), "creational");
    }

    #[test]
    fn fields_with_commas_are_quoted() {
        assert_eq!(csv_field("a, b, and c"), "\"a, b, and c\"");
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        assert_eq!(csv_field("the \"one\" instance"), "\"the \"\"one\"\" instance\"");
    }

    #[test]
    fn every_registry_row_renders_four_fields() {
        for pattern in Pattern::all() {
            let row = format!(
                "{},{},{},{}",
                csv_field(pattern.slug()),
                csv_field(pattern.name()),
                csv_field(pattern.category().as_str()),
                csv_field(pattern.summary()),
            );
            assert_eq!(
                split_csv(&row).len(),
                4,
                "{} row is malformed: {row}",
                pattern.slug()
            );
        }
    }

    // Minimal RFC 4180 splitter, enough to validate our own output.
    fn split_csv(row: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = row.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes && chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
                other => field.push(other),
            }
        }
        fields.push(field);
        fields
    }
}
