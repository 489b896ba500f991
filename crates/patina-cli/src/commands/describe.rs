//! `patina describe` — print a pattern's documentation card.

use crate::{
    cli::{DescribeArgs, OutputFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};
use patina_core::application::CatalogService;

pub fn execute(args: DescribeArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let pattern = super::parse_pattern(&args.pattern)?;
    let service = CatalogService::new(Box::new(super::open_catalog()?));

    let doc = service.get(pattern).map_err(CliError::Core)?;

    if matches!(output.format(), OutputFormat::Json) {
        let json = serde_json::to_string_pretty(&doc).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise doc: {e}"),
            source: Some(Box::new(e)),
        })?;
        println!("{json}");
        return Ok(());
    }

    output.header(&format!("{} ({})", pattern.name(), pattern.category()))?;
    output.print("")?;
    output.print(&format!("Intent:     {}", doc.intent))?;
    output.print(&format!("Motivation: {}", doc.motivation))?;

    if !doc.participants.is_empty() {
        output.print("")?;
        output.print("Participants:")?;
        for participant in &doc.participants {
            output.print(&format!("  \u{2022} {participant}"))?;
        }
    }

    output.print("")?;
    output.info(&format!("Run it: patina run {}", pattern.slug()))?;

    Ok(())
}
