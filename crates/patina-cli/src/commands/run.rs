//! `patina run` — demonstrate a single pattern.

use tracing::instrument;

use crate::{
    cli::{OutputFormat, RunArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};
use patina_core::application::DemoService;

#[instrument(skip_all, fields(pattern = %args.pattern))]
pub fn execute(
    args: RunArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let pattern = super::parse_pattern(&args.pattern)?;
    let service = DemoService::new(Box::new(super::open_catalog()?));

    let run = service.run(pattern).map_err(CliError::Core)?;

    if matches!(output.format(), OutputFormat::Json) {
        // JSON goes straight to stdout so pipes always get parseable output.
        let json = serde_json::json!({
            "pattern": run.report.pattern(),
            "doc": run.doc,
            "lines": run.report.lines(),
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });
        println!("{json:#}");
        return Ok(());
    }

    output.header(&format!("{} Pattern:", pattern.name()))?;

    if args.with_doc || config.defaults.with_doc {
        output.info(&run.doc.intent)?;
    }

    for line in run.report.lines() {
        output.print(&format!("  {line}"))?;
    }

    Ok(())
}
