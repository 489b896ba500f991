//! `patina demo` — run a whole category of demonstrations.
//!
//! Output framing follows the catalogue's presentation: a banner per
//! category, then each pattern numbered by its registry ordinal:
//!
//! ```text
//! === Creational Design Patterns Demo ===
//!
//! 1. Factory Method Pattern:
//!   Processing credit-card transaction: $250.00
//! ```

use tracing::instrument;

use crate::{
    cli::{DemoArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};
use patina_core::application::{DemoRun, DemoService};
use patina_core::domain::Category;

#[instrument(skip_all)]
pub fn execute(
    args: DemoArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = DemoService::new(Box::new(super::open_catalog()?));

    let categories: Vec<Category> = if args.all {
        Category::all().to_vec()
    } else {
        // Command-line category wins; `defaults.category` from the config
        // file fills in when the argument is omitted.
        let name = args
            .category
            .or(config.defaults.category)
            .ok_or(CliError::MissingCategory)?;
        vec![super::parse_category(&name)?]
    };

    if matches!(output.format(), OutputFormat::Json) {
        let runs: Vec<DemoRun> = categories
            .iter()
            .map(|&category| service.run_category(category))
            .collect::<Result<Vec<_>, _>>()
            .map_err(CliError::Core)?
            .into_iter()
            .flatten()
            .collect();

        let json = serde_json::json!({
            "runs": runs
                .iter()
                .map(|run| {
                    serde_json::json!({
                        "pattern": run.report.pattern(),
                        "doc": run.doc,
                        "lines": run.report.lines(),
                    })
                })
                .collect::<Vec<_>>(),
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });
        println!("{json:#}");
        return Ok(());
    }

    for (i, &category) in categories.iter().enumerate() {
        if i > 0 {
            output.print("")?;
        }
        output.header(&format!("=== {} Demo ===", category.heading()))?;

        let runs = service.run_category(category).map_err(CliError::Core)?;
        for run in runs {
            let pattern = run.report.pattern();
            output.print("")?;
            output.print(&format!("{}. {} Pattern:", pattern.def().ordinal, pattern.name()))?;
            for line in run.report.lines() {
                output.print(&format!("  {line}"))?;
            }
        }
    }

    Ok(())
}
