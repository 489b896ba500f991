//! Demo Service - main application orchestrator.
//!
//! This service coordinates the demonstration workflow:
//! 1. Resolve the doc for the requested pattern(s)
//! 2. Execute the pattern demo(s)
//! 3. Return doc + transcript pairs for the outer layer to display
//!
//! It implements the driving port (incoming) and uses the catalog port
//! (outgoing).

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::PatternCatalog},
    domain::{Category, DemoReport, Pattern, PatternDoc},
    error::PatinaResult,
    patterns,
};

/// One executed demonstration: the pattern's doc plus its transcript.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoRun {
    pub doc: PatternDoc,
    pub report: DemoReport,
}

/// Main demonstration service.
///
/// Orchestrates doc resolution and demo execution.
pub struct DemoService {
    catalog: Box<dyn PatternCatalog>,
}

impl DemoService {
    /// Create a new demo service over the given catalog.
    pub fn new(catalog: Box<dyn PatternCatalog>) -> Self {
        Self { catalog }
    }

    /// Run a single pattern demonstration.
    #[instrument(skip(self), fields(pattern = %pattern))]
    pub fn run(&self, pattern: Pattern) -> PatinaResult<DemoRun> {
        // 1. Resolve the doc; every catalogued pattern must have one.
        let doc = self
            .catalog
            .get(pattern)?
            .ok_or(ApplicationError::DocNotFound { pattern })?;
        debug!(intent = %doc.intent, "doc resolved");

        // 2. Execute the demo. Demos narrate their own business rules;
        //    anything that escapes as an error is an orchestration failure.
        let report = patterns::run(pattern).map_err(|e| ApplicationError::DemoFailed {
            pattern,
            reason: e.to_string(),
        })?;

        info!(lines = report.lines().len(), "demo completed");
        Ok(DemoRun { doc, report })
    }

    /// Run every pattern of one category, in catalogue order.
    #[instrument(skip(self), fields(category = %category))]
    pub fn run_category(&self, category: Category) -> PatinaResult<Vec<DemoRun>> {
        Pattern::in_category(category)
            .map(|pattern| self.run(pattern))
            .collect()
    }

    /// Run the whole catalogue: creational, then structural, then behavioral.
    pub fn run_all(&self) -> PatinaResult<Vec<DemoRun>> {
        Category::all()
            .iter()
            .flat_map(|c| Pattern::in_category(*c))
            .map(|pattern| self.run(pattern))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatinaError;
    use mockall::mock;

    mock! {
        Catalog {}

        impl PatternCatalog for Catalog {
            fn get(&self, pattern: Pattern) -> PatinaResult<Option<PatternDoc>>;
            fn list(&self) -> PatinaResult<Vec<PatternDoc>>;
            fn find_by_category(&self, category: Category) -> PatinaResult<Vec<PatternDoc>>;
            fn insert(&self, doc: PatternDoc) -> PatinaResult<()>;
        }
    }

    fn catalog_with_all_docs() -> MockCatalog {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get()
            .returning(|p| Ok(Some(PatternDoc::new(p, "intent", "motivation"))));
        catalog
    }

    #[test]
    fn run_returns_doc_and_transcript() {
        let service = DemoService::new(Box::new(catalog_with_all_docs()));

        let run = service.run(Pattern::Strategy).unwrap();
        assert_eq!(run.doc.pattern, Pattern::Strategy);
        assert_eq!(run.report.pattern(), Pattern::Strategy);
        assert!(!run.report.is_empty());
    }

    #[test]
    fn run_without_doc_is_doc_not_found() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get().return_once(|_| Ok(None));

        let service = DemoService::new(Box::new(catalog));
        assert!(matches!(
            service.run(Pattern::Memento),
            Err(PatinaError::Application(ApplicationError::DocNotFound {
                pattern: Pattern::Memento
            }))
        ));
    }

    #[test]
    fn run_category_covers_every_member_in_order() {
        let service = DemoService::new(Box::new(catalog_with_all_docs()));

        let runs = service.run_category(Category::Creational).unwrap();
        let patterns: Vec<_> = runs.iter().map(|r| r.report.pattern()).collect();
        let expected: Vec<_> = Pattern::in_category(Category::Creational).collect();
        assert_eq!(patterns, expected);
    }

    #[test]
    fn run_all_covers_the_whole_catalogue() {
        let service = DemoService::new(Box::new(catalog_with_all_docs()));

        let runs = service.run_all().unwrap();
        assert_eq!(runs.len(), Pattern::all().count());
        // First and last follow catalogue order.
        assert_eq!(runs.first().unwrap().report.pattern(), Pattern::FactoryMethod);
        assert_eq!(runs.last().unwrap().report.pattern(), Pattern::Visitor);
    }
}
