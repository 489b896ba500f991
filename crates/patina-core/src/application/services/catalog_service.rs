//! Catalog Service - documentation lookups.
//!
//! Thin orchestration over the [`PatternCatalog`] port: lookups, listings,
//! and validated writes. Separated from `DemoService` for single
//! responsibility.

use crate::{
    application::{ApplicationError, ports::PatternCatalog},
    domain::{Category, Pattern, PatternDoc},
    error::PatinaResult,
};

/// Service for documentation operations.
pub struct CatalogService {
    catalog: Box<dyn PatternCatalog>,
}

impl CatalogService {
    /// Create a new catalog service.
    pub fn new(catalog: Box<dyn PatternCatalog>) -> Self {
        Self { catalog }
    }

    /// Get the doc for a pattern; a registry pattern without a doc is an
    /// application error, not an empty result.
    pub fn get(&self, pattern: Pattern) -> PatinaResult<PatternDoc> {
        self.catalog
            .get(pattern)?
            .ok_or_else(|| ApplicationError::DocNotFound { pattern }.into())
    }

    /// Add or replace a doc after validating it.
    pub fn save(&self, doc: PatternDoc) -> PatinaResult<()> {
        doc.validate()?;
        self.catalog.insert(doc)
    }

    /// List all docs in catalogue order.
    pub fn list(&self) -> PatinaResult<Vec<PatternDoc>> {
        self.catalog.list()
    }

    /// List the docs for one category.
    pub fn find_by_category(&self, category: Category) -> PatinaResult<Vec<PatternDoc>> {
        self.catalog.find_by_category(category)
    }
}
