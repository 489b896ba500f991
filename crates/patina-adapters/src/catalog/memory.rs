//! In-memory pattern catalog seeded with the built-in docs.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use patina_core::{
    application::{ApplicationError, ports::PatternCatalog},
    domain::{Category, Pattern, PatternDoc},
    error::PatinaResult,
};

use crate::builtin_docs;

/// Thread-safe in-memory catalog.
#[derive(Clone)]
pub struct InMemoryCatalog {
    inner: Arc<RwLock<HashMap<Pattern, PatternDoc>>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a catalog with the built-in docs loaded.
    pub fn with_builtin() -> PatinaResult<Self> {
        let catalog = Self::new();
        catalog.load_builtin()?;
        Ok(catalog)
    }

    /// Load the built-in docs.
    pub fn load_builtin(&self) -> PatinaResult<()> {
        for doc in builtin_docs::all_docs() {
            self.insert(doc)?;
        }
        Ok(())
    }

    /// Number of docs in the catalog.
    pub fn len(&self) -> PatinaResult<usize> {
        let inner = self.inner.read().map_err(|_| ApplicationError::CatalogLock)?;
        Ok(inner.len())
    }

    pub fn is_empty(&self) -> PatinaResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Remove all docs.
    pub fn clear(&self) -> PatinaResult<()> {
        let mut inner = self.inner.write().map_err(|_| ApplicationError::CatalogLock)?;
        inner.clear();
        Ok(())
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternCatalog for InMemoryCatalog {
    fn get(&self, pattern: Pattern) -> PatinaResult<Option<PatternDoc>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::CatalogLock)?;
        Ok(inner.get(&pattern).cloned())
    }

    fn list(&self) -> PatinaResult<Vec<PatternDoc>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::CatalogLock)?;

        // HashMap iteration order is arbitrary; listings follow the registry.
        Ok(Pattern::all()
            .filter_map(|pattern| inner.get(&pattern).cloned())
            .collect())
    }

    fn find_by_category(&self, category: Category) -> PatinaResult<Vec<PatternDoc>> {
        let inner = self.inner.read().map_err(|_| ApplicationError::CatalogLock)?;

        Ok(Pattern::in_category(category)
            .filter_map(|pattern| inner.get(&pattern).cloned())
            .collect())
    }

    fn insert(&self, doc: PatternDoc) -> PatinaResult<()> {
        // Validate before insertion
        doc.validate()?;

        let mut inner = self.inner.write().map_err(|_| ApplicationError::CatalogLock)?;
        inner.insert(doc.pattern, doc);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let catalog = InMemoryCatalog::new();
        assert!(catalog.is_empty().unwrap());
        assert_eq!(catalog.get(Pattern::Strategy).unwrap(), None);
    }

    #[test]
    fn with_builtin_loads_the_full_catalogue() {
        let catalog = InMemoryCatalog::with_builtin().unwrap();
        assert_eq!(catalog.len().unwrap(), 25);
        assert!(catalog.get(Pattern::Strategy).unwrap().is_some());
    }

    #[test]
    fn list_follows_catalogue_order() {
        let catalog = InMemoryCatalog::with_builtin().unwrap();
        let order: Vec<Pattern> = catalog.list().unwrap().iter().map(|d| d.pattern).collect();
        let expected: Vec<Pattern> = Pattern::all().collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn find_by_category_filters_and_orders() {
        let catalog = InMemoryCatalog::with_builtin().unwrap();
        let structural = catalog.find_by_category(Category::Structural).unwrap();
        assert_eq!(structural.len(), 7);
        assert_eq!(structural[0].pattern, Pattern::Adapter);
        assert_eq!(structural[6].pattern, Pattern::Proxy);
    }

    #[test]
    fn insert_replaces_an_existing_doc() {
        let catalog = InMemoryCatalog::with_builtin().unwrap();
        let replacement = PatternDoc::new(Pattern::Strategy, "New intent.", "New motivation.");
        catalog.insert(replacement).unwrap();

        let doc = catalog.get(Pattern::Strategy).unwrap().unwrap();
        assert_eq!(doc.intent, "New intent.");
        assert_eq!(catalog.len().unwrap(), 25);
    }

    #[test]
    fn insert_rejects_blank_docs() {
        let catalog = InMemoryCatalog::new();
        let blank = PatternDoc::new(Pattern::Strategy, "", "Motivation.");
        assert!(catalog.insert(blank).is_err());
    }

    #[test]
    fn clear_empties_the_catalog() {
        let catalog = InMemoryCatalog::with_builtin().unwrap();
        catalog.clear().unwrap();
        assert!(catalog.is_empty().unwrap());
    }
}
