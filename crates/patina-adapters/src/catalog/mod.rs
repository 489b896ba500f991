//! Catalog adapters implementing the `PatternCatalog` port.

pub mod memory;

pub use memory::InMemoryCatalog;
