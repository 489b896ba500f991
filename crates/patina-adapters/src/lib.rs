//! Infrastructure adapters for Patina.
//!
//! This crate implements the ports defined in `patina_core::application::ports`.
//! The catalogue of pattern write-ups ships in-process, so the adapters here
//! are an in-memory catalog plus the built-in documentation that seeds it.

pub mod builtin_docs;
pub mod catalog;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
