//! Application services.

pub mod catalog_service;
pub mod demo_service;

pub use catalog_service::CatalogService;
pub use demo_service::{DemoRun, DemoService};
