//! Services Layer
//!
//! Collaborator wiring around the pure core: caching, loading and export.

pub mod cache;
pub mod catalog_service;
pub mod export_service;

// Re-export for convenience
pub use cache::RecordCache;
pub use catalog_service::CatalogService;
pub use export_service::{to_csv_string, to_json, write_csv};
