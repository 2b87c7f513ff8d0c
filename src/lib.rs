//! Book-trade catalog records normalized into typed products.
//!
//! Raw records are classified into a product variant, type-specific fields
//! are extracted from their free text, and every product exports a canonical
//! field mapping for CSV/JSON and print templates.

pub mod config;
pub mod domain;
pub mod models;
pub mod modules;
pub mod services;

pub use config::Config;
pub use domain::DomainError;
pub use models::{Collection, Export, ExportValue, Product, RawRecord, Role, Value, Variant};
pub use modules::cataloguing::{BindingTable, classify};
pub use services::{CatalogService, RecordCache};
