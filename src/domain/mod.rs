//! Domain layer - Pure business abstractions
//!
//! This layer contains NO transport details (no reqwest calls, no files).
//! Only trait definitions and domain error types.

pub mod errors;
pub mod repositories;

pub use errors::DomainError;
pub use repositories::*;
