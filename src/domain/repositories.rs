//! Collaborator trait definitions
//!
//! These traits define the contract for data access outside the core.
//! Implementations live in the integrations layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::RawRecord;

/// Remote source of raw catalog records
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the raw record for an ISBN/EAN.
    ///
    /// Returns `DomainError::NotFound` when the source has no such record.
    async fn fetch(&self, identifier: &str) -> Result<RawRecord, DomainError>;
}

/// Remote source of cover images
#[async_trait]
pub trait CoverSource: Send + Sync {
    /// Fetch the raw image bytes for an ISBN/EAN
    async fn fetch_cover(&self, identifier: &str) -> Result<Vec<u8>, DomainError>;
}
