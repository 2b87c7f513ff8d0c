//! Catalog Service - loads products from the record source
//!
//! Wires the collaborators (record source, cover source, cache) around the
//! pure core: fetch (through the cache) → classify → construct.

use futures::future::join_all;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::domain::{CoverSource, DomainError, RecordSource};
use crate::models::{Collection, Product};
use crate::modules::cataloguing::{BindingTable, classify};
use crate::modules::integrations::knv::normalize_identifier;
use crate::modules::integrations::{KnvClient, download_cover};
use crate::services::cache::RecordCache;

pub struct CatalogService {
    source: Arc<dyn RecordSource>,
    covers: Option<Arc<dyn CoverSource>>,
    cache: RecordCache,
    // None reads the bundled table
    bindings: Option<Arc<BindingTable>>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn RecordSource>, cache: RecordCache) -> Self {
        Self {
            source,
            covers: None,
            cache,
            bindings: None,
        }
    }

    /// Web service client for records and covers, cache per configuration
    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        let client = Arc::new(KnvClient::new(config)?);
        Ok(Self::new(client.clone(), RecordCache::from_config(config)).with_covers(client))
    }

    pub fn with_covers(mut self, covers: Arc<dyn CoverSource>) -> Self {
        self.covers = Some(covers);
        self
    }

    pub fn with_bindings(mut self, bindings: Arc<BindingTable>) -> Self {
        self.bindings = Some(bindings);
        self
    }

    pub fn bindings(&self) -> &BindingTable {
        self.bindings.as_deref().unwrap_or(BindingTable::global())
    }

    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }

    /// Load and classify a single product
    pub async fn load(&self, identifier: &str) -> Result<Product, DomainError> {
        let key = normalize_identifier(identifier);
        let source = self.source.clone();
        let fetch_key = key.clone();

        let raw = self
            .cache
            .get_or_compute(&key, || async move { source.fetch(&fetch_key).await })
            .await?;

        let variant = classify(&raw);
        Ok(Product::with_bindings(raw, variant, self.bindings()))
    }

    /// Load several products concurrently, keeping the input order.
    ///
    /// Records that fail to load are logged and left out.
    pub async fn load_all<I, S>(&self, identifiers: I) -> Collection
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let identifiers: Vec<String> = identifiers
            .into_iter()
            .map(|id| id.as_ref().to_string())
            .collect();

        tracing::info!("Loading {} records", identifiers.len());

        let results = join_all(identifiers.iter().map(|id| self.load(id))).await;

        let products: Vec<Product> = identifiers
            .iter()
            .zip(results)
            .filter_map(|(id, result)| match result {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::warn!("Skipping {}: {}", id, e);
                    None
                }
            })
            .collect();

        tracing::info!(
            "Loaded {} of {} records",
            products.len(),
            identifiers.len()
        );
        Collection::new(products)
    }

    /// Download the cover for an identifier into `dir`
    pub async fn load_cover(&self, identifier: &str, dir: &Path) -> Result<PathBuf, DomainError> {
        let covers = self
            .covers
            .as_ref()
            .ok_or_else(|| DomainError::Validation("No cover source configured".to_string()))?;
        download_cover(covers.as_ref(), identifier, dir).await
    }

    /// Drop a cached record so the next load refetches it
    pub async fn forget(&self, identifier: &str) -> Result<bool, DomainError> {
        self.cache.delete(&normalize_identifier(identifier)).await
    }
}
