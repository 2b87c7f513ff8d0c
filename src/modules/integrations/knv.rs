//! Book-trade web service client
//!
//! Fetches raw catalog records (`GET {base_url}/products/{isbn}`) and cover
//! images (`GET {cover_url}/{isbn}`). Records arrive as a flat JSON object of
//! field codes to a string or a list of strings.

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::Config;
use crate::domain::{CoverSource, DomainError, RecordSource};
use crate::models::RawRecord;

const USER_AGENT: &str = "BiblioGenius-Catalog/0.9 (catalog@bibliogenius.org)";

#[derive(Clone)]
pub struct KnvClient {
    client: reqwest::Client,
    base_url: String,
    cover_url: String,
    credentials: Option<(String, Option<String>)>,
}

impl KnvClient {
    pub fn new(config: &Config) -> Result<Self, DomainError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()
            .map_err(|e| DomainError::Internal(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cover_url: config.cover_url.trim_end_matches('/').to_string(),
            credentials: config
                .user
                .clone()
                .map(|user| (user, config.password.clone())),
        })
    }

    async fn get(&self, url: &str, identifier: &str) -> Result<reqwest::Response, DomainError> {
        let mut request = self.client.get(url);
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, password.as_ref());
        }

        let resp = request.send().await.map_err(|e| {
            DomainError::External(format!("Request failed for {}: {}", identifier, e))
        })?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(DomainError::NotFound(identifier.to_string())),
            status if !status.is_success() => Err(DomainError::External(format!(
                "API error {}: {}",
                identifier, status
            ))),
            _ => Ok(resp),
        }
    }
}

/// Strip hyphens and whitespace from an ISBN/EAN
pub fn normalize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

fn require_identifier(identifier: &str) -> Result<String, DomainError> {
    let id = normalize_identifier(identifier);
    if id.is_empty() {
        return Err(DomainError::Validation("Empty identifier".to_string()));
    }
    Ok(id)
}

#[async_trait]
impl RecordSource for KnvClient {
    async fn fetch(&self, identifier: &str) -> Result<RawRecord, DomainError> {
        let id = require_identifier(identifier)?;
        let url = format!("{}/products/{}", self.base_url, urlencoding::encode(&id));

        tracing::debug!("Fetching record {} from {}", id, url);
        let body = self
            .get(&url, &id)
            .await?
            .text()
            .await
            .map_err(|e| DomainError::External(format!("Read body failed: {}", e)))?;

        let record: RawRecord = serde_json::from_str(&body)
            .map_err(|e| DomainError::External(format!("Parse error for {}: {}", id, e)))?;

        if record.is_empty() {
            return Err(DomainError::NotFound(id));
        }

        Ok(record)
    }
}

#[async_trait]
impl CoverSource for KnvClient {
    async fn fetch_cover(&self, identifier: &str) -> Result<Vec<u8>, DomainError> {
        let id = require_identifier(identifier)?;
        let url = format!("{}/{}", self.cover_url, urlencoding::encode(&id));

        tracing::debug!("Fetching cover {} from {}", id, url);
        let bytes = self
            .get(&url, &id)
            .await?
            .bytes()
            .await
            .map_err(|e| DomainError::External(format!("Read cover failed: {}", e)))?;

        if bytes.is_empty() {
            return Err(DomainError::NotFound(id));
        }

        Ok(bytes.to_vec())
    }
}
