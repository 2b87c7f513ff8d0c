use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::DomainError;

const DEFAULT_BASE_URL: &str = "https://ws.pcbis.de/api";
const DEFAULT_COVER_URL: &str = "https://media.pcbis.de/cover";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    pub cover_url: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: u64,
    pub cache_dir: Option<PathBuf>,
    pub cache_ttl_secs: u64,
}

impl Config {
    /// Load `.env` (if present) and read the environment
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        Self {
            base_url: env::var("KNV_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            cover_url: env::var("KNV_COVER_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_COVER_URL.to_string()),
            user: env::var("KNV_USER").ok().filter(|s| !s.is_empty()),
            password: env::var("KNV_PASSWORD").ok().filter(|s| !s.is_empty()),
            timeout_secs: env::var("KNV_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(10),
            cache_dir: env::var("CACHE_DIR").ok().map(PathBuf::from),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(3600),
        }
    }

    /// Check that both endpoints are absolute http(s) URLs
    pub fn validate(&self) -> Result<(), DomainError> {
        for raw in [&self.base_url, &self.cover_url] {
            let parsed = url::Url::parse(raw)
                .map_err(|e| DomainError::Validation(format!("Invalid URL '{}': {}", raw, e)))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(DomainError::Validation(format!(
                    "Unsupported URL scheme '{}' in {}",
                    parsed.scheme(),
                    raw
                )));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cover_url: DEFAULT_COVER_URL.to_string(),
            user: None,
            password: None,
            timeout_secs: 10,
            cache_dir: None,
            cache_ttl_secs: 3600,
        }
    }
}
