//! Get-or-compute record cache keyed by ISBN/EAN
//!
//! In-memory entries expire after a TTL and the map is bounded (oldest entry
//! evicted). With a cache directory, entries are also persisted as one JSON
//! file per key and survive restarts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::domain::DomainError;
use crate::models::RawRecord;

const MAX_CACHE_ENTRIES: usize = 500; // Limit memory usage

struct CacheEntry {
    record: Arc<RawRecord>,
    created_at: Instant,
}

#[derive(Serialize, Deserialize)]
struct StoredEntry {
    cached_at: DateTime<Utc>,
    record: RawRecord,
}

pub struct RecordCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
    max_entries: usize,
    dir: Option<PathBuf>,
}

impl RecordCache {
    pub fn in_memory(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
            max_entries: MAX_CACHE_ENTRIES,
            dir: None,
        }
    }

    pub fn with_dir(ttl: Duration, dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
            ..Self::in_memory(ttl)
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match &config.cache_dir {
            Some(dir) => Self::with_dir(config.cache_ttl(), dir),
            None => Self::in_memory(config.cache_ttl()),
        }
    }

    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        // A poisoned map only ever holds complete entries
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Return the cached record or compute, store and return it
    pub async fn get_or_compute<F, Fut>(
        &self,
        key: &str,
        compute: F,
    ) -> Result<Arc<RawRecord>, DomainError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<RawRecord, DomainError>>,
    {
        if let Some(record) = self.get(key) {
            tracing::debug!("Cache hit for {}", key);
            return Ok(record);
        }

        if let Some(record) = self.read_file(key).await {
            tracing::debug!("Disk cache hit for {}", key);
            let record = Arc::new(record);
            self.insert(key, record.clone());
            return Ok(record);
        }

        tracing::debug!("Cache miss for {}", key);
        let record = Arc::new(compute().await?);
        self.write_file(key, &record).await?;
        self.insert(key, record.clone());
        Ok(record)
    }

    pub fn get(&self, key: &str) -> Option<Arc<RawRecord>> {
        let cache = self.lock();
        cache
            .get(key)
            .filter(|entry| entry.created_at.elapsed() < self.ttl)
            .map(|entry| entry.record.clone())
    }

    /// Remove a key from memory and disk; `true` if anything was removed
    pub async fn delete(&self, key: &str) -> Result<bool, DomainError> {
        let in_memory = self.lock().remove(key).is_some();

        let on_disk = match self.file_path(key) {
            Some(path) => match tokio::fs::remove_file(&path).await {
                Ok(()) => true,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
                Err(e) => return Err(e.into()),
            },
            None => false,
        };

        Ok(in_memory || on_disk)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, key: &str, record: Arc<RawRecord>) {
        let mut cache = self.lock();

        // Evict oldest entries if cache is full
        if cache.len() >= self.max_entries {
            let ttl = self.ttl;
            cache.retain(|_, entry| entry.created_at.elapsed() < ttl);

            if cache.len() >= self.max_entries
                && let Some(oldest_key) = cache
                    .iter()
                    .min_by_key(|(_, e)| e.created_at)
                    .map(|(k, _)| k.clone())
            {
                cache.remove(&oldest_key);
            }
        }

        cache.insert(
            key.to_string(),
            CacheEntry {
                record,
                created_at: Instant::now(),
            },
        );
    }

    fn file_path(&self, key: &str) -> Option<PathBuf> {
        let dir = self.dir.as_deref()?;
        Some(cache_file(dir, key))
    }

    /// A missing, unreadable or expired file is a miss
    async fn read_file(&self, key: &str) -> Option<RawRecord> {
        let path = self.file_path(key)?;

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!("Cannot read cache file {:?}: {}", path, e);
                return None;
            }
        };

        let stored: StoredEntry = match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!("Ignoring unreadable cache file {:?}: {}", path, e);
                return None;
            }
        };

        let age = Utc::now().signed_duration_since(stored.cached_at);
        if age.to_std().unwrap_or_default() >= self.ttl {
            tracing::debug!("Disk cache entry for {} expired", key);
            return None;
        }

        Some(stored.record)
    }

    async fn write_file(&self, key: &str, record: &RawRecord) -> Result<(), DomainError> {
        let Some(path) = self.file_path(key) else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let stored = StoredEntry {
            cached_at: Utc::now(),
            record: record.clone(),
        };
        tokio::fs::write(&path, serde_json::to_vec(&stored)?).await?;
        Ok(())
    }
}

/// Keys become file names; anything but ASCII alphanumerics is dropped
fn cache_file(dir: &Path, key: &str) -> PathBuf {
    let name: String = key.chars().filter(char::is_ascii_alphanumeric).collect();
    dir.join(format!("{}.json", name))
}
