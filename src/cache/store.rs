//! Hashed-key TTL cache on disk.
//!
//! Each entry lives in `<root>/<sha256(key)[..16]>.json` and wraps the
//! payload with its write time and lifetime. Expired entries are treated as
//! absent and their files are removed as a side effect of reading them.

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use super::clock::{Clock, SystemClock};
use super::entry::CacheEntry;
use crate::error::Result;

/// Disk-backed cache with per-entry expiry.
#[derive(Debug, Clone)]
pub struct TtlCache {
    root: PathBuf,
    ttl_seconds: u64,
    clock: Arc<dyn Clock>,
}

/// Summary of what is on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub expired: usize,
    pub total_bytes: u64,
}

impl TtlCache {
    /// Create a cache under `root` with a default entry lifetime.
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            root: root.into(),
            ttl_seconds: ttl.as_secs(),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Get the cache root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Default lifetime applied by [`set`](Self::set).
    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }

    /// Stable file path for a key.
    pub fn key_path(&self, key: &str) -> PathBuf {
        let hash = Sha256::digest(key.as_bytes());
        self.root.join(format!("{}.json", hex::encode(&hash[..16])))
    }

    /// Read a value, or `None` if it is missing, expired, or unreadable.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            tracing::debug!("cache miss: {}", key);
            return Ok(None);
        }

        let entry = match read_entry(&path) {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Discarding unreadable cache entry {:?}: {}", path, e);
                remove_if_exists(&path)?;
                return Ok(None);
            }
        };

        if entry.is_expired_at(self.clock.now_millis()) {
            tracing::debug!("cache expired: {}", key);
            remove_if_exists(&path)?;
            return Ok(None);
        }

        match serde_json::from_value(entry.data) {
            Ok(value) => {
                tracing::debug!("cache hit: {}", key);
                Ok(Some(value))
            }
            Err(e) => {
                tracing::warn!("Cached value for {} has unexpected shape: {}", key, e);
                Ok(None)
            }
        }
    }

    /// Store a value with the default lifetime, overwriting any existing entry.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        self.set_with_ttl(key, value, self.ttl_seconds)
    }

    /// Store a value with an explicit lifetime.
    pub fn set_with_ttl<T: Serialize>(&self, key: &str, value: &T, ttl_seconds: u64) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))?;

        let data = serde_json::to_value(value).context("Failed to serialize cache value")?;
        let entry = CacheEntry::new(key, data, self.clock.now_millis(), ttl_seconds);
        let json =
            serde_json::to_string_pretty(&entry).context("Failed to serialize cache entry")?;

        let path = self.key_path(key);
        fs::write(&path, json).with_context(|| format!("Failed to write cache entry {:?}", path))?;
        Ok(())
    }

    /// Return the cached value, or run `producer` once, store, and return its result.
    ///
    /// Producer errors are returned as-is and nothing is cached.
    pub fn get_or_fetch<T, F>(&self, key: &str, producer: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Result<T>,
    {
        if let Some(value) = self.get(key)? {
            return Ok(value);
        }

        let value = producer()?;
        self.set(key, &value)?;
        Ok(value)
    }

    /// Remove one entry. Returns whether anything was deleted.
    pub fn remove(&self, key: &str) -> Result<bool> {
        remove_if_exists(&self.key_path(key))
    }

    /// Remove every entry. Returns the number of files deleted.
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for path in self.entry_files()? {
            if remove_if_exists(&path)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Remove expired and unreadable entries. Returns the number deleted.
    pub fn prune_expired(&self) -> Result<usize> {
        let now = self.clock.now_millis();
        let mut removed = 0;
        for path in self.entry_files()? {
            let stale = match read_entry(&path) {
                Ok(entry) => entry.is_expired_at(now),
                Err(_) => true,
            };
            if stale && remove_if_exists(&path)? {
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Count entries and bytes on disk.
    pub fn stats(&self) -> Result<CacheStats> {
        let now = self.clock.now_millis();
        let mut stats = CacheStats::default();
        for path in self.entry_files()? {
            stats.entries += 1;
            stats.total_bytes += fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
            match read_entry(&path) {
                Ok(entry) if !entry.is_expired_at(now) => {}
                _ => stats.expired += 1,
            }
        }
        Ok(stats)
    }

    fn entry_files(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                files.push(path);
            }
        }
        Ok(files)
    }
}

fn read_entry(path: &Path) -> anyhow::Result<CacheEntry<serde_json::Value>> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::error::IconError;
    use std::cell::Cell;
    use tempfile::TempDir;

    const HOUR: Duration = Duration::from_secs(3600);

    fn cache_with_clock(temp: &TempDir) -> (TtlCache, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let cache = TtlCache::new(temp.path(), HOUR).with_clock(clock.clone());
        (cache, clock)
    }

    #[test]
    fn set_then_get_returns_value() {
        let temp = TempDir::new().unwrap();
        let (cache, _) = cache_with_clock(&temp);

        cache.set("search:home", &vec!["mdi:home"]).unwrap();
        let value: Option<Vec<String>> = cache.get("search:home").unwrap();

        assert_eq!(value, Some(vec!["mdi:home".to_string()]));
    }

    #[test]
    fn get_missing_returns_none() {
        let temp = TempDir::new().unwrap();
        let (cache, _) = cache_with_clock(&temp);

        let value: Option<String> = cache.get("nothing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn set_overwrites() {
        let temp = TempDir::new().unwrap();
        let (cache, _) = cache_with_clock(&temp);

        cache.set("k", &1).unwrap();
        cache.set("k", &2).unwrap();

        assert_eq!(cache.get::<i32>("k").unwrap(), Some(2));
    }

    #[test]
    fn expired_entry_is_absent_and_file_removed() {
        let temp = TempDir::new().unwrap();
        let (cache, clock) = cache_with_clock(&temp);

        cache.set("k", &"v").unwrap();
        let path = cache.key_path("k");
        assert!(path.exists());

        clock.advance_secs(3600);
        assert_eq!(cache.get::<String>("k").unwrap(), Some("v".to_string()));

        clock.advance_secs(1);
        assert_eq!(cache.get::<String>("k").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn per_entry_ttl_is_respected() {
        let temp = TempDir::new().unwrap();
        let (cache, clock) = cache_with_clock(&temp);

        cache.set_with_ttl("short", &1, 10).unwrap();
        cache.set("long", &2).unwrap();
        clock.advance_secs(11);

        assert_eq!(cache.get::<i32>("short").unwrap(), None);
        assert_eq!(cache.get::<i32>("long").unwrap(), Some(2));
    }

    #[test]
    fn get_or_fetch_calls_producer_once_per_miss() {
        let temp = TempDir::new().unwrap();
        let (cache, clock) = cache_with_clock(&temp);
        let calls = Cell::new(0);

        let produce = || -> Result<String> {
            calls.set(calls.get() + 1);
            Ok(format!("value-{}", calls.get()))
        };

        assert_eq!(cache.get_or_fetch("k", produce).unwrap(), "value-1");
        assert_eq!(cache.get_or_fetch("k", produce).unwrap(), "value-1");
        assert_eq!(calls.get(), 1);

        clock.advance_secs(3601);
        assert_eq!(cache.get_or_fetch("k", produce).unwrap(), "value-2");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn get_or_fetch_does_not_cache_errors() {
        let temp = TempDir::new().unwrap();
        let (cache, _) = cache_with_clock(&temp);

        let result: Result<String> = cache.get_or_fetch("k", || {
            Err(IconError::Network {
                url: "http://x".into(),
                message: "down".into(),
            })
        });

        assert!(result.is_err());
        assert!(!cache.key_path("k").exists());
    }

    #[test]
    fn corrupt_entry_is_a_miss_and_removed() {
        let temp = TempDir::new().unwrap();
        let (cache, _) = cache_with_clock(&temp);

        let path = cache.key_path("k");
        fs::write(&path, "not json").unwrap();

        assert_eq!(cache.get::<String>("k").unwrap(), None);
        assert!(!path.exists());
    }

    #[test]
    fn key_path_is_deterministic_and_distinct() {
        let temp = TempDir::new().unwrap();
        let (cache, _) = cache_with_clock(&temp);

        assert_eq!(cache.key_path("a"), cache.key_path("a"));
        assert_ne!(cache.key_path("a"), cache.key_path("b"));
        assert!(cache.key_path("../../etc/passwd").starts_with(temp.path()));
    }

    #[test]
    fn remove_clear_and_stats() {
        let temp = TempDir::new().unwrap();
        let (cache, clock) = cache_with_clock(&temp);

        cache.set("a", &1).unwrap();
        cache.set_with_ttl("b", &2, 5).unwrap();
        cache.set("c", &3).unwrap();

        assert!(cache.remove("a").unwrap());
        assert!(!cache.remove("a").unwrap());

        clock.advance_secs(6);
        let stats = cache.stats().unwrap();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.expired, 1);
        assert!(stats.total_bytes > 0);

        assert_eq!(cache.prune_expired().unwrap(), 1);
        assert_eq!(cache.clear().unwrap(), 1);
        assert_eq!(cache.stats().unwrap(), CacheStats::default());
    }

    #[test]
    fn stats_on_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let cache = TtlCache::new(temp.path().join("never-created"), HOUR);
        assert_eq!(cache.stats().unwrap(), CacheStats::default());
        assert_eq!(cache.clear().unwrap(), 0);
    }
}
