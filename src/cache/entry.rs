//! Ephemeral cache entry.

use serde::{Deserialize, Serialize};

/// A cached value with the time it was stored and its lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// Original (unhashed) key, kept for listing and debugging.
    pub key: String,
    /// The cached payload.
    pub data: T,
    /// When the entry was written, in epoch milliseconds.
    pub timestamp: i64,
    /// Lifetime in seconds.
    pub ttl_seconds: u64,
}

impl<T> CacheEntry<T> {
    /// Create an entry stamped at `now_millis`.
    pub fn new(key: impl Into<String>, data: T, now_millis: i64, ttl_seconds: u64) -> Self {
        Self {
            key: key.into(),
            data,
            timestamp: now_millis,
            ttl_seconds,
        }
    }

    /// Epoch milliseconds after which the entry is stale.
    pub fn expires_at(&self) -> i64 {
        let ttl_millis = i64::try_from(self.ttl_seconds.saturating_mul(1000)).unwrap_or(i64::MAX);
        self.timestamp.saturating_add(ttl_millis)
    }

    /// An entry is expired strictly after `timestamp + ttl`.
    pub fn is_expired_at(&self, now_millis: i64) -> bool {
        now_millis > self.expires_at()
    }
}
