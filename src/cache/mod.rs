//! Disk caches.
//!
//! Two stores with different lifetimes:
//! - [`TtlCache`]: hashed-key cache for ephemeral data such as search
//!   results. Entries expire and are cleaned up on read.
//! - [`FetchedIconStore`]: the durable mirror of fetched SVGs. No expiry;
//!   it shares its root with the provenance ledger.

pub mod clock;
pub mod entry;
pub mod fetched;
pub mod store;
pub mod ttl;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use fetched::{FetchedIconStore, LEDGER_FILE};
pub use store::{CacheStats, TtlCache};
pub use ttl::{format_duration, parse_ttl};

/// Get the default directory for ephemeral cache entries.
pub fn default_cache_dir() -> std::path::PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("deckicons")
        .join("search")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cache_dir_valid() {
        let path = default_cache_dir();
        assert!(path.ends_with("deckicons/search"));
    }
}
