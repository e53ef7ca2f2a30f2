//! Search client composed with the TTL cache.

use std::collections::BTreeMap;

use super::client::SearchClient;
use super::types::{CollectionInfo, SearchOptions, SearchResults};
use crate::cache::TtlCache;
use crate::error::Result;

const COLLECTIONS_KEY: &str = "collections";

/// Serves repeated searches from a [`TtlCache`] and only hits the API on a miss.
#[derive(Debug, Clone, Copy)]
pub struct CachedSearch<'a> {
    client: &'a SearchClient,
    cache: &'a TtlCache,
}

impl<'a> CachedSearch<'a> {
    pub fn new(client: &'a SearchClient, cache: &'a TtlCache) -> Self {
        Self { client, cache }
    }

    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResults> {
        self.cache
            .get_or_fetch(&options.cache_key(query), || {
                self.client.search(query, options)
            })
    }

    pub fn collections(&self) -> Result<BTreeMap<String, CollectionInfo>> {
        self.cache
            .get_or_fetch(COLLECTIONS_KEY, || self.client.collections())
    }
}
