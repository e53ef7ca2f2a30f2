//! Search request options and API payloads.

use serde::{Deserialize, Serialize};

/// Default number of results per page.
pub const DEFAULT_LIMIT: u32 = 64;

/// Options for an icon search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results.
    pub limit: u32,
    /// Restrict results to these collections.
    pub prefixes: Vec<String>,
    /// Offset of the first result.
    pub start: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            prefixes: Vec::new(),
            start: 0,
        }
    }
}

impl SearchOptions {
    /// Stable cache key for a query with these options.
    pub fn cache_key(&self, query: &str) -> String {
        format!(
            "search:{}:{}:{}:{}",
            query,
            self.limit,
            self.start,
            self.prefixes.join(",")
        )
    }
}

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    /// Matching icons as `collection:name`.
    #[serde(default)]
    pub icons: Vec<String>,
    /// Total matches available.
    #[serde(default)]
    pub total: u64,
    /// Page size the server applied.
    #[serde(default)]
    pub limit: u32,
    /// Offset the server applied.
    #[serde(default)]
    pub start: u32,
}

/// Metadata for one icon collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    /// Display name.
    pub name: String,
    /// Number of icons in the collection.
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub author: Option<CollectionAuthor>,
    #[serde(default)]
    pub license: Option<CollectionLicense>,
    /// A few representative icon names.
    #[serde(default)]
    pub samples: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAuthor {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionLicense {
    pub title: String,
    #[serde(default)]
    pub spdx: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
