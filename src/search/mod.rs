//! Icon discovery through the remote search API.
//!
//! [`SearchClient`] talks to the API with its own deadline. Caching is
//! opt-in through [`CachedSearch`], which composes the client with a
//! [`TtlCache`](crate::cache::TtlCache).

pub mod cached;
pub mod client;
pub mod types;

pub use cached::CachedSearch;
pub use client::SearchClient;
pub use types::{
    CollectionAuthor, CollectionInfo, CollectionLicense, SearchOptions, SearchResults,
    DEFAULT_LIMIT,
};
