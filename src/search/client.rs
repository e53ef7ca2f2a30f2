//! Remote icon search API client.

use reqwest::Url;
use std::collections::BTreeMap;
use std::time::Duration;

use super::types::{CollectionInfo, SearchOptions, SearchResults};
use crate::config::EngineConfig;
use crate::error::{IconError, Result};
use crate::fetch::HttpFetcher;

/// Queries the search and collection endpoints. Results are not cached here;
/// wrap with [`CachedSearch`](super::CachedSearch) for that.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: HttpFetcher,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: HttpFetcher::with_timeout(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from engine settings.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::new(&config.search_api_url, config.search_timeout)
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }

    /// Full request URL for a search.
    pub fn search_url(&self, query: &str, options: &SearchOptions) -> Result<Url> {
        let mut params = vec![
            ("query", query.to_string()),
            ("limit", options.limit.to_string()),
            ("start", options.start.to_string()),
        ];
        if !options.prefixes.is_empty() {
            params.push(("prefixes", options.prefixes.join(",")));
        }

        let endpoint = format!("{}/search", self.base_url);
        Url::parse_with_params(&endpoint, &params).map_err(|e| IconError::ConfigValidationError {
            message: format!("Invalid search API URL '{}': {}", self.base_url, e),
        })
    }

    /// Search icons by keyword.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResults> {
        let url = self.search_url(query, options)?;
        tracing::debug!("Searching icons: {}", url);
        self.http.get_json(url.as_str())
    }

    /// List available collections keyed by collection prefix.
    pub fn collections(&self) -> Result<BTreeMap<String, CollectionInfo>> {
        let url = format!("{}/collections", self.base_url);
        self.http.get_json(&url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn client(server: &MockServer) -> SearchClient {
        SearchClient::new(&server.base_url(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn search_url_encodes_parameters() {
        let client = SearchClient::new("https://api.example.com/", Duration::from_secs(1)).unwrap();
        let options = SearchOptions {
            limit: 10,
            prefixes: vec!["mdi".into(), "lucide".into()],
            start: 5,
        };

        let url = client.search_url("arrow left", &options).unwrap();
        assert_eq!(url.path(), "/search");
        let pairs: BTreeMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["query"], "arrow left");
        assert_eq!(pairs["limit"], "10");
        assert_eq!(pairs["start"], "5");
        assert_eq!(pairs["prefixes"], "mdi,lucide");
    }

    #[test]
    fn search_url_omits_empty_prefixes() {
        let client = SearchClient::new("https://api.example.com", Duration::from_secs(1)).unwrap();
        let url = client
            .search_url("home", &SearchOptions::default())
            .unwrap();
        assert!(!url.as_str().contains("prefixes"));
    }

    #[test]
    fn search_returns_results() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("query", "stethoscope")
                .query_param("limit", "64")
                .query_param("start", "0");
            then.status(200).header("content-type", "application/json").body(
                r#"{"icons":["healthicons:stethoscope","mdi:stethoscope"],"total":2,"limit":64,"start":0}"#,
            );
        });

        let results = client(&server)
            .search("stethoscope", &SearchOptions::default())
            .unwrap();

        mock.assert();
        assert_eq!(results.total, 2);
        assert_eq!(results.icons[0], "healthicons:stethoscope");
    }

    #[test]
    fn search_filters_by_prefix() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/search")
                .query_param("prefixes", "healthicons");
            then.status(200)
                .body(r#"{"icons":[],"total":0,"limit":64,"start":0}"#);
        });

        let options = SearchOptions {
            prefixes: vec!["healthicons".into()],
            ..Default::default()
        };
        let results = client(&server).search("nothing", &options).unwrap();

        mock.assert();
        assert!(results.icons.is_empty());
    }

    #[test]
    fn search_timeout_is_distinct_from_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200)
                .body("{}")
                .delay(Duration::from_millis(2000));
        });

        let client = SearchClient::new(&server.base_url(), Duration::from_millis(150)).unwrap();
        let err = client
            .search("slow", &SearchOptions::default())
            .unwrap_err();
        assert!(matches!(err, IconError::Timeout { .. }), "got {:?}", err);
    }

    #[test]
    fn server_error_is_network_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(503);
        });

        let err = client(&server)
            .search("down", &SearchOptions::default())
            .unwrap_err();
        assert!(matches!(err, IconError::Network { .. }));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn collections_are_keyed_by_prefix() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/collections");
            then.status(200).body(
                r#"{
                    "healthicons": {"name": "Health Icons", "total": 1450,
                        "license": {"title": "MIT", "spdx": "MIT"},
                        "samples": ["stethoscope"]},
                    "mdi": {"name": "Material Design Icons", "total": 7447}
                }"#,
            );
        });

        let collections = client(&server).collections().unwrap();
        assert_eq!(collections.len(), 2);
        assert_eq!(collections["healthicons"].name, "Health Icons");
        assert_eq!(collections["mdi"].total, Some(7447));
    }
}
