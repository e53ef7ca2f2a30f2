//! HTTP GET with a hard deadline.
//!
//! The client's timeout covers connect, request, and body read. When it
//! fires, reqwest drops the connection, so the request is aborted rather
//! than left running in the background. Timeouts are reported as
//! [`IconError::Timeout`], everything else at the transport level as
//! [`IconError::Network`].

use anyhow::Context;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

use crate::error::{IconError, Result};

/// A body fetched with its HTTP status.
#[derive(Debug)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl FetchResponse {
    /// Whether the status is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP client with a bounded deadline.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher whose requests abort after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("deckicons/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Configured timeout in whole milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// GET a URL and read the body as text. Non-2xx statuses are returned, not raised.
    pub fn get_text(&self, url: &str) -> Result<FetchResponse> {
        let response = self.send(url)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(|e| self.map_err(url, e))?;
        Ok(FetchResponse { status, body })
    }

    /// GET a URL and decode a JSON body. Non-2xx statuses are network errors;
    /// an undecodable body is [`IconError::Other`] and never retryable.
    pub fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.send(url)?;
        let status = response.status();
        if !status.is_success() {
            return Err(IconError::Network {
                url: url.to_string(),
                message: format!("HTTP {}", status.as_u16()),
            });
        }
        let body = response.text().map_err(|e| self.map_err(url, e))?;
        let value = serde_json::from_str(&body)
            .with_context(|| format!("Malformed JSON from {}", url))?;
        Ok(value)
    }

    fn send(&self, url: &str) -> Result<Response> {
        tracing::debug!("GET {} (timeout {}ms)", url, self.timeout_ms());
        self.client
            .get(url)
            .send()
            .map_err(|e| self.map_err(url, e))
    }

    fn map_err(&self, url: &str, err: reqwest::Error) -> IconError {
        if err.is_timeout() {
            IconError::Timeout {
                url: url.to_string(),
                timeout_ms: self.timeout_ms(),
            }
        } else {
            IconError::Network {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn keeps_configured_timeout() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_millis(1500)).unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_millis(1500));
        assert_eq!(fetcher.timeout_ms(), 1500);
    }

    #[test]
    fn get_text_returns_body_and_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/mdi/home.svg");
            then.status(200).body("<svg>home</svg>");
        });

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let response = fetcher.get_text(&server.url("/mdi/home.svg")).unwrap();

        assert!(response.is_success());
        assert_eq!(response.body, "<svg>home</svg>");
    }

    #[test]
    fn get_text_passes_through_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404).body("404");
        });

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let response = fetcher.get_text(&server.url("/missing")).unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
    }

    #[test]
    fn slow_server_is_a_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200)
                .body("late")
                .delay(Duration::from_millis(2000));
        });

        let fetcher = HttpFetcher::with_timeout(Duration::from_millis(200)).unwrap();
        let err = fetcher.get_text(&server.url("/slow")).unwrap_err();

        assert!(
            matches!(err, IconError::Timeout { timeout_ms: 200, .. }),
            "expected timeout, got {:?}",
            err
        );
    }

    #[test]
    fn unreachable_host_is_network_error() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(2)).unwrap();
        let err = fetcher.get_text("http://127.0.0.1:1/icon.svg").unwrap_err();
        assert!(matches!(err, IconError::Network { .. }), "got {:?}", err);
    }

    #[test]
    fn get_json_rejects_error_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/collections");
            then.status(500);
        });

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let err = fetcher
            .get_json::<serde_json::Value>(&server.url("/collections"))
            .unwrap_err();

        assert!(err.to_string().contains("HTTP 500"));
    }

    #[test]
    fn get_json_malformed_body_is_not_retryable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/search");
            then.status(200).body("<html>maintenance</html>");
        });

        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(5)).unwrap();
        let err = fetcher
            .get_json::<serde_json::Value>(&server.url("/search"))
            .unwrap_err();

        assert!(matches!(err, IconError::Other(_)), "got {:?}", err);
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("Malformed JSON"));
    }
}
