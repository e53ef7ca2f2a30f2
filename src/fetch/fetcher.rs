//! Icon fetcher: network to fetched-icon store.

use chrono::{SecondsFormat, Utc};
use std::path::PathBuf;
use std::time::Duration;

use super::collections::{iconify_set, license_for};
use super::http::HttpFetcher;
use super::provenance::{ProvenanceLedger, ProvenanceRecord};
use super::reference::{parse_reference, FetchReference};
use crate::cache::FetchedIconStore;
use crate::config::EngineConfig;
use crate::error::{IconError, Result};

/// Downloads SVGs from the icon API into a [`FetchedIconStore`].
///
/// # Example
///
/// ```no_run
/// use deckicons::cache::FetchedIconStore;
/// use deckicons::fetch::IconFetcher;
/// use std::time::Duration;
///
/// let store = FetchedIconStore::new("assets/fetched");
/// let fetcher = IconFetcher::new(store, "https://api.iconify.design", Duration::from_secs(10)).unwrap();
///
/// if let Some(reference) = fetcher.parse_reference("health:stethoscope") {
///     let svg = fetcher.resolve(&reference).unwrap();
///     println!("{}", svg);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IconFetcher {
    http: HttpFetcher,
    api_url: String,
    store: FetchedIconStore,
    ledger: ProvenanceLedger,
    allow_subdirectories: bool,
}

impl IconFetcher {
    /// Create a fetcher writing into `store`.
    pub fn new(store: FetchedIconStore, api_url: &str, timeout: Duration) -> Result<Self> {
        let ledger = ProvenanceLedger::new(store.ledger_path());
        Ok(Self {
            http: HttpFetcher::with_timeout(timeout)?,
            api_url: api_url.trim_end_matches('/').to_string(),
            store,
            ledger,
            allow_subdirectories: true,
        })
    }

    /// Build a fetcher from engine settings, or `None` when no fetched
    /// directory is configured.
    pub fn from_config(config: &EngineConfig) -> Result<Option<Self>> {
        let Some(dir) = &config.fetched_dir else {
            return Ok(None);
        };

        let fetcher = Self::new(
            FetchedIconStore::new(dir),
            &config.icon_api_url,
            config.fetch_timeout,
        )?
        .allow_subdirectories(config.allow_subdirectories);
        Ok(Some(fetcher))
    }

    /// Permit or forbid `/` in icon names.
    pub fn allow_subdirectories(mut self, allow: bool) -> Self {
        self.allow_subdirectories = allow;
        self
    }

    /// Get the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }

    /// The store icons are written into.
    pub fn store(&self) -> &FetchedIconStore {
        &self.store
    }

    /// The provenance ledger next to the store.
    pub fn ledger(&self) -> &ProvenanceLedger {
        &self.ledger
    }

    /// Validate a reference under this fetcher's naming rules.
    pub fn parse_reference(&self, reference: &str) -> Option<FetchReference> {
        parse_reference(reference, self.allow_subdirectories)
    }

    /// Remote URL for a prefix and name.
    pub fn build_url(&self, prefix: &str, name: &str) -> String {
        format!("{}/{}/{}.svg", self.api_url, iconify_set(prefix), name)
    }

    /// Where the icon lives (or would live) in the store.
    pub fn local_path(&self, reference: &FetchReference) -> PathBuf {
        self.store
            .path_for(reference.collection(), reference.name())
    }

    /// Whether the icon has already been fetched.
    pub fn exists_locally(&self, reference: &FetchReference) -> bool {
        self.store
            .contains(reference.collection(), reference.name())
    }

    /// Return the stored SVG, fetching and saving it first if needed.
    pub fn resolve(&self, reference: &FetchReference) -> Result<String> {
        if let Some(svg) = self
            .store
            .read(reference.collection(), reference.name())?
        {
            tracing::debug!("Using fetched icon {}", reference);
            return Ok(svg);
        }

        self.fetch_and_save(reference, true)
    }

    /// Download an icon. With `save`, write it to the store and record its provenance.
    ///
    /// # Errors
    ///
    /// - `Timeout` when the request exceeds the configured deadline
    /// - `NotFound` when the API answers with a non-2xx status
    /// - `Network` for transport failures
    pub fn fetch_and_save(&self, reference: &FetchReference, save: bool) -> Result<String> {
        let url = self.build_url(reference.prefix(), reference.name());
        tracing::info!("Fetching {} from {}", reference, url);

        let response = self.http.get_text(&url)?;
        if !response.is_success() {
            return Err(IconError::NotFound {
                reference: reference.to_string(),
                status: response.status,
            });
        }

        if save {
            let path = self
                .store
                .write(reference.collection(), reference.name(), &response.body)?;
            self.ledger.record(
                &reference.ledger_key(),
                ProvenanceRecord {
                    source: url,
                    fetched_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    license: license_for(reference.collection()).to_string(),
                },
            )?;
            tracing::info!("Saved {} to {:?}", reference, path);
        }

        Ok(response.body)
    }
}
