//! Engine settings.
//!
//! [`EngineConfig`] is assembled in layers, later layers winning:
//! 1. Built-in defaults
//! 2. The registry file's `settings:` block
//! 3. `DECKICONS_*` environment variables
//! 4. Explicit overrides from the caller (CLI flags)

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::{default_cache_dir, parse_ttl};
use crate::config::schema::SettingsConfig;
use crate::error::{IconError, Result};
use crate::render::ColorMode;

/// Default base URL for both the icon API and the search API.
pub const DEFAULT_API_URL: &str = "https://api.iconify.design";

/// Default deadline for a single icon fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default lifetime of cached search results.
pub const DEFAULT_SEARCH_TTL: Duration = Duration::from_secs(3600);

/// Resolved engine settings.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Root of the fetched-icon store, if any.
    pub fetched_dir: Option<PathBuf>,
    /// Render previously fetched SVGs instead of web fonts.
    pub auto_fetch: bool,
    /// Deadline for icon fetches.
    pub fetch_timeout: Duration,
    /// Base URL of the icon-rendering API.
    pub icon_api_url: String,
    /// Base URL of the search API.
    pub search_api_url: String,
    /// Deadline for search requests.
    pub search_timeout: Duration,
    /// Directory for cached search results.
    pub search_cache_dir: PathBuf,
    /// Lifetime of cached search results.
    pub search_ttl: Duration,
    /// How palette colors are emitted.
    pub color_mode: ColorMode,
    /// Allow `/` in fetched icon names.
    pub allow_subdirectories: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetched_dir: None,
            auto_fetch: true,
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            icon_api_url: DEFAULT_API_URL.to_string(),
            search_api_url: DEFAULT_API_URL.to_string(),
            search_timeout: DEFAULT_FETCH_TIMEOUT,
            search_cache_dir: default_cache_dir(),
            search_ttl: DEFAULT_SEARCH_TTL,
            color_mode: ColorMode::default(),
            allow_subdirectories: true,
        }
    }
}

impl EngineConfig {
    /// Apply a registry `settings:` block.
    ///
    /// Relative paths are resolved against `base_dir` (the registry file's
    /// directory).
    pub fn with_settings(mut self, settings: &SettingsConfig, base_dir: &Path) -> Result<Self> {
        if let Some(dir) = &settings.fetched_dir {
            self.fetched_dir = Some(base_dir.join(dir));
        }
        if let Some(auto_fetch) = settings.auto_fetch {
            self.auto_fetch = auto_fetch;
        }
        if let Some(ms) = settings.fetch_timeout_ms {
            self.fetch_timeout = Duration::from_millis(ms);
        }
        if let Some(url) = &settings.icon_api_url {
            self.icon_api_url = url.clone();
        }
        if let Some(url) = &settings.search_api_url {
            self.search_api_url = url.clone();
        }
        if let Some(ms) = settings.search_timeout_ms {
            self.search_timeout = Duration::from_millis(ms);
        }
        if let Some(dir) = &settings.search_cache_dir {
            self.search_cache_dir = base_dir.join(dir);
        }
        if let Some(ttl) = &settings.search_ttl {
            self.search_ttl = parse_ttl_setting("search_ttl", ttl)?;
        }
        if let Some(mode) = settings.color_mode {
            self.color_mode = mode;
        }
        if let Some(allow) = settings.allow_subdirectories {
            self.allow_subdirectories = allow;
        }
        Ok(self)
    }

    /// Apply `DECKICONS_*` variables from the process environment.
    pub fn with_env(self) -> Result<Self> {
        self.with_env_vars(|key| std::env::var(key).ok())
    }

    /// Apply `DECKICONS_*` variables from an arbitrary lookup.
    pub fn with_env_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup("DECKICONS_FETCHED_DIR") {
            self.fetched_dir = Some(PathBuf::from(dir));
        }
        if let Some(value) = lookup("DECKICONS_AUTO_FETCH") {
            self.auto_fetch = parse_bool_setting("DECKICONS_AUTO_FETCH", &value)?;
        }
        if let Some(value) = lookup("DECKICONS_FETCH_TIMEOUT_MS") {
            self.fetch_timeout = parse_millis_setting("DECKICONS_FETCH_TIMEOUT_MS", &value)?;
        }
        if let Some(url) = lookup("DECKICONS_ICON_API") {
            self.icon_api_url = url;
        }
        if let Some(url) = lookup("DECKICONS_SEARCH_API") {
            self.search_api_url = url;
        }
        if let Some(dir) = lookup("DECKICONS_CACHE_DIR") {
            self.search_cache_dir = PathBuf::from(dir);
        }
        if let Some(ttl) = lookup("DECKICONS_SEARCH_TTL") {
            self.search_ttl = parse_ttl_setting("DECKICONS_SEARCH_TTL", &ttl)?;
        }
        Ok(self)
    }
}

fn parse_ttl_setting(name: &str, value: &str) -> Result<Duration> {
    parse_ttl(value).map_err(|e| IconError::ConfigValidationError {
        message: format!("{} '{}': {}", name, value, e),
    })
}

fn parse_millis_setting(name: &str, value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| IconError::ConfigValidationError {
            message: format!("{} must be a number of milliseconds, got '{}'", name, value),
        })
}

fn parse_bool_setting(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(IconError::ConfigValidationError {
            message: format!("{} must be a boolean, got '{}'", name, value),
        }),
    }
}
