//! Registry file schema.
//!
//! These structs map one-to-one onto the YAML registry file. They are
//! deliberately loose (strings instead of enums for source types) so that
//! validation in [`crate::registry`] can report every problem with a
//! precise message instead of failing on the first serde error.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::render::ColorMode;

/// Root structure of an icon registry file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryFile {
    /// Icon sources, each keyed by a unique prefix.
    pub sources: Vec<SourceConfig>,

    /// Friendly name to `prefix:name` reference.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, String>,

    /// Palette name to concrete color value.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,

    /// Fallback rendering values.
    pub defaults: DefaultsConfig,

    /// Engine settings.
    pub settings: SettingsConfig,
}

/// A single source entry as written in the registry file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Display name of the source.
    pub name: String,

    /// Backend type (`web-font`, `svg-inline`, `svg-sprite`, `local-svg`).
    #[serde(rename = "type")]
    pub kind: String,

    /// Prefix used in icon references.
    pub prefix: String,

    /// Remote URL (stylesheet, sprite sheet, API base).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Directory holding local SVG files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Markup template for web fonts.
    #[serde(
        default,
        alias = "renderTemplate",
        skip_serializing_if = "Option::is_none"
    )]
    pub render_template: Option<String>,
}

/// Rendering fallbacks used when a call omits size, color, or class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Icon size, e.g. `24px` or `1.5em`. Bare numbers are kept as written.
    #[serde(deserialize_with = "string_or_number")]
    pub size: String,

    /// Color value or palette name.
    pub color: String,

    /// Extra CSS class added to every icon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            color: default_color(),
            class: None,
        }
    }
}

fn default_size() -> String {
    "24px".to_string()
}

fn default_color() -> String {
    crate::render::CURRENT_COLOR.to_string()
}

/// Engine settings that may be carried inside the registry file.
///
/// Every field is optional; unset fields fall back to
/// [`EngineConfig`](super::EngineConfig) defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsConfig {
    /// Root of the fetched-icon store (relative to the registry file).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_dir: Option<PathBuf>,

    /// Prefer previously fetched SVGs over web fonts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_fetch: Option<bool>,

    /// Icon fetch timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_ms: Option<u64>,

    /// Base URL of the icon-rendering API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_api_url: Option<String>,

    /// Base URL of the search API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_api_url: Option<String>,

    /// Search timeout in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_timeout_ms: Option<u64>,

    /// Directory for cached search results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_cache_dir: Option<PathBuf>,

    /// Lifetime of cached search results, e.g. `1h` or `7d`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_ttl: Option<String>,

    /// How palette colors are emitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<ColorMode>,

    /// Allow `/` in fetched icon names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_subdirectories: Option<bool>,
}

/// Accept `size: 24` as well as `size: "24px"`.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}
