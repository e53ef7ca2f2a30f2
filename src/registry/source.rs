//! Validated icon sources.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::config::{DefaultsConfig, SourceConfig};
use crate::error::IconError;

/// The closed set of rendering backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceType {
    /// Icon font rendered through a ligature or class.
    WebFont,
    /// SVG inlined from the fetched-icon store.
    SvgInline,
    /// `<use>` reference into a sprite sheet.
    SvgSprite,
    /// SVG files in a local directory.
    LocalSvg,
}

impl SourceType {
    pub const ALL: [SourceType; 4] = [
        SourceType::WebFont,
        SourceType::SvgInline,
        SourceType::SvgSprite,
        SourceType::LocalSvg,
    ];

    /// The name used in registry files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebFont => "web-font",
            Self::SvgInline => "svg-inline",
            Self::SvgSprite => "svg-sprite",
            Self::LocalSvg => "local-svg",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SourceType {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| IconError::UnsupportedType {
                kind: s.to_string(),
            })
    }
}

/// A registered source, keyed by its prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub source_type: SourceType,
    pub prefix: String,
    pub url: Option<String>,
    /// Absolute, or relative to the working directory.
    pub path: Option<PathBuf>,
    pub render_template: Option<String>,
}

impl Source {
    /// Build from a file entry, resolving a relative `path` against `base_dir`.
    pub fn from_config(config: &SourceConfig, base_dir: &Path) -> Result<Self, IconError> {
        Ok(Self {
            name: config.name.clone(),
            source_type: config.kind.parse()?,
            prefix: config.prefix.clone(),
            url: config.url.clone(),
            path: config.path.as_ref().map(|p| base_dir.join(p)),
            render_template: config.render_template.clone(),
        })
    }
}

/// Fallback style values applied when a render call omits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDefaults {
    pub size: String,
    pub color: String,
    pub class: Option<String>,
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self::from(&DefaultsConfig::default())
    }
}

impl From<&DefaultsConfig> for RenderDefaults {
    fn from(config: &DefaultsConfig) -> Self {
        Self {
            size: config.size.clone(),
            color: config.color.clone(),
            class: config.class.clone(),
        }
    }
}
