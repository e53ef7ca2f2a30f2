//! Icon registry.
//!
//! A [`Registry`] is the validated, immutable form of a registry file:
//! sources indexed by prefix, aliases, the color palette, and rendering
//! defaults. Every [`Registry::load`] builds a fresh value; nothing is
//! shared between registries and nothing is mutated after construction.
//!
//! # Example
//!
//! ```
//! use deckicons::registry::Registry;
//! use std::path::Path;
//!
//! let yaml = r#"
//! sources:
//!   - { name: Material Icons, type: web-font, prefix: mi }
//! aliases:
//!   ok: mi:check
//! "#;
//!
//! let registry = Registry::from_yaml(yaml, Path::new(".")).unwrap();
//! assert_eq!(registry.resolve_alias("ok"), "mi:check");
//! assert!(registry.source("mi").is_some());
//! ```

pub mod reference;
pub mod source;
pub mod validate;

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::config::{base_dir_of, load_registry_file, parse_registry, RegistryFile, SettingsConfig};
use crate::error::{IconError, Result};

pub use reference::IconReference;
pub use source::{RenderDefaults, Source, SourceType};
pub use validate::{validate_registry, ValidationError};

/// Validated icon registry.
///
/// `Registry::default()` is the "not yet loaded" value: no sources, no
/// aliases, no colors, and built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    sources: Vec<Source>,
    by_prefix: HashMap<String, usize>,
    aliases: BTreeMap<String, String>,
    colors: BTreeMap<String, String>,
    defaults: RenderDefaults,
    settings: SettingsConfig,
    path: Option<PathBuf>,
    base_dir: Option<PathBuf>,
}

impl Registry {
    /// Load and validate a registry file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file doesn't exist
    /// - `ConfigParseError` if it can't be read or parsed
    /// - `ConfigValidationError` listing every validation failure
    pub fn load(path: &Path) -> Result<Self> {
        let file = load_registry_file(path)?;
        let mut registry = Self::from_file(file, &base_dir_of(path))?;
        registry.path = Some(path.to_path_buf());
        tracing::debug!(
            "Loaded registry {:?}: {} sources, {} aliases, {} colors",
            path,
            registry.sources.len(),
            registry.aliases.len(),
            registry.colors.len()
        );
        Ok(registry)
    }

    /// Parse and validate YAML content. Relative paths resolve against `base_dir`.
    pub fn from_yaml(content: &str, base_dir: &Path) -> Result<Self> {
        let file = parse_registry(content, Path::new("<inline>"))?;
        Self::from_file(file, base_dir)
    }

    /// Validate a parsed file and build the lookup indices.
    pub fn from_file(file: RegistryFile, base_dir: &Path) -> Result<Self> {
        let errors = validate_registry(&file);
        if !errors.is_empty() {
            let message = errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(IconError::ConfigValidationError { message });
        }

        let sources = file
            .sources
            .iter()
            .map(|config| Source::from_config(config, base_dir))
            .collect::<Result<Vec<_>>>()?;
        let by_prefix = sources
            .iter()
            .enumerate()
            .map(|(index, source)| (source.prefix.clone(), index))
            .collect();

        Ok(Self {
            sources,
            by_prefix,
            aliases: file.aliases,
            colors: file.colors,
            defaults: RenderDefaults::from(&file.defaults),
            settings: file.settings,
            path: None,
            base_dir: Some(base_dir.to_path_buf()),
        })
    }

    /// Whether this registry came from a file or YAML rather than `default()`.
    pub fn is_loaded(&self) -> bool {
        self.base_dir.is_some()
    }

    /// Map an alias to its target, or return `name` unchanged.
    ///
    /// Exactly one hop: a target that is itself an alias key is not followed.
    pub fn resolve_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    /// Split a reference on its first `:`.
    pub fn parse_icon_reference(&self, reference: &str) -> Option<IconReference> {
        IconReference::parse(reference)
    }

    /// Source registered under `prefix`.
    pub fn source(&self, prefix: &str) -> Option<&Source> {
        self.by_prefix.get(prefix).map(|&index| &self.sources[index])
    }

    /// Sources in file order.
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn defaults(&self) -> &RenderDefaults {
        &self.defaults
    }

    /// Palette value for a color name.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn colors(&self) -> &BTreeMap<String, String> {
        &self.colors
    }

    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    /// The file's `settings:` block.
    pub fn settings(&self) -> &SettingsConfig {
        &self.settings
    }

    /// The file this registry was loaded from.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Directory relative paths were resolved against.
    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const REGISTRY: &str = r##"
sources:
  - name: Material Icons
    type: web-font
    prefix: mi
    url: https://fonts.googleapis.com/icon?family=Material+Icons
  - name: Custom
    type: local-svg
    prefix: custom
    path: icons
aliases:
  ok: mi:check
colors:
  primary: "#1976D2"
defaults:
  size: 32px
  class: deck-icon
"##;

    #[test]
    fn default_is_empty_and_safe() {
        let registry = Registry::default();
        assert!(!registry.is_loaded());
        assert!(registry.sources().is_empty());
        assert!(registry.aliases().is_empty());
        assert!(registry.source("mi").is_none());
        assert_eq!(registry.color("primary"), None);
        assert_eq!(registry.defaults().size, "24px");
        assert_eq!(registry.defaults().color, "currentColor");
        assert_eq!(registry.resolve_alias("ok"), "ok");
    }

    #[test]
    fn builds_indices() {
        let registry = Registry::from_yaml(REGISTRY, Path::new("/deck")).unwrap();

        assert!(registry.is_loaded());
        assert_eq!(registry.sources().len(), 2);
        assert_eq!(
            registry.source("mi").unwrap().source_type,
            SourceType::WebFont
        );
        assert_eq!(
            registry.source("custom").unwrap().path,
            Some(PathBuf::from("/deck/icons"))
        );
        assert_eq!(registry.color("primary"), Some("#1976D2"));
        assert_eq!(registry.defaults().size, "32px");
        assert_eq!(registry.defaults().color, "currentColor");
        assert_eq!(registry.defaults().class.as_deref(), Some("deck-icon"));
    }

    #[test]
    fn alias_resolution_is_single_hop() {
        let yaml = r#"
sources:
  - { name: Material Icons, type: web-font, prefix: mi }
aliases:
  a: "mi:b"
  "mi:b": "mi:d"
"#;
        let registry = Registry::from_yaml(yaml, Path::new(".")).unwrap();
        assert_eq!(registry.resolve_alias("a"), "mi:b");
        assert_eq!(registry.resolve_alias("mi:b"), "mi:d");
        assert_eq!(registry.resolve_alias("mi:x"), "mi:x");
    }

    #[test]
    fn parse_icon_reference_requires_delimiter() {
        let registry = Registry::default();
        assert_eq!(registry.parse_icon_reference("check"), None);
        let reference = registry.parse_icon_reference("mi:check").unwrap();
        assert_eq!(reference.prefix, "mi");
        assert_eq!(reference.name, "check");
    }

    #[test]
    fn duplicate_prefix_fails_validation() {
        let yaml = r#"
sources:
  - { name: A, type: web-font, prefix: mi }
  - { name: B, type: web-font, prefix: mi }
"#;
        let err = Registry::from_yaml(yaml, Path::new(".")).unwrap_err();
        assert!(matches!(err, IconError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("mi"));
    }

    #[test]
    fn unknown_type_fails_before_rendering() {
        let yaml = "sources:\n  - { name: A, type: png-atlas, prefix: a }\n";
        let err = Registry::from_yaml(yaml, Path::new(".")).unwrap_err();
        assert!(err.is_config_error());
        assert!(err.to_string().contains("png-atlas"));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let err = Registry::from_yaml("sources: [", Path::new(".")).unwrap_err();
        assert!(matches!(err, IconError::ConfigParseError { .. }));
    }

    #[test]
    fn load_resolves_paths_against_file_dir() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icons.yaml");
        fs::write(&path, REGISTRY).unwrap();

        let registry = Registry::load(&path).unwrap();

        assert_eq!(registry.path(), Some(path.as_path()));
        assert_eq!(registry.base_dir(), Some(temp.path()));
        assert_eq!(
            registry.source("custom").unwrap().path,
            Some(temp.path().join("icons"))
        );
    }

    #[test]
    fn load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Registry::load(&temp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, IconError::ConfigNotFound { .. }));
    }

    #[test]
    fn reload_builds_independent_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("icons.yaml");
        fs::write(&path, REGISTRY).unwrap();
        let first = Registry::load(&path).unwrap();

        fs::write(
            &path,
            "sources:\n  - { name: Lucide, type: svg-inline, prefix: lucide }\n",
        )
        .unwrap();
        let second = Registry::load(&path).unwrap();

        assert!(first.source("mi").is_some());
        assert!(second.source("mi").is_none());
        assert!(second.source("lucide").is_some());
    }
}
