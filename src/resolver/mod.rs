//! Icon resolution: name or alias in, markup out.
//!
//! [`IconResolver::render`] runs the full pipeline:
//! 1. Resolve the alias (one hop)
//! 2. Parse `prefix:name` (`IconSyntax` on failure)
//! 3. Find the source for the prefix (`UnknownSource` on failure)
//! 4. Merge options over registry defaults and resolve the color
//! 5. Dispatch to the [`Renderer`](crate::render::Renderer) for the source type
//!
//! # Example
//!
//! ```
//! use deckicons::config::EngineConfig;
//! use deckicons::registry::Registry;
//! use deckicons::render::RenderOptions;
//! use deckicons::resolver::IconResolver;
//! use std::path::Path;
//!
//! let yaml = r#"
//! sources:
//!   - { name: Material Icons, type: web-font, prefix: mi }
//! aliases:
//!   ok: mi:check
//! "#;
//! let registry = Registry::from_yaml(yaml, Path::new(".")).unwrap();
//! let resolver = IconResolver::new(registry, EngineConfig::default()).unwrap();
//!
//! let markup = resolver.render("ok", &RenderOptions::default()).unwrap();
//! assert!(markup.contains("check"));
//! ```

use crate::cache::FetchedIconStore;
use crate::config::EngineConfig;
use crate::error::{IconError, Result};
use crate::fetch::IconFetcher;
use crate::registry::{IconReference, Registry, Source, SourceType};
use crate::render::{renderer_for, resolve_color, RenderContext, RenderOptions, ResolvedStyle};

/// What warming did for one reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmStatus {
    /// Already in the fetched store.
    Cached,
    /// Downloaded and saved.
    Fetched,
    /// The source renders without fetched assets (local files, sprites).
    Skipped,
}

/// Outcome of warming a single reference.
#[derive(Debug)]
pub struct WarmOutcome {
    /// The reference as given, before alias resolution.
    pub reference: String,
    pub result: Result<WarmStatus>,
}

/// Renders icons against a loaded [`Registry`].
#[derive(Debug, Clone)]
pub struct IconResolver {
    registry: Registry,
    config: EngineConfig,
    fetcher: Option<IconFetcher>,
}

impl IconResolver {
    /// Create a resolver. A fetcher is set up when `config.fetched_dir` is set.
    pub fn new(registry: Registry, config: EngineConfig) -> Result<Self> {
        let fetcher = IconFetcher::from_config(&config)?;
        Ok(Self {
            registry,
            config,
            fetcher,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The fetcher, when a fetched directory is configured.
    pub fn fetcher(&self) -> Option<&IconFetcher> {
        self.fetcher.as_ref()
    }

    fn fetched_store(&self) -> Option<&FetchedIconStore> {
        self.fetcher.as_ref().map(IconFetcher::store)
    }

    /// Merge `options` over the registry defaults and resolve the color.
    pub fn resolve_style(&self, options: &RenderOptions) -> ResolvedStyle {
        let defaults = self.registry.defaults();
        let mode = options.color_mode.unwrap_or(self.config.color_mode);
        let color = options.color.as_deref().unwrap_or(&defaults.color);

        ResolvedStyle {
            size: options.size.clone().unwrap_or_else(|| defaults.size.clone()),
            color: resolve_color(color, self.registry.colors(), mode),
            class: options.class.clone().or_else(|| defaults.class.clone()),
        }
    }

    /// Resolve alias, parse the reference, and find its source.
    pub fn lookup(&self, name_or_alias: &str) -> Result<(IconReference, &Source)> {
        let target = self.registry.resolve_alias(name_or_alias);
        let reference =
            self.registry
                .parse_icon_reference(target)
                .ok_or_else(|| IconError::IconSyntax {
                    reference: target.to_string(),
                })?;
        let source =
            self.registry
                .source(&reference.prefix)
                .ok_or_else(|| IconError::UnknownSource {
                    prefix: reference.prefix.clone(),
                })?;
        Ok((reference, source))
    }

    /// Render one icon.
    ///
    /// # Errors
    ///
    /// - `IconSyntax` if the resolved name has no `prefix:name` shape
    /// - `UnknownSource` if no source owns the prefix
    /// - `IconFileNotFound` if a local SVG is missing
    pub fn render(&self, name_or_alias: &str, options: &RenderOptions) -> Result<String> {
        let (reference, source) = self.lookup(name_or_alias)?;
        let style = self.resolve_style(options);
        let ctx = RenderContext {
            fetched: self.fetched_store(),
            prefer_fetched: self.config.auto_fetch,
            allow_subdirectories: self.config.allow_subdirectories,
        };

        tracing::debug!(
            "Rendering {} via {} source '{}'",
            reference,
            source.source_type,
            source.name
        );
        renderer_for(source.source_type).render(&ctx, source, &reference.name, &style)
    }

    /// Render a batch. Each icon gets its own result; one failure doesn't stop the rest.
    pub fn render_many<I>(&self, names: I, options: &RenderOptions) -> Vec<Result<String>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| self.render(name.as_ref(), options))
            .collect()
    }

    /// Prefetch icons into the fetched store so later renders use them.
    ///
    /// Fails up front when no fetched directory is configured; after that,
    /// each reference reports its own outcome.
    pub fn warm<I>(&self, names: I) -> Result<Vec<WarmOutcome>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let fetcher = self
            .fetcher
            .as_ref()
            .ok_or_else(|| IconError::ConfigValidationError {
                message: "Warming icons requires a fetched directory (settings.fetched_dir)"
                    .to_string(),
            })?;

        Ok(names
            .into_iter()
            .map(|name| {
                let name = name.as_ref();
                WarmOutcome {
                    reference: name.to_string(),
                    result: self.warm_one(fetcher, name),
                }
            })
            .collect())
    }

    fn warm_one(&self, fetcher: &IconFetcher, name: &str) -> Result<WarmStatus> {
        let (reference, source) = self.lookup(name)?;
        if matches!(
            source.source_type,
            SourceType::LocalSvg | SourceType::SvgSprite
        ) {
            return Ok(WarmStatus::Skipped);
        }

        let target = reference.to_string();
        let fetch_ref = fetcher
            .parse_reference(&target)
            .ok_or(IconError::IconSyntax { reference: target })?;

        if fetcher.exists_locally(&fetch_ref) {
            tracing::debug!("{} already fetched", fetch_ref);
            return Ok(WarmStatus::Cached);
        }
        fetcher.fetch_and_save(&fetch_ref, true)?;
        Ok(WarmStatus::Fetched)
    }
}
