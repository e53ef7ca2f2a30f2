//! Markup renderers, one per source type.
//!
//! - [`Renderer`] - the trait every backend implements
//! - [`renderer_for`] - picks the renderer for a [`SourceType`]
//! - [`RenderOptions`] / [`ResolvedStyle`] - caller overrides and the merged result
//! - [`color`] - palette lookup and theme variables
//! - [`svg`] - root attribute rewriting shared by the SVG-emitting backends

pub mod color;
pub mod font;
pub mod inline;
pub mod local;
pub mod sprite;
pub mod svg;

use serde::{Deserialize, Serialize};

use crate::cache::FetchedIconStore;
use crate::error::Result;
use crate::fetch::{iconify_set, is_valid_name};
use crate::registry::{Source, SourceType};

pub use color::{resolve_color, theme_variable, ColorMode, CURRENT_COLOR};
pub use font::WebFontRenderer;
pub use inline::SvgInlineRenderer;
pub use local::LocalSvgRenderer;
pub use sprite::SvgSpriteRenderer;
pub use svg::apply_svg_style;

/// Per-call overrides. Unset fields fall back to the registry defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub size: Option<String>,
    pub color: Option<String>,
    pub class: Option<String>,
    /// Overrides the engine's color mode for this call.
    pub color_mode: Option<ColorMode>,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }
}

/// Final size, color, and class after merging options over defaults and
/// resolving the color against the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub size: String,
    pub color: String,
    pub class: Option<String>,
}

impl ResolvedStyle {
    /// `" <class>"` or an empty string, for appending to a class list.
    pub fn class_suffix(&self) -> String {
        match &self.class {
            Some(class) if !class.is_empty() => format!(" {}", class),
            _ => String::new(),
        }
    }
}

/// Shared state a renderer may consult.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderContext<'a> {
    /// The fetched-icon store, when one is configured.
    pub fetched: Option<&'a FetchedIconStore>,
    /// Let web fonts defer to previously fetched SVGs.
    pub prefer_fetched: bool,
    /// Allow `/` in icon names.
    pub allow_subdirectories: bool,
}

impl<'a> RenderContext<'a> {
    /// Look up a previously fetched SVG for `prefix:name`.
    ///
    /// Returns `None` without touching the disk when no store is configured
    /// or the name would not pass fetch validation.
    pub fn fetched_svg(&self, prefix: &str, name: &str) -> Result<Option<String>> {
        let Some(store) = self.fetched else {
            return Ok(None);
        };
        if !is_valid_name(name, self.allow_subdirectories) {
            return Ok(None);
        }

        let svg = store.read(iconify_set(prefix), name)?;
        if svg.is_some() {
            tracing::debug!("Using fetched SVG for {}:{}", prefix, name);
        }
        Ok(svg)
    }
}

/// A rendering backend for one [`SourceType`].
pub trait Renderer: Send + Sync {
    /// The source type this renderer handles.
    fn source_type(&self) -> SourceType;

    /// Produce markup for `name` within `source`.
    fn render(
        &self,
        ctx: &RenderContext<'_>,
        source: &Source,
        name: &str,
        style: &ResolvedStyle,
    ) -> Result<String>;
}

/// Get the renderer for a source type.
pub fn renderer_for(source_type: SourceType) -> &'static dyn Renderer {
    match source_type {
        SourceType::WebFont => &WebFontRenderer,
        SourceType::SvgInline => &SvgInlineRenderer,
        SourceType::SvgSprite => &SvgSpriteRenderer,
        SourceType::LocalSvg => &LocalSvgRenderer,
    }
}
