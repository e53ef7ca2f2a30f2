//! SVG sprite backend.

use super::svg::escape_attr;
use super::{RenderContext, Renderer, ResolvedStyle};
use crate::error::{IconError, Result};
use crate::registry::{Source, SourceType};

/// References a symbol inside the source's sprite sheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgSpriteRenderer;

impl Renderer for SvgSpriteRenderer {
    fn source_type(&self) -> SourceType {
        SourceType::SvgSprite
    }

    fn render(
        &self,
        _ctx: &RenderContext<'_>,
        source: &Source,
        name: &str,
        style: &ResolvedStyle,
    ) -> Result<String> {
        // Registry validation requires a URL; a hand-built Source may not have one.
        let url = source
            .url
            .as_deref()
            .ok_or_else(|| IconError::ConfigValidationError {
                message: format!("svg-sprite source '{}' has no url", source.name),
            })?;

        Ok(format!(
            "<svg class=\"icon icon-sprite{}\" width=\"{size}\" height=\"{size}\" fill=\"{}\" aria-hidden=\"true\"><use href=\"{}#{}\"/></svg>",
            escape_attr(&style.class_suffix()),
            escape_attr(&style.color),
            escape_attr(url),
            escape_attr(name),
            size = escape_attr(&style.size),
        ))
    }
}
