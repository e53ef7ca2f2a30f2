//! Inline SVG backend.

use super::svg::{apply_svg_style, escape_attr};
use super::{RenderContext, Renderer, ResolvedStyle};
use crate::error::Result;
use crate::registry::{Source, SourceType};

/// Emits fetched SVGs inline.
///
/// Until the icon has been fetched (see `IconResolver::warm`), the output is
/// an empty placeholder tagged with the source and icon name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgInlineRenderer;

impl Renderer for SvgInlineRenderer {
    fn source_type(&self) -> SourceType {
        SourceType::SvgInline
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        source: &Source,
        name: &str,
        style: &ResolvedStyle,
    ) -> Result<String> {
        if let Some(svg) = ctx.fetched_svg(&source.prefix, name)? {
            return Ok(apply_svg_style(&svg, style));
        }

        tracing::debug!(
            "No fetched SVG for {}:{}, emitting placeholder",
            source.prefix,
            name
        );
        Ok(format!(
            "<span class=\"icon icon-placeholder{}\" data-icon-source=\"{}\" data-icon-name=\"{}\" style=\"width: {size}; height: {size}; color: {};\" aria-hidden=\"true\"></span>",
            escape_attr(&style.class_suffix()),
            escape_attr(&source.name),
            escape_attr(name),
            escape_attr(&style.color),
            size = escape_attr(&style.size),
        ))
    }
}
