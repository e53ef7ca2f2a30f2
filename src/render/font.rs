//! Web-font backend.

use super::svg::{apply_svg_style, escape_attr, escape_text};
use super::{RenderContext, Renderer, ResolvedStyle};
use crate::error::Result;
use crate::registry::{Source, SourceType};

/// Renders ligature or class-based icon fonts.
///
/// When auto-fetch is on and the icon was fetched before, the stored SVG is
/// emitted inline instead so the deck works without the font.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebFontRenderer;

impl Renderer for WebFontRenderer {
    fn source_type(&self) -> SourceType {
        SourceType::WebFont
    }

    fn render(
        &self,
        ctx: &RenderContext<'_>,
        source: &Source,
        name: &str,
        style: &ResolvedStyle,
    ) -> Result<String> {
        if ctx.prefer_fetched {
            if let Some(svg) = ctx.fetched_svg(&source.prefix, name)? {
                return Ok(apply_svg_style(&svg, style));
            }
        }

        Ok(match &source.render_template {
            Some(template) => fill_template(template, name, style),
            None => default_markup(source, name, style),
        })
    }
}

/// Substitute `{name}`, `{size}`, `{color}`, and `{class}`.
fn fill_template(template: &str, name: &str, style: &ResolvedStyle) -> String {
    template
        .replace("{name}", &escape_attr(name))
        .replace("{size}", &escape_attr(&style.size))
        .replace("{color}", &escape_attr(&style.color))
        .replace("{class}", &escape_attr(style.class.as_deref().unwrap_or("")))
}

fn default_markup(source: &Source, name: &str, style: &ResolvedStyle) -> String {
    format!(
        "<span class=\"icon icon-font icon-{}{}\" style=\"font-size: {}; color: {};\" aria-hidden=\"true\">{}</span>",
        escape_attr(&source.prefix),
        escape_attr(&style.class_suffix()),
        escape_attr(&style.size),
        escape_attr(&style.color),
        escape_text(name),
    )
}
