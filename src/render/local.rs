//! Local SVG directory backend.

use std::fs;

use super::svg::apply_svg_style;
use super::{RenderContext, Renderer, ResolvedStyle};
use crate::error::{IconError, Result};
use crate::registry::{Source, SourceType};

/// Reads `<path>/<name>.svg` from the source's directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSvgRenderer;

impl Renderer for LocalSvgRenderer {
    fn source_type(&self) -> SourceType {
        SourceType::LocalSvg
    }

    fn render(
        &self,
        _ctx: &RenderContext<'_>,
        source: &Source,
        name: &str,
        style: &ResolvedStyle,
    ) -> Result<String> {
        if !is_safe_local_name(name) {
            return Err(IconError::IconSyntax {
                reference: format!("{}:{}", source.prefix, name),
            });
        }

        let dir = source
            .path
            .as_deref()
            .ok_or_else(|| IconError::ConfigValidationError {
                message: format!("local-svg source '{}' has no path", source.name),
            })?;
        let file = dir.join(format!("{}.svg", name));

        let svg = match fs::read_to_string(&file) {
            Ok(svg) => svg,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(IconError::IconFileNotFound { path: file });
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Read local icon {:?}", file);
        Ok(apply_svg_style(&svg, style))
    }
}

/// Whether `name` stays inside the source directory: no `..` or empty
/// segments, no leading `/`, no backslashes. Any other file name is allowed.
fn is_safe_local_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('/')
        && !name.contains('\\')
        && !name.contains('\0')
        && name.split('/').all(|segment| !segment.is_empty() && segment != "..")
}
