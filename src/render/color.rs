//! Color resolution against the registry palette.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The literal that leaves an icon's fill to inherit the text color.
pub const CURRENT_COLOR: &str = "currentColor";

/// How palette colors end up in markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Emit the palette's concrete value.
    #[default]
    Literal,
    /// Emit `var(--color-<name>)` so a theme can restyle icons.
    ThemeVariable,
}

/// Resolve a color name or literal.
///
/// Palette names win; anything else (hex, `rgb()`, `currentColor`) passes
/// through unchanged in either mode.
pub fn resolve_color(value: &str, palette: &BTreeMap<String, String>, mode: ColorMode) -> String {
    match palette.get(value) {
        Some(color) => match mode {
            ColorMode::Literal => color.clone(),
            ColorMode::ThemeVariable => theme_variable(value),
        },
        None => value.to_string(),
    }
}

/// CSS custom-property reference for a palette name.
pub fn theme_variable(name: &str) -> String {
    format!("var(--color-{})", name)
}
