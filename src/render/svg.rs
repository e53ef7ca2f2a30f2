//! SVG attribute rewriting and markup escaping.

use regex::{Captures, NoExpand, Regex};
use std::sync::LazyLock;

use super::color::CURRENT_COLOR;
use super::ResolvedStyle;

static SVG_OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").unwrap());

static CLASS_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)class\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap());

static WIDTH_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)width\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap());

static HEIGHT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\s)height\s*=\s*(?:"[^"]*"|'[^']*')"#).unwrap());

static CURRENT_COLOR_FILL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"fill\s*=\s*(?:"currentColor"|'currentColor')"#).unwrap());

#[derive(Debug, Clone, Copy)]
enum RootAttr {
    Class,
    Width,
    Height,
}

impl RootAttr {
    fn name(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Width => "width",
            Self::Height => "height",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::Class => &CLASS_ATTR,
            Self::Width => &WIDTH_ATTR,
            Self::Height => &HEIGHT_ATTR,
        }
    }
}

/// Apply size, class, and color to raw SVG markup.
///
/// `class`, `width`, and `height` are replaced on the root `<svg>` element
/// when present and injected otherwise. `fill="currentColor"` anywhere in
/// the document becomes the resolved color, unless that color is itself
/// `currentColor`. Markup without an `<svg>` tag only gets the fill rewrite.
pub fn apply_svg_style(svg: &str, style: &ResolvedStyle) -> String {
    let mut out = match SVG_OPEN_TAG.find(svg) {
        Some(open) => {
            let mut tag = open.as_str().to_string();
            if let Some(class) = &style.class {
                tag = set_root_attr(&tag, RootAttr::Class, class);
            }
            tag = set_root_attr(&tag, RootAttr::Width, &style.size);
            tag = set_root_attr(&tag, RootAttr::Height, &style.size);
            format!("{}{}{}", &svg[..open.start()], tag, &svg[open.end()..])
        }
        None => svg.to_string(),
    };

    if style.color != CURRENT_COLOR {
        let fill = format!("fill=\"{}\"", escape_attr(&style.color));
        out = CURRENT_COLOR_FILL
            .replace_all(&out, NoExpand(&fill))
            .into_owned();
    }

    out
}

fn set_root_attr(tag: &str, attr: RootAttr, value: &str) -> String {
    let value = escape_attr(value);
    let pattern = attr.pattern();

    if pattern.is_match(tag) {
        pattern
            .replace(tag, |caps: &Captures| {
                format!("{}{}=\"{}\"", &caps[1], attr.name(), value)
            })
            .into_owned()
    } else {
        // The tag always starts with "<svg".
        format!("<svg {}=\"{}\"{}", attr.name(), value, &tag[4..])
    }
}

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text content.
pub fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style(size: &str, color: &str, class: Option<&str>) -> ResolvedStyle {
        ResolvedStyle {
            size: size.to_string(),
            color: color.to_string(),
            class: class.map(String::from),
        }
    }

    #[test]
    fn injects_missing_attributes() {
        let svg = r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#;
        let out = apply_svg_style(svg, &style("32px", CURRENT_COLOR, Some("icon")));

        assert_eq!(
            out,
            r#"<svg height="32px" width="32px" class="icon" viewBox="0 0 24 24"><path d="M0 0"/></svg>"#
        );
    }

    #[test]
    fn replaces_existing_attributes() {
        let svg = r#"<svg class="old" width="16" height='16' viewBox="0 0 24 24"></svg>"#;
        let out = apply_svg_style(svg, &style("2em", CURRENT_COLOR, Some("new")));

        assert!(out.contains(r#"class="new""#));
        assert!(out.contains(r#"width="2em""#));
        assert!(out.contains(r#"height="2em""#));
        assert!(!out.contains("old"));
        assert!(!out.contains("16"));
    }

    #[test]
    fn does_not_touch_lookalike_attributes() {
        let svg = r#"<svg data-width="9" stroke-width="2"></svg>"#;
        let out = apply_svg_style(svg, &style("24px", CURRENT_COLOR, None));

        assert!(out.contains(r#"data-width="9""#));
        assert!(out.contains(r#"stroke-width="2""#));
        assert!(out.contains(r#" width="24px""#));
    }

    #[test]
    fn only_root_element_is_resized() {
        let svg = r#"<svg><rect width="10" height="10"/></svg>"#;
        let out = apply_svg_style(svg, &style("24px", CURRENT_COLOR, None));
        assert!(out.contains(r#"<rect width="10" height="10"/>"#));
    }

    #[test]
    fn replaces_current_color_fills() {
        let svg = r##"<svg><path fill="currentColor"/><circle fill='currentColor'/><rect fill="#000"/></svg>"##;
        let out = apply_svg_style(svg, &style("24px", "#1976D2", None));

        assert_eq!(out.matches(r##"fill="#1976D2""##).count(), 2);
        assert!(out.contains(r##"fill="#000""##));
        assert!(!out.contains("currentColor"));
    }

    #[test]
    fn keeps_current_color_when_color_is_current_color() {
        let svg = r#"<svg><path fill="currentColor"/></svg>"#;
        let out = apply_svg_style(svg, &style("24px", CURRENT_COLOR, None));
        assert!(out.contains(r#"fill="currentColor""#));
    }

    #[test]
    fn css_variable_colors_are_not_expanded() {
        let svg = r#"<svg><path fill="currentColor"/></svg>"#;
        let out = apply_svg_style(svg, &style("24px", "var(--color-$1)", None));
        assert!(out.contains(r#"fill="var(--color-$1)""#));
    }

    #[test]
    fn escapes_attribute_values() {
        let svg = "<svg></svg>";
        let out = apply_svg_style(svg, &style("24px", CURRENT_COLOR, Some(r#"a" onload="x"#)));
        assert!(out.contains(r#"class="a&quot; onload=&quot;x""#));
    }

    #[test]
    fn keeps_prolog_before_root() {
        let svg = "<?xml version=\"1.0\"?>\n<svg></svg>";
        let out = apply_svg_style(svg, &style("1em", CURRENT_COLOR, None));
        assert!(out.starts_with("<?xml version=\"1.0\"?>\n<svg "));
    }
}
