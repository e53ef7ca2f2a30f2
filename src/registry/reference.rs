//! `prefix:name` icon references.

use std::fmt;

/// A parsed icon reference. The name may contain `/` and further `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconReference {
    pub prefix: String,
    pub name: String,
}

impl IconReference {
    /// Split on the first `:`. `None` without a delimiter or with an empty side.
    pub fn parse(reference: &str) -> Option<Self> {
        let (prefix, name) = reference.split_once(':')?;
        if prefix.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self {
            prefix: prefix.to_string(),
            name: name.to_string(),
        })
    }
}

impl fmt::Display for IconReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefix_and_name() {
        let reference = IconReference::parse("mdi:home").unwrap();
        assert_eq!(reference.prefix, "mdi");
        assert_eq!(reference.name, "home");
    }

    #[test]
    fn splits_on_first_colon_only() {
        let reference = IconReference::parse("custom:brand/logo:dark").unwrap();
        assert_eq!(reference.prefix, "custom");
        assert_eq!(reference.name, "brand/logo:dark");
    }

    #[test]
    fn rejects_missing_parts() {
        assert_eq!(IconReference::parse("home"), None);
        assert_eq!(IconReference::parse(":home"), None);
        assert_eq!(IconReference::parse("mdi:"), None);
        assert_eq!(IconReference::parse(""), None);
    }

    #[test]
    fn parse_then_display_reproduces_input() {
        for input in ["mi:check", "health:stethoscope", "custom:brand/logo", "a:b:c"] {
            let reference = IconReference::parse(input).unwrap();
            assert_eq!(reference.to_string(), input);
        }
    }
}
