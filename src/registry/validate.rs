//! Registry validation rules.
//!
//! Every problem in the file is collected so the user can fix them all at
//! once:
//! - Sources need a non-empty `name` and `prefix`
//! - Prefixes must be unique and must not contain `:`
//! - `type` must be one of the supported backends
//! - `local-svg` needs a `path`, `svg-sprite` needs a `url`
//! - Alias targets must be `prefix:name` references

use std::collections::HashSet;

use super::source::SourceType;
use crate::config::RegistryFile;

/// A single validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &'static str, message: String) -> Self {
        Self { rule, message }
    }
}

/// Validate a parsed registry file and return all errors.
pub fn validate_registry(file: &RegistryFile) -> Vec<ValidationError> {
    let mut errors = validate_sources(file);
    errors.extend(validate_aliases(file));
    errors
}

fn validate_sources(file: &RegistryFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, source) in file.sources.iter().enumerate() {
        let label = if source.name.trim().is_empty() {
            format!("sources[{}]", index)
        } else {
            format!("Source '{}'", source.name)
        };

        if source.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-name",
                format!("{} has no name", label),
            ));
        }

        if source.prefix.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-prefix",
                format!("{} has no prefix", label),
            ));
        } else if source.prefix.contains(':') {
            errors.push(ValidationError::new(
                "invalid-prefix",
                format!("{} prefix '{}' must not contain ':'", label, source.prefix),
            ));
        } else if !seen.insert(source.prefix.as_str()) {
            errors.push(ValidationError::new(
                "duplicate-prefix",
                format!("{} reuses prefix '{}'", label, source.prefix),
            ));
        }

        match source.kind.parse::<SourceType>() {
            Ok(SourceType::LocalSvg) if source.path.is_none() => {
                errors.push(ValidationError::new(
                    "missing-path",
                    format!("{} is local-svg but has no path", label),
                ));
            }
            Ok(SourceType::SvgSprite) if source.url.is_none() => {
                errors.push(ValidationError::new(
                    "missing-url",
                    format!("{} is svg-sprite but has no url", label),
                ));
            }
            Ok(_) => {}
            Err(_) => {
                errors.push(ValidationError::new(
                    "unsupported-type",
                    format!(
                        "{} has unsupported type '{}' (expected one of: {})",
                        label,
                        source.kind,
                        SourceType::ALL.map(|t| t.as_str()).join(", ")
                    ),
                ));
            }
        }
    }

    errors
}

fn validate_aliases(file: &RegistryFile) -> Vec<ValidationError> {
    file.aliases
        .iter()
        .filter(|(_, target)| !target.contains(':'))
        .map(|(alias, target)| {
            ValidationError::new(
                "invalid-alias",
                format!(
                    "Alias '{}' points to '{}', which is not a 'prefix:name' reference",
                    alias, target
                ),
            )
        })
        .collect()
}
