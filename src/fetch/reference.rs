//! Strict validation of references bound for the network or the disk.
//!
//! Stricter than [`IconReference::parse`](crate::registry::IconReference::parse):
//! anything that could escape the fetched-icon store or produce a strange
//! URL is rejected. Validation never errors; it returns `None` and every
//! caller has to branch on that.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

use super::collections::iconify_set;
use crate::cache::FetchedIconStore;

/// Longest icon name accepted, in bytes.
pub const MAX_NAME_LEN: usize = 100;

static FLAT_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").unwrap());

static NESTED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+(/[A-Za-z0-9-]+)*$").unwrap());

/// A reference that is safe to turn into a URL and a store path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FetchReference {
    prefix: String,
    name: String,
}

impl FetchReference {
    /// Registered prefix, e.g. `health`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Icon name, possibly with `/` separators.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// External collection name, e.g. `healthicons`.
    pub fn collection(&self) -> &str {
        iconify_set(&self.prefix)
    }

    /// Key used in the provenance ledger.
    pub fn ledger_key(&self) -> String {
        FetchedIconStore::key(self.collection(), &self.name)
    }
}

impl fmt::Display for FetchReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

/// Validate a `prefix:name` reference.
///
/// The prefix must be ASCII alphanumeric. The name may contain letters,
/// digits, and hyphens, plus `/` separators when `allow_subdirectories`
/// is set.
pub fn parse_reference(reference: &str, allow_subdirectories: bool) -> Option<FetchReference> {
    let (prefix, name) = reference.split_once(':')?;

    if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    if !is_valid_name(name, allow_subdirectories) {
        return None;
    }

    Some(FetchReference {
        prefix: prefix.to_string(),
        name: name.to_string(),
    })
}

/// Check an icon name against the fetch rules.
pub fn is_valid_name(name: &str, allow_subdirectories: bool) -> bool {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    if name.starts_with('/') || name.ends_with('/') {
        return false;
    }
    if name.split('/').any(|segment| segment == "..") {
        return false;
    }

    if allow_subdirectories {
        NESTED_NAME.is_match(name)
    } else {
        FLAT_NAME.is_match(name)
    }
}
