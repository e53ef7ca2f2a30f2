//! Durable store of fetched SVG icons.
//!
//! Layout: `<root>/<collection>/<name>.svg`, with the provenance ledger at
//! `<root>/provenance.yaml`. Nothing here ever expires; the store is the
//! offline mirror that makes generated decks reproducible.
//!
//! Callers pass names that already passed reference validation
//! ([`crate::fetch::parse_reference`]); this type does not re-check them.

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File name of the provenance ledger inside the store root.
pub const LEDGER_FILE: &str = "provenance.yaml";

/// Permanent local mirror of fetched icons.
#[derive(Debug, Clone)]
pub struct FetchedIconStore {
    root: PathBuf,
}

impl FetchedIconStore {
    /// Create a store rooted at `root`. The directory is created lazily.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Get the store root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Ledger key for an icon, e.g. `healthicons/stethoscope.svg`.
    pub fn key(collection: &str, name: &str) -> String {
        format!("{}/{}.svg", collection, name)
    }

    /// On-disk path for an icon.
    pub fn path_for(&self, collection: &str, name: &str) -> PathBuf {
        self.root.join(collection).join(format!("{}.svg", name))
    }

    /// Path of the provenance ledger.
    pub fn ledger_path(&self) -> PathBuf {
        self.root.join(LEDGER_FILE)
    }

    /// Whether an icon has been fetched before.
    pub fn contains(&self, collection: &str, name: &str) -> bool {
        self.path_for(collection, name).is_file()
    }

    /// Read a stored icon, or `None` if it was never fetched.
    pub fn read(&self, collection: &str, name: &str) -> Result<Option<String>> {
        let path = self.path_for(collection, name);
        match fs::read_to_string(&path) {
            Ok(svg) => Ok(Some(svg)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to read fetched icon {:?}", path))
                .into()),
        }
    }

    /// Write an icon, creating parent directories as needed.
    pub fn write(&self, collection: &str, name: &str, svg: &str) -> Result<PathBuf> {
        let path = self.path_for(collection, name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }
        fs::write(&path, svg).with_context(|| format!("Failed to write icon {:?}", path))?;
        Ok(path)
    }

    /// All stored icons as ledger keys, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        if self.root.is_dir() {
            collect_svgs(&self.root, &self.root, &mut keys)?;
        }
        keys.sort();
        Ok(keys)
    }
}

fn collect_svgs(root: &Path, dir: &Path, keys: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_svgs(root, &path, keys)?;
        } else if path.extension().is_some_and(|e| e == "svg") {
            if let Ok(relative) = path.strip_prefix(root) {
                let parts: Vec<_> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                keys.push(parts.join("/"));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn path_layout_is_collection_then_name() {
        let store = FetchedIconStore::new("/fetched");
        assert_eq!(
            store.path_for("healthicons", "stethoscope"),
            PathBuf::from("/fetched/healthicons/stethoscope.svg")
        );
        assert_eq!(
            FetchedIconStore::key("healthicons", "stethoscope"),
            "healthicons/stethoscope.svg"
        );
        assert_eq!(
            store.ledger_path(),
            PathBuf::from("/fetched/provenance.yaml")
        );
    }

    #[test]
    fn write_creates_directories_and_reads_back() {
        let temp = TempDir::new().unwrap();
        let store = FetchedIconStore::new(temp.path().join("fetched"));

        assert!(!store.contains("mdi", "home"));
        let path = store.write("mdi", "home", "<svg/>").unwrap();

        assert!(path.exists());
        assert!(store.contains("mdi", "home"));
        assert_eq!(
            store.read("mdi", "home").unwrap(),
            Some("<svg/>".to_string())
        );
    }

    #[test]
    fn read_missing_is_none() {
        let temp = TempDir::new().unwrap();
        let store = FetchedIconStore::new(temp.path());
        assert_eq!(store.read("mdi", "nothing").unwrap(), None);
    }

    #[test]
    fn subdirectory_names_are_nested() {
        let temp = TempDir::new().unwrap();
        let store = FetchedIconStore::new(temp.path());

        store.write("custom", "arrows/left", "<svg/>").unwrap();
        assert!(temp.path().join("custom/arrows/left.svg").exists());
    }

    #[test]
    fn list_returns_sorted_keys_and_skips_ledger() {
        let temp = TempDir::new().unwrap();
        let store = FetchedIconStore::new(temp.path());

        store.write("mdi", "home", "<svg/>").unwrap();
        store.write("healthicons", "stethoscope", "<svg/>").unwrap();
        fs::write(store.ledger_path(), "# ledger\n").unwrap();

        assert_eq!(
            store.list().unwrap(),
            vec!["healthicons/stethoscope.svg", "mdi/home.svg"]
        );
    }

    #[test]
    fn list_on_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = FetchedIconStore::new(temp.path().join("missing"));
        assert!(store.list().unwrap().is_empty());
    }
}
