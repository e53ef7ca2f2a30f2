//! Provenance ledger for fetched icons.
//!
//! A YAML map from `<collection>/<name>.svg` to where and when the file was
//! fetched and under which license. Entries are only ever added or
//! refreshed.
//!
//! Every write reads the whole file, updates one entry, and rewrites it.
//! There is no locking: two processes fetching into the same store at the
//! same time can lose an update.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};

/// Comment block written at the top of the ledger.
pub const LEDGER_HEADER: &str = "\
# Provenance of fetched icons.
# Maintained by deckicons; one entry per fetched SVG with its source URL,
# fetch time, and license.
";

/// Where a fetched icon came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRecord {
    /// URL the SVG was downloaded from.
    pub source: String,
    /// ISO-8601 fetch time.
    pub fetched_at: String,
    /// SPDX license identifier of the collection.
    pub license: String,
}

/// Ledger file handle.
#[derive(Debug, Clone)]
pub struct ProvenanceLedger {
    path: PathBuf,
}

impl ProvenanceLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the ledger file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records. A missing or comment-only file is an empty ledger.
    pub fn load(&self) -> Result<BTreeMap<String, ProvenanceRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        let has_data = content
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#'));
        if !has_data {
            return Ok(BTreeMap::new());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            IconError::Other(anyhow::anyhow!(
                "Corrupt provenance ledger {:?}: {}",
                self.path,
                e
            ))
        })
    }

    /// Look up one record.
    pub fn get(&self, key: &str) -> Result<Option<ProvenanceRecord>> {
        Ok(self.load()?.remove(key))
    }

    /// Add or refresh a record and rewrite the ledger.
    pub fn record(&self, key: &str, record: ProvenanceRecord) -> Result<()> {
        let mut records = self.load()?;
        records.insert(key.to_string(), record);
        self.write_all(&records)
    }

    fn write_all(&self, records: &BTreeMap<String, ProvenanceRecord>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let body = serde_yaml::to_string(records).context("Failed to serialize ledger")?;
        fs::write(&self.path, format!("{}{}", LEDGER_HEADER, body))
            .with_context(|| format!("Failed to write ledger {:?}", self.path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(source: &str) -> ProvenanceRecord {
        ProvenanceRecord {
            source: source.to_string(),
            fetched_at: "2026-01-05T10:00:00.000Z".to_string(),
            license: "MIT".to_string(),
        }
    }

    #[test]
    fn missing_ledger_is_empty() {
        let temp = TempDir::new().unwrap();
        let ledger = ProvenanceLedger::new(temp.path().join("provenance.yaml"));
        assert!(ledger.load().unwrap().is_empty());
    }

    #[test]
    fn record_writes_header_and_entry() {
        let temp = TempDir::new().unwrap();
        let ledger = ProvenanceLedger::new(temp.path().join("provenance.yaml"));

        ledger
            .record(
                "healthicons/stethoscope.svg",
                record("https://api.iconify.design/healthicons/stethoscope.svg"),
            )
            .unwrap();

        let content = fs::read_to_string(ledger.path()).unwrap();
        assert!(content.starts_with("# Provenance of fetched icons."));
        assert!(content.contains("healthicons/stethoscope.svg"));
        assert!(content.contains("license: MIT"));
    }

    #[test]
    fn records_accumulate_and_refresh() {
        let temp = TempDir::new().unwrap();
        let ledger = ProvenanceLedger::new(temp.path().join("nested/provenance.yaml"));

        ledger.record("mdi/home.svg", record("u1")).unwrap();
        ledger.record("mdi/star.svg", record("u2")).unwrap();
        ledger.record("mdi/home.svg", record("u3")).unwrap();

        let records = ledger.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records["mdi/home.svg"].source, "u3");
        assert_eq!(
            ledger.get("mdi/star.svg").unwrap().map(|r| r.source),
            Some("u2".to_string())
        );
        assert!(ledger.get("mdi/none.svg").unwrap().is_none());
    }

    #[test]
    fn header_only_ledger_is_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("provenance.yaml");
        fs::write(&path, LEDGER_HEADER).unwrap();

        assert!(ProvenanceLedger::new(path).load().unwrap().is_empty());
    }

    #[test]
    fn corrupt_ledger_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("provenance.yaml");
        fs::write(&path, "- just\n- a list\n").unwrap();

        assert!(ProvenanceLedger::new(path).load().is_err());
    }
}
