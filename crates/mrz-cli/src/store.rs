//! # Record Store
//!
//! Keyed persistence for decoded records. Records are keyed by passport
//! number; storing a record with an existing key replaces it.
//!
//! [`JsonFileStore`] keeps a JSON object `{ passport_number: record }` on
//! disk, rewritten in full on every store. [`MemoryStore`] is the same
//! contract without a file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use mrz_core::MrzRecord;

/// Keyed record persistence.
pub trait RecordStore {
    /// Fetch the record stored under `passport_number`.
    fn fetch(&self, passport_number: &str) -> Result<Option<MrzRecord>>;

    /// Store `record` under its passport number.
    fn store(&mut self, record: &MrzRecord) -> Result<()>;
}

/// A record store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, MrzRecord>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read record store: {}", self.path.display()))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse record store: {}", self.path.display()))
    }
}

impl RecordStore for JsonFileStore {
    fn fetch(&self, passport_number: &str) -> Result<Option<MrzRecord>> {
        Ok(self.load()?.remove(passport_number))
    }

    fn store(&mut self, record: &MrzRecord) -> Result<()> {
        let mut records = self.load()?;
        records.insert(record.passport_number.clone(), record.clone());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create store directory: {}", parent.display())
            })?;
        }
        let json = serde_json::to_string_pretty(&records)
            .context("failed to serialize record store")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("failed to write record store: {}", self.path.display()))?;

        tracing::info!(
            passport_number = %record.passport_number,
            path = %self.path().display(),
            "record stored"
        );
        Ok(())
    }
}

/// An in-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, MrzRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for MemoryStore {
    fn fetch(&self, passport_number: &str) -> Result<Option<MrzRecord>> {
        Ok(self.records.get(passport_number).cloned())
    }

    fn store(&mut self, record: &MrzRecord) -> Result<()> {
        self.records
            .insert(record.passport_number.clone(), record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(passport_number: &str) -> MrzRecord {
        MrzRecord {
            document_type: "P".to_string(),
            issuing_country: "UTO".to_string(),
            name: "DOE JOHN QUINCY".to_string(),
            passport_number: passport_number.to_string(),
            nationality: "UTO".to_string(),
            birth_date: "800101".to_string(),
            gender: "M".to_string(),
            expiration_date: "250101".to_string(),
            personal_number: "123456789".to_string(),
        }
    }

    #[test]
    fn json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("records.json"));
        assert_eq!(store.fetch("L898902C3").unwrap(), None);
    }

    #[test]
    fn json_store_roundtrip_and_replace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("records.json");
        let mut store = JsonFileStore::new(&path);

        store.store(&record("L898902C3")).unwrap();
        store.store(&record("V855996J7")).unwrap();
        assert_eq!(store.fetch("L898902C3").unwrap(), Some(record("L898902C3")));

        let mut updated = record("L898902C3");
        updated.gender = "F".to_string();
        store.store(&updated).unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(reopened.path(), path.as_path());
        assert!(reopened.path().exists());
        assert_eq!(reopened.fetch("L898902C3").unwrap(), Some(updated));
        assert!(reopened.fetch("V855996J7").unwrap().is_some());
    }

    #[test]
    fn json_store_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);
        let err = store.fetch("X").unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse record store"));
    }

    #[test]
    fn memory_store_keys_by_passport_number() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        store.store(&record("A1")).unwrap();
        store.store(&record("A1")).unwrap();
        store.store(&record("B2")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.fetch("B2").unwrap(), Some(record("B2")));
        assert_eq!(store.fetch("C3").unwrap(), None);
    }
}
