//! JSON listing file store
//!
//! Reads a JSON array of records (the wire format of the record listing) and
//! writes it back after deletions.

use std::fs;
use std::path::{Path, PathBuf};

use super::{DeleteReport, ListQuery, MemoryStore, RecordStore};
use crate::core::{RecordId, StoredObjectRecord};
use crate::error::{MediaTreeError, Result};

/// Record store persisted as a JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    inner: MemoryStore,
}

impl JsonStore {
    /// Load a listing file
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let records = parse_listing(&content).map_err(|e| match e {
            MediaTreeError::Json(err) => MediaTreeError::listing(&path, err.to_string()),
            other => other,
        })?;
        tracing::debug!(path = %path.display(), count = records.len(), "loaded listing");
        Ok(Self {
            path,
            inner: MemoryStore::new(records),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[StoredObjectRecord] {
        self.inner.records()
    }

    /// Write the current records back to the listing file
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(self.inner.records())?;
        fs::write(&self.path, json).map_err(|e| {
            MediaTreeError::store(format!("failed to save {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}

/// Parse a listing: a JSON array of records
pub fn parse_listing(content: &str) -> Result<Vec<StoredObjectRecord>> {
    Ok(serde_json::from_str(content)?)
}

impl RecordStore for JsonStore {
    fn list(&self, query: &ListQuery) -> Result<Vec<StoredObjectRecord>> {
        self.inner.list(query)
    }

    fn delete(&mut self, ids: &[RecordId]) -> Result<DeleteReport> {
        let report = self.inner.delete(ids)?;
        if !report.deleted.is_empty() {
            self.save()?;
        }
        Ok(report)
    }
}
