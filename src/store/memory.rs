//! In-memory record store

use std::collections::HashSet;

use super::{DeleteReport, ListQuery, RecordStore};
use crate::core::{RecordId, StoredObjectRecord};
use crate::error::Result;

/// Record store backed by a plain vector, in arrival order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<StoredObjectRecord>,
}

impl MemoryStore {
    pub fn new(records: Vec<StoredObjectRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[StoredObjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn insert(&mut self, record: StoredObjectRecord) {
        self.records.push(record);
    }

    pub fn into_records(self) -> Vec<StoredObjectRecord> {
        self.records
    }
}

impl RecordStore for MemoryStore {
    fn list(&self, query: &ListQuery) -> Result<Vec<StoredObjectRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect())
    }

    fn delete(&mut self, ids: &[RecordId]) -> Result<DeleteReport> {
        let wanted: HashSet<&RecordId> = ids.iter().collect();
        let mut report = DeleteReport::default();

        self.records.retain(|r| {
            if wanted.contains(&r.id) {
                report.deleted.push(r.id.clone());
                false
            } else {
                true
            }
        });

        let deleted: HashSet<&RecordId> = report.deleted.iter().collect();
        let missing: Vec<RecordId> = ids
            .iter()
            .filter(|id| !deleted.contains(id))
            .cloned()
            .collect();
        report.missing = missing;
        Ok(report)
    }
}
