//! Record store - the list/delete collaborator the core is driven by
//!
//! The projection itself never touches storage. A store hands out a flat
//! snapshot of records and executes deletion plans.

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use serde::Serialize;

use crate::core::{RecordId, StoredObjectRecord};
use crate::error::Result;
use crate::view::{DateRange, ViewOptions, ViewQuery};

/// Predicates a store may push down into its own query layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub date_range: Option<DateRange>,
    /// Search also matches the owner's display name
    pub match_owner: bool,
}

impl ListQuery {
    /// Whether a record passes the pushed-down predicates
    ///
    /// Same semantics as the corresponding views, minus hidden-record
    /// filtering which stays with the views.
    pub fn matches(&self, record: &StoredObjectRecord) -> bool {
        let query = ViewQuery {
            search: self.search.clone(),
            date_range: self.date_range,
            ..ViewQuery::default()
        };
        let opts = ViewOptions {
            hidden_sentinel: String::new(),
            match_owner: self.match_owner,
            ..ViewOptions::default()
        };
        query.matches(record, &opts)
    }
}

impl From<&ViewQuery> for ListQuery {
    fn from(query: &ViewQuery) -> Self {
        Self {
            search: query.search.clone(),
            date_range: query.date_range,
            match_owner: false,
        }
    }
}

/// Outcome of a delete request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteReport {
    pub deleted: Vec<RecordId>,
    /// Requested ids the store did not hold
    pub missing: Vec<RecordId>,
}

impl DeleteReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// External CRUD/storage collaborator
pub trait RecordStore {
    /// Flat listing, optionally pre-filtered
    fn list(&self, query: &ListQuery) -> Result<Vec<StoredObjectRecord>>;

    /// Remove the given records
    fn delete(&mut self, ids: &[RecordId]) -> Result<DeleteReport>;
}
