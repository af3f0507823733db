//! Deletion planning (explicit ids or a whole folder subtree)
//!
//! Planning is pure: the record store executes the plan and reports partial
//! failures on its own.

use serde::{Deserialize, Serialize};

use crate::core::{RecordId, StoredObjectRecord};

/// What the caller asked to delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeletionTarget {
    /// Exactly these records
    RecordIds(Vec<RecordId>),
    /// Every record stored under this prefix
    FolderPrefix(String),
}

/// Ids the record store should remove
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionPlan {
    pub ids: Vec<RecordId>,
}

impl DeletionPlan {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }
}

/// Compute the ids affected by a deletion target
///
/// Explicit ids pass through untouched and unverified. A folder prefix covers
/// the whole subtree, however many virtual levels deep, hidden placeholders
/// included.
pub fn plan_deletion(records: &[StoredObjectRecord], target: &DeletionTarget) -> DeletionPlan {
    let ids = match target {
        DeletionTarget::RecordIds(ids) => ids.clone(),
        DeletionTarget::FolderPrefix(prefix) => records
            .iter()
            .filter(|r| r.location.starts_with(prefix.as_str()))
            .map(|r| r.id.clone())
            .collect(),
    };
    tracing::debug!(count = ids.len(), "planned deletion");
    DeletionPlan { ids }
}
