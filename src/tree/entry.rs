//! Virtual tree entry definition

use std::cmp::Ordering;

use serde::Serialize;

use crate::classify::FileKind;
use crate::core::StoredObjectRecord;

/// A single row at one level of the virtual tree
///
/// Entries borrow from the caller's record slice and live only as long as
/// the projection that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum VirtualEntry<'a> {
    /// A folder reconstructed from a shared path segment
    Folder { name: String },
    /// A record sitting directly in the current directory
    File {
        name: String,
        #[serde(rename = "fileKind")]
        file_kind: FileKind,
        record: &'a StoredObjectRecord,
    },
}

impl<'a> VirtualEntry<'a> {
    pub fn folder(name: impl Into<String>) -> Self {
        Self::Folder { name: name.into() }
    }

    pub fn file(name: impl Into<String>, file_kind: FileKind, record: &'a StoredObjectRecord) -> Self {
        Self::File {
            name: name.into(),
            file_kind,
            record,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name } | Self::File { name, .. } => name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Backing record (files only)
    pub fn record(&self) -> Option<&'a StoredObjectRecord> {
        match self {
            Self::Folder { .. } => None,
            Self::File { record, .. } => Some(*record),
        }
    }

    /// Sort key: trimmed, case-insensitive name
    fn sort_key(&self) -> String {
        self.name().trim().to_lowercase()
    }
}

/// Ordering for a directory listing: folders first, then case-insensitive by
/// name, with raw name and record id as tie breakers so output is stable.
pub fn listing_order(a: &VirtualEntry<'_>, b: &VirtualEntry<'_>) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .sort_key()
            .cmp(&b.sort_key())
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| {
                let a_id = a.record().map(|r| r.id.as_str());
                let b_id = b.record().map(|r| r.id.as_str());
                a_id.cmp(&b_id)
            }),
    }
}
