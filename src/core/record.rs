//! Stored-object records supplied by the external record store

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque unique identifier of a stored object
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Uploading identity, opaque apart from an optional display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// A single stored object as listed by the record store
///
/// The core never mutates a record; `size_bytes`, `updated_at` and `owner`
/// are passed through to view models unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredObjectRecord {
    pub id: RecordId,
    /// Display name, may or may not carry an extension
    pub name: String,
    /// Forward-slash separated storage path rooted at the media root
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub size_bytes: u64,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
}

impl StoredObjectRecord {
    /// Create a record with no MIME hint, zero size and no owner
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        location: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            location: location.into(),
            mime_type: None,
            size_bytes: 0,
            updated_at,
            owner: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = size_bytes;
        self
    }

    pub fn with_owner(mut self, owner: Owner) -> Self {
        self.owner = Some(owner);
        self
    }

    /// MIME hint, empty when absent
    pub fn mime(&self) -> &str {
        self.mime_type.as_deref().unwrap_or("")
    }

    /// Last segment of the storage location
    pub fn file_name(&self) -> &str {
        self.location
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
    }

    /// Owner display name, if any
    pub fn owner_name(&self) -> Option<&str> {
        self.owner.as_ref().and_then(|o| o.display_name.as_deref())
    }
}
