//! Directory cursor - the path currently being browsed

use std::fmt;

use serde::{Deserialize, Serialize};

/// A directory path that always ends in `/`
///
/// The cursor is a plain value: every projection call receives it explicitly
/// and moving around produces a new cursor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DirectoryCursor(String);

impl DirectoryCursor {
    /// Create a cursor, appending the terminal slash if missing
    pub fn new(path: impl Into<String>) -> Self {
        let mut path = path.into();
        if !path.ends_with('/') {
            path.push('/');
        }
        Self(path)
    }

    /// Cursor positioned at the media root
    pub fn root(media_root: &str) -> Self {
        Self::new(media_root)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Descend into a child folder (appends `name + "/"`)
    pub fn enter(&self, folder: &str) -> Self {
        let folder = folder.trim_matches('/');
        if folder.is_empty() {
            return self.clone();
        }
        Self(format!("{}{}/", self.0, folder))
    }

    /// Parent directory, or `None` when the cursor has a single segment
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.0.strip_suffix('/').unwrap_or(&self.0);
        let idx = trimmed.rfind('/')?;
        Some(Self(trimmed[..=idx].to_string()))
    }

    /// Number of path segments (`media/docs/` has depth 2)
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Non-empty path segments
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Name of the innermost folder
    pub fn leaf(&self) -> &str {
        self.segments().last().unwrap_or("")
    }

    /// Whether the cursor lies at or below `root`
    pub fn is_within(&self, root: &DirectoryCursor) -> bool {
        self.0.starts_with(root.as_str())
    }
}

impl fmt::Display for DirectoryCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DirectoryCursor {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for DirectoryCursor {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<DirectoryCursor> for String {
    fn from(c: DirectoryCursor) -> Self {
        c.0
    }
}

impl AsRef<str> for DirectoryCursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
