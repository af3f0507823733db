//! File classification from name, location and MIME hints
//!
//! Storage backends are inconsistent about MIME types while names and
//! extensions are reliable, so the extension always wins over the declared
//! MIME type. Classification is total: unknown input resolves to `Other`.

mod table;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use table::{kind_by_extension, kind_by_mime};

use crate::core::StoredObjectRecord;

/// Fine-grained file kind as produced by the lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Audio,
    Video,
    Csv,
    Excel,
    Pdf,
    PowerPoint,
    Word,
    Zip,
    Other,
}

impl FileKind {
    /// Coarse category this kind belongs to
    pub fn category(self) -> Category {
        match self {
            FileKind::Image => Category::Image,
            FileKind::Audio => Category::Audio,
            FileKind::Video => Category::Video,
            FileKind::Csv
            | FileKind::Excel
            | FileKind::Pdf
            | FileKind::PowerPoint
            | FileKind::Word => Category::Document,
            FileKind::Zip => Category::Archive,
            FileKind::Other => Category::Other,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FileKind::Image => "image",
            FileKind::Audio => "audio",
            FileKind::Video => "video",
            FileKind::Csv => "csv",
            FileKind::Excel => "excel",
            FileKind::Pdf => "pdf",
            FileKind::PowerPoint => "powerpoint",
            FileKind::Word => "word",
            FileKind::Zip => "zip",
            FileKind::Other => "other",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coarse file category used by the category views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Audio,
    Video,
    Document,
    Archive,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Image,
        Category::Audio,
        Category::Video,
        Category::Document,
        Category::Archive,
        Category::Other,
    ];

    /// Image, audio and video: the categories "document" is the complement of
    pub fn is_media(self) -> bool {
        matches!(self, Category::Image | Category::Audio | Category::Video)
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Image => "image",
            Category::Audio => "audio",
            Category::Video => "video",
            Category::Document => "document",
            Category::Archive => "archive",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" | "images" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            "video" | "videos" => Ok(Self::Video),
            "document" | "documents" | "doc" | "docs" => Ok(Self::Document),
            "archive" | "archives" => Ok(Self::Archive),
            "other" => Ok(Self::Other),
            _ => Err(()),
        }
    }
}

/// Lowercase extension of the last path segment, if it has one
///
/// A name that is only a leading dot plus text (`.gitkeep`) has no extension.
pub fn extension_of(path: &str) -> Option<String> {
    let file = path.rsplit('/').next().unwrap_or(path);
    let idx = file.rfind('.')?;
    if idx == 0 || idx + 1 == file.len() {
        return None;
    }
    Some(file[idx + 1..].to_lowercase())
}

/// Classify a file from its MIME hint, storage location and display name
pub fn classify(mime_type: &str, location: &str, name: &str) -> FileKind {
    let by_ext = extension_of(location)
        .or_else(|| extension_of(name))
        .and_then(|ext| kind_by_extension(&ext));

    by_ext
        .or_else(|| kind_by_mime(mime_type))
        .unwrap_or(FileKind::Other)
}

/// Classify a stored record
pub fn classify_record(record: &StoredObjectRecord) -> FileKind {
    classify(record.mime(), &record.location, &record.name)
}
