//! Extension and MIME lookup tables
//!
//! The one authoritative table for file kinds. Both tree projection and view
//! filtering go through it.

use super::FileKind;

/// Look up a lowercase extension (without the dot)
pub fn kind_by_extension(ext: &str) -> Option<FileKind> {
    Some(match ext {
        // ==========================================================================
        // Media
        // ==========================================================================
        "aac" | "aiff" | "amr" | "flac" | "m4a" | "mid" | "midi" | "mp3" | "oga" | "ogg"
        | "opus" | "wav" | "weba" | "wma" => FileKind::Audio,

        "apng" | "avif" | "bmp" | "gif" | "heic" | "heif" | "ico" | "jfif" | "jpeg" | "jpg"
        | "png" | "svg" | "tif" | "tiff" | "webp" => FileKind::Image,

        "3gp" | "avi" | "flv" | "m4v" | "mkv" | "mov" | "mp4" | "mpeg" | "mpg" | "ogv"
        | "webm" | "wmv" => FileKind::Video,

        // ==========================================================================
        // Documents
        // ==========================================================================
        "csv" | "tsv" => FileKind::Csv,
        "ods" | "xls" | "xlsb" | "xlsm" | "xlsx" => FileKind::Excel,
        "pdf" => FileKind::Pdf,
        "key" | "odp" | "pps" | "ppsx" | "ppt" | "pptx" => FileKind::PowerPoint,
        "doc" | "docm" | "docx" | "odt" | "rtf" => FileKind::Word,

        // ==========================================================================
        // Archives
        // ==========================================================================
        "7z" | "bz2" | "gz" | "rar" | "tar" | "tgz" | "xz" | "zip" => FileKind::Zip,

        _ => return None,
    })
}

/// MIME substrings in match order, first hit wins
const MIME_NEEDLES: &[(&str, FileKind)] = &[
    ("image", FileKind::Image),
    ("video", FileKind::Video),
    ("audio", FileKind::Audio),
    ("zip", FileKind::Zip),
    ("csv", FileKind::Csv),
    ("pdf", FileKind::Pdf),
    ("word", FileKind::Word),
    ("powerpoint", FileKind::PowerPoint),
    ("excel", FileKind::Excel),
];

/// Substring match of a MIME hint against the kind names
pub fn kind_by_mime(mime: &str) -> Option<FileKind> {
    let mime = mime.trim().to_lowercase();
    if mime.is_empty() {
        return None;
    }
    MIME_NEEDLES
        .iter()
        .find(|(needle, _)| mime.contains(needle))
        .map(|(_, kind)| *kind)
}
