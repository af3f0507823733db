//! Tree projector - rebuilds one directory level from flat storage paths
//!
//! Nothing is persisted between calls: every listing is derived from the
//! record slice and the cursor it is given.

use std::collections::HashSet;

use super::entry::{listing_order, VirtualEntry};
use crate::classify::classify_record;
use crate::core::{DirectoryCursor, StoredObjectRecord};

/// Where a record lands relative to a cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement<'r> {
    /// Not under the cursor, or exactly the cursor itself
    Outside,
    /// Inside the named child folder
    InFolder(&'r str),
    /// Directly in the cursor directory
    Direct(&'r str),
}

/// Location with exactly one leading occurrence of the cursor removed
///
/// Only the leading occurrence is stripped, so a folder that repeats the
/// cursor text (`media/media/`) keeps its own segments.
pub fn remainder<'r>(location: &'r str, cursor: &str) -> Option<&'r str> {
    location
        .strip_prefix(cursor)
        .filter(|rest| !rest.is_empty())
}

/// Place a storage location relative to a cursor
pub fn place<'r>(location: &'r str, cursor: &str) -> Placement<'r> {
    let Some(rest) = remainder(location, cursor) else {
        return Placement::Outside;
    };

    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let Some(first) = segments.next() else {
        return Placement::Outside;
    };

    // A trailing slash marks a directory placeholder object
    if segments.next().is_some() || rest.ends_with('/') {
        Placement::InFolder(first)
    } else {
        Placement::Direct(first)
    }
}

/// Project the records into the entries of a single directory level
///
/// Folders are deduplicated by name; a folder and a file that share a name
/// are both listed.
pub fn project<'a, I>(records: I, cursor: &DirectoryCursor) -> Vec<VirtualEntry<'a>>
where
    I: IntoIterator<Item = &'a StoredObjectRecord>,
{
    let mut seen_folders: HashSet<&'a str> = HashSet::new();
    let mut entries = Vec::new();

    for record in records {
        match place(&record.location, cursor.as_str()) {
            Placement::Outside => {}
            Placement::InFolder(folder) => {
                if seen_folders.insert(folder) {
                    entries.push(VirtualEntry::folder(folder));
                }
            }
            Placement::Direct(file) => {
                entries.push(VirtualEntry::file(file, classify_record(record), record));
            }
        }
    }

    entries.sort_by(listing_order);
    entries
}

/// Child folder names at the cursor, in listing order
pub fn child_folders(records: &[StoredObjectRecord], cursor: &DirectoryCursor) -> Vec<String> {
    project(records, cursor)
        .into_iter()
        .filter(|e| e.is_folder())
        .map(|e| e.name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::FileKind;
    use chrono::Utc;

    fn rec(id: &str, location: &str) -> StoredObjectRecord {
        let name = location.rsplit('/').next().unwrap_or(location);
        StoredObjectRecord::new(id, name, location, Utc::now())
    }

    fn sample() -> Vec<StoredObjectRecord> {
        vec![
            rec("1", "media/a.png"),
            rec("2", "media/docs/b.pdf"),
            rec("3", "media/docs/sub/c.txt"),
        ]
    }

    fn names(entries: &[VirtualEntry<'_>]) -> Vec<(bool, String)> {
        entries
            .iter()
            .map(|e| (e.is_folder(), e.name().to_string()))
            .collect()
    }

    #[test]
    fn test_project_root() {
        let records = sample();
        let entries = project(&records, &DirectoryCursor::new("media/"));
        assert_eq!(
            names(&entries),
            vec![(true, "docs".to_string()), (false, "a.png".to_string())]
        );
    }

    #[test]
    fn test_project_subfolder() {
        let records = sample();
        let entries = project(&records, &DirectoryCursor::new("media/docs/"));
        assert_eq!(
            names(&entries),
            vec![(true, "sub".to_string()), (false, "b.pdf".to_string())]
        );
        match &entries[1] {
            VirtualEntry::File { file_kind, .. } => assert_eq!(*file_kind, FileKind::Pdf),
            other => panic!("expected file, got {:?}", other),
        }
    }

    #[test]
    fn test_folders_deduplicated() {
        let records = vec![
            rec("1", "media/docs/a.pdf"),
            rec("2", "media/docs/b.pdf"),
            rec("3", "media/docs/deep/c.pdf"),
        ];
        let entries = project(&records, &DirectoryCursor::new("media/"));
        assert_eq!(names(&entries), vec![(true, "docs".to_string())]);
    }

    #[test]
    fn test_folder_and_file_with_same_name_both_listed() {
        let records = vec![rec("1", "media/report"), rec("2", "media/report/q1.pdf")];
        let entries = project(&records, &DirectoryCursor::new("media/"));
        assert_eq!(
            names(&entries),
            vec![(true, "report".to_string()), (false, "report".to_string())]
        );
    }

    #[test]
    fn test_cursor_repeated_inside_path() {
        let records = vec![
            rec("1", "media/media/x.png"),
            rec("2", "media/media/media/y.png"),
        ];
        let entries = project(&records, &DirectoryCursor::new("media/media/"));
        assert_eq!(
            names(&entries),
            vec![(true, "media".to_string()), (false, "x.png".to_string())]
        );
    }

    #[test]
    fn test_location_equal_to_cursor_excluded() {
        let records = vec![rec("1", "media/docs/"), rec("2", "media/docs/a.pdf")];
        let entries = project(&records, &DirectoryCursor::new("media/docs/"));
        assert_eq!(names(&entries), vec![(false, "a.pdf".to_string())]);
    }

    #[test]
    fn test_placeholder_directory_is_folder() {
        let records = vec![rec("1", "media/empty/")];
        let entries = project(&records, &DirectoryCursor::new("media/"));
        assert_eq!(names(&entries), vec![(true, "empty".to_string())]);
    }

    #[test]
    fn test_malformed_locations_vanish() {
        let records = vec![rec("1", "uploads/a.png"), rec("2", "mediax/b.png")];
        assert!(project(&records, &DirectoryCursor::new("media/")).is_empty());
    }

    #[test]
    fn test_sort_case_insensitive() {
        let records = vec![
            rec("1", "media/beta.txt"),
            rec("2", "media/Alpha.txt"),
            rec("3", "media/zed/a.txt"),
            rec("4", "media/Apps/a.txt"),
        ];
        let entries = project(&records, &DirectoryCursor::new("media/"));
        assert_eq!(
            names(&entries),
            vec![
                (true, "Apps".to_string()),
                (true, "zed".to_string()),
                (false, "Alpha.txt".to_string()),
                (false, "beta.txt".to_string()),
            ]
        );
    }

    #[test]
    fn test_place() {
        assert_eq!(place("media/a.png", "media/"), Placement::Direct("a.png"));
        assert_eq!(place("media/d/a.png", "media/"), Placement::InFolder("d"));
        assert_eq!(place("media/", "media/"), Placement::Outside);
        assert_eq!(place("other/a.png", "media/"), Placement::Outside);
    }

    #[test]
    fn test_child_folders() {
        let records = sample();
        assert_eq!(
            child_folders(&records, &DirectoryCursor::new("media/")),
            vec!["docs".to_string()]
        );
    }
}
