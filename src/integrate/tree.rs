//! Tree output mode for CLI integration
//!
//! Prints the virtual folder tree below a cursor, expanding folders by
//! re-projecting the same record snapshot one level at a time.

use std::io::{self, Write};

use crate::core::{DirectoryCursor, StoredObjectRecord};
use crate::tree::{project, VirtualEntry};

/// Write the virtual tree below `cursor`
///
/// # Arguments
/// * `records` - Sanitized record snapshot
/// * `cursor` - Directory to start from (printed as the first line)
/// * `max_depth` - Maximum depth to descend (None = unlimited)
pub fn write_tree<W: Write>(
    out: &mut W,
    records: &[&StoredObjectRecord],
    cursor: &DirectoryCursor,
    max_depth: Option<usize>,
) -> io::Result<()> {
    writeln!(out, "{}", cursor)?;
    write_tree_recursive(out, records, cursor, "", max_depth, 0)
}

fn write_tree_recursive<W: Write>(
    out: &mut W,
    records: &[&StoredObjectRecord],
    cursor: &DirectoryCursor,
    prefix: &str,
    max_depth: Option<usize>,
    current_depth: usize,
) -> io::Result<()> {
    if let Some(max) = max_depth {
        if current_depth >= max {
            return Ok(());
        }
    }

    // Only records under this folder matter further down
    let below: Vec<&StoredObjectRecord> = records
        .iter()
        .copied()
        .filter(|r| r.location.starts_with(cursor.as_str()))
        .collect();
    let entries = project(below.iter().copied(), cursor);

    let count = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };

        match entry {
            VirtualEntry::Folder { name } => {
                writeln!(out, "{}{}{}/", prefix, connector, name)?;
                let new_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                write_tree_recursive(
                    out,
                    &below,
                    &cursor.enter(name),
                    &new_prefix,
                    max_depth,
                    current_depth + 1,
                )?;
            }
            VirtualEntry::File { name, .. } => {
                writeln!(out, "{}{}{}", prefix, connector, name)?;
            }
        }
    }

    Ok(())
}
