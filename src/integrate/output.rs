//! Output of listings, views, breadcrumbs and deletion plans
//!
//! Every command prints either one item per line or a single JSON document.

use std::io::{self, Write};
use std::str::FromStr;

use serde::Serialize;

use crate::action::DeletionPlan;
use crate::app::Listing;
use crate::classify::{classify_record, Category, FileKind};
use crate::core::StoredObjectRecord;
use crate::tree::{Breadcrumb, VirtualEntry};
use crate::view::Page;

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Command completed
/// - `ERROR` (2): Runtime error (unreadable listing, I/O error, etc.)
/// - `INVALID` (3): Invalid command-line arguments or option values
pub mod exit_code {
    /// Command completed
    pub const SUCCESS: i32 = 0;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, invalid format)
    pub const INVALID: i32 = 3;
}

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One item per line (default)
    #[default]
    Lines,
    /// Single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "line" => Ok(Self::Lines),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    writeln!(out)
}

/// Directory listing: folders get a trailing `/`
pub fn write_listing<W: Write>(
    out: &mut W,
    listing: &Listing<'_>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for entry in &listing.entries {
                match entry {
                    VirtualEntry::Folder { name } => writeln!(out, "{}/", name)?,
                    VirtualEntry::File { name, .. } => writeln!(out, "{}", name)?,
                }
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, listing),
    }
}

/// Record row as printed by views
#[derive(Serialize)]
struct RecordRow<'a> {
    #[serde(flatten)]
    record: &'a StoredObjectRecord,
    #[serde(rename = "fileKind")]
    file_kind: FileKind,
    category: Category,
}

/// One page of a view: `location<TAB>kind` per line
pub fn write_records<W: Write>(
    out: &mut W,
    page: &Page<&StoredObjectRecord>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for record in &page.items {
                writeln!(out, "{}\t{}", record.location, classify_record(record))?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let rows = Page {
                items: page
                    .items
                    .iter()
                    .map(|&record| {
                        let file_kind = classify_record(record);
                        RecordRow {
                            record,
                            file_kind,
                            category: file_kind.category(),
                        }
                    })
                    .collect::<Vec<_>>(),
                offset: page.offset,
                limit: page.limit,
                total: page.total,
            };
            write_json(out, &rows)
        }
    }
}

/// Breadcrumbs: `label<TAB>navigate_to` per line
pub fn write_breadcrumbs<W: Write>(
    out: &mut W,
    crumbs: &[Breadcrumb],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for crumb in crumbs {
                writeln!(out, "{}\t{}", crumb.label, crumb.navigate_to)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, crumbs),
    }
}

/// Deletion plan: one id per line
pub fn write_plan<W: Write>(
    out: &mut W,
    plan: &DeletionPlan,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for id in &plan.ids {
                writeln!(out, "{}", id)?;
            }
            Ok(())
        }
        OutputFormat::Json => write_json(out, plan),
    }
}

/// Classification result: `kind<TAB>category`
pub fn write_kind<W: Write>(out: &mut W, kind: FileKind, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Lines => writeln!(out, "{}\t{}", kind, kind.category()),
        OutputFormat::Json => write_json(
            out,
            &serde_json::json!({ "fileKind": kind, "category": kind.category() }),
        ),
    }
}
