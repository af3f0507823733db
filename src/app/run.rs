//! Command execution

use std::io::Write;

use super::config::{help_text, Command, Config, ViewArgs};
use super::manager::FileManager;
use crate::action::DeletionTarget;
use crate::classify::classify;
use crate::core::{DirectoryCursor, StoredObjectRecord};
use crate::integrate::{
    write_breadcrumbs, write_kind, write_listing, write_plan, write_records, write_tree,
};
use crate::store::JsonStore;
use crate::view::paginate_page;

/// Run a parsed command, writing results to `out`
pub fn run<W: Write>(config: &Config, out: &mut W) -> anyhow::Result<()> {
    let manager = FileManager::new(config.settings.clone());
    let format = config.format;

    match &config.command {
        Command::Help => write!(out, "{}", help_text())?,
        Command::Version => writeln!(out, "mtree {}", env!("CARGO_PKG_VERSION"))?,
        Command::Ls { listing, cursor } => {
            let store = JsonStore::open(listing)?;
            let cursor = resolve_cursor(&manager, cursor.as_ref());
            let listing = manager.browse(store.records(), &cursor);
            write_listing(out, &listing, format)?;
        }
        Command::Tree {
            listing,
            cursor,
            depth,
        } => {
            let store = JsonStore::open(listing)?;
            let cursor = resolve_cursor(&manager, cursor.as_ref());
            let visible = manager.sanitize(store.records());
            write_tree(out, &visible, &cursor, *depth)?;
        }
        Command::Crumbs { cursor } => {
            write_breadcrumbs(out, &manager.breadcrumbs(cursor), format)?;
        }
        Command::View { listing, args } => {
            let store = JsonStore::open(listing)?;
            let records = select(&manager, store.records(), args);
            let per_page = args.per_page.unwrap_or(manager.settings().page_size);
            let page = paginate_page(&records, args.page, per_page);
            write_records(out, &page, format)?;
        }
        Command::Classify {
            mime,
            location,
            name,
        } => {
            write_kind(out, classify(mime, location, name), format)?;
        }
        Command::PlanDelete {
            listing,
            target,
            execute,
        } => {
            let mut store = JsonStore::open(listing)?;
            let plan = match target {
                // A folder target always names a whole directory
                DeletionTarget::FolderPrefix(prefix) => manager
                    .plan_folder_deletion(store.records(), &DirectoryCursor::new(prefix.as_str()))?,
                ids => manager.plan_deletion(store.records(), ids),
            };
            write_plan(out, &plan, format)?;
            if *execute {
                let report = manager.execute_deletion(&mut store, &plan)?;
                tracing::info!(
                    deleted = report.deleted.len(),
                    missing = report.missing.len(),
                    path = %store.path().display(),
                    "deletion executed"
                );
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn resolve_cursor(manager: &FileManager, cursor: Option<&DirectoryCursor>) -> DirectoryCursor {
    cursor.cloned().unwrap_or_else(|| manager.root_cursor())
}

fn select<'a>(
    manager: &FileManager,
    records: &'a [StoredObjectRecord],
    args: &ViewArgs,
) -> Vec<&'a StoredObjectRecord> {
    let mut query = args.query.clone();
    if args.recent && query.limit.is_none() {
        query.limit = Some(manager.settings().recent_limit);
    }
    manager.view(records, &query)
}
