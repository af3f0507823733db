//! File manager - composes projection, breadcrumbs, views and deletion
//!
//! The manager holds settings only. Records and the cursor are passed into
//! every call and nothing is retained once a call returns.

use serde::Serialize;

use super::config_file::{ConfigFile, DEFAULT_MEDIA_ROOT, DEFAULT_PAGE_SIZE};
use crate::action::{plan_deletion, DeletionPlan, DeletionTarget};
use crate::classify::{classify_record, FileKind};
use crate::core::{DirectoryCursor, StoredObjectRecord};
use crate::error::{MediaTreeError, Result};
use crate::store::{DeleteReport, ListQuery, RecordStore};
use crate::tree::{
    breadcrumbs_under_root, project, Breadcrumb, VirtualEntry, DEFAULT_HOME_LABEL,
};
use crate::view::{
    filter_view, paginate, paginate_page, Page, ViewKind, ViewOptions, ViewQuery,
    DEFAULT_DASHBOARD_LIMIT, DEFAULT_HIDDEN_SENTINEL, DEFAULT_RECENT_LIMIT,
};

/// Resolved settings for a file manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub media_root: DirectoryCursor,
    pub hidden_sentinel: String,
    pub home_label: String,
    pub recent_limit: usize,
    pub dashboard_limit: usize,
    pub page_size: usize,
    pub search_owner: bool,
    pub allow_root_delete: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            media_root: DirectoryCursor::root(DEFAULT_MEDIA_ROOT),
            hidden_sentinel: DEFAULT_HIDDEN_SENTINEL.to_string(),
            home_label: DEFAULT_HOME_LABEL.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            dashboard_limit: DEFAULT_DASHBOARD_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            search_owner: false,
            allow_root_delete: false,
        }
    }
}

impl From<&ConfigFile> for Settings {
    fn from(config: &ConfigFile) -> Self {
        Self {
            media_root: DirectoryCursor::root(&config.media.root),
            hidden_sentinel: config.media.hidden_sentinel.clone(),
            home_label: config.media.home_label.clone(),
            recent_limit: config.views.recent_limit,
            dashboard_limit: config.views.dashboard_limit,
            page_size: config.views.page_size,
            search_owner: config.views.search_owner,
            allow_root_delete: config.media.allow_root_delete,
        }
    }
}

impl Settings {
    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            hidden_sentinel: self.hidden_sentinel.clone(),
            recent_limit: self.recent_limit,
            match_owner: self.search_owner,
        }
    }
}

/// One directory level ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<'a> {
    pub cursor: DirectoryCursor,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub entries: Vec<VirtualEntry<'a>>,
}

impl Listing<'_> {
    pub fn folder_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_folder()).count()
    }

    pub fn file_count(&self) -> usize {
        self.entries.len() - self.folder_count()
    }
}

/// Orchestrates the virtual file system projection
#[derive(Debug, Clone, Default)]
pub struct FileManager {
    settings: Settings,
}

impl FileManager {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Cursor positioned at the media root
    pub fn root_cursor(&self) -> DirectoryCursor {
        self.settings.media_root.clone()
    }

    /// Whether a record's location lies outside the media root (or is the root)
    pub fn is_malformed(&self, record: &StoredObjectRecord) -> bool {
        let root = self.settings.media_root.as_str();
        !record.location.starts_with(root) || record.location == root
    }

    /// Records eligible for browsing: well-formed and not hidden
    pub fn sanitize<'a>(&self, records: &'a [StoredObjectRecord]) -> Vec<&'a StoredObjectRecord> {
        let opts = self.settings.view_options();
        let mut malformed = 0usize;
        let visible: Vec<_> = records
            .iter()
            .filter(|r| {
                if self.is_malformed(r) {
                    malformed += 1;
                    false
                } else {
                    !opts.is_hidden(r)
                }
            })
            .collect();
        if malformed > 0 {
            tracing::debug!(
                malformed,
                root = %self.settings.media_root,
                "skipped records outside the media root"
            );
        }
        visible
    }

    // =========================================================================
    // Browsing
    // =========================================================================

    /// List one directory level with its breadcrumbs
    pub fn browse<'a>(
        &self,
        records: &'a [StoredObjectRecord],
        cursor: &DirectoryCursor,
    ) -> Listing<'a> {
        Listing {
            cursor: cursor.clone(),
            breadcrumbs: self.breadcrumbs(cursor),
            entries: project(self.sanitize(records), cursor),
        }
    }

    /// Breadcrumbs with the whole media root as the home crumb
    pub fn breadcrumbs(&self, cursor: &DirectoryCursor) -> Vec<Breadcrumb> {
        breadcrumbs_under_root(cursor, &self.settings.media_root, &self.settings.home_label)
    }

    /// Descend into a child folder
    pub fn enter(&self, cursor: &DirectoryCursor, folder: &str) -> DirectoryCursor {
        cursor.enter(folder)
    }

    /// Jump to a breadcrumb
    pub fn navigate(&self, crumb: &Breadcrumb) -> DirectoryCursor {
        crumb.navigate_to.clone()
    }

    /// Go one level up, never above the media root
    pub fn up(&self, cursor: &DirectoryCursor) -> DirectoryCursor {
        match cursor.parent() {
            Some(parent) if parent.is_within(&self.settings.media_root) => parent,
            _ => self.root_cursor(),
        }
    }

    pub fn classify(&self, record: &StoredObjectRecord) -> FileKind {
        classify_record(record)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Records matching every predicate of the query
    pub fn view<'a>(
        &self,
        records: &'a [StoredObjectRecord],
        query: &ViewQuery,
    ) -> Vec<&'a StoredObjectRecord> {
        query.apply(self.sanitize(records), &self.settings.view_options())
    }

    /// Records of a single named view
    pub fn filter_view<'a>(
        &self,
        records: &'a [StoredObjectRecord],
        view: &ViewKind,
    ) -> Vec<&'a StoredObjectRecord> {
        filter_view(self.sanitize(records), view, &self.settings.view_options())
    }

    pub fn recent<'a>(&self, records: &'a [StoredObjectRecord]) -> Vec<&'a StoredObjectRecord> {
        self.filter_view(records, &ViewKind::Recent)
    }

    /// Short recent listing for the dashboard widget
    pub fn dashboard<'a>(&self, records: &'a [StoredObjectRecord]) -> Vec<&'a StoredObjectRecord> {
        self.view(records, &ViewQuery::new().limit(self.settings.dashboard_limit))
    }

    pub fn page<T: Clone>(&self, items: &[T], offset: usize, limit: usize) -> Page<T> {
        paginate(items, offset, limit)
    }

    /// 1-based page using the configured page size
    pub fn page_number<T: Clone>(&self, items: &[T], page: usize) -> Page<T> {
        paginate_page(items, page, self.settings.page_size)
    }

    // =========================================================================
    // Deletion
    // =========================================================================

    pub fn plan_deletion(
        &self,
        records: &[StoredObjectRecord],
        target: &DeletionTarget,
    ) -> DeletionPlan {
        plan_deletion(records, target)
    }

    /// Plan deleting everything under the cursor
    ///
    /// The media root itself is refused unless `allow_root_delete` is set.
    pub fn plan_folder_deletion(
        &self,
        records: &[StoredObjectRecord],
        cursor: &DirectoryCursor,
    ) -> Result<DeletionPlan> {
        let root = &self.settings.media_root;
        if !self.settings.allow_root_delete && root.is_within(cursor) {
            return Err(MediaTreeError::RootDeletion(cursor.to_string()));
        }
        Ok(plan_deletion(
            records,
            &DeletionTarget::FolderPrefix(cursor.as_str().to_string()),
        ))
    }

    // =========================================================================
    // Record store
    // =========================================================================

    /// Fetch a fresh snapshot, pushing search/date predicates down to the store
    ///
    /// The pushed-down search uses the same owner matching as the views.
    pub fn refresh<S: RecordStore>(
        &self,
        store: &S,
        query: &ViewQuery,
    ) -> Result<Vec<StoredObjectRecord>> {
        let list_query = ListQuery {
            match_owner: self.settings.search_owner,
            ..ListQuery::from(query)
        };
        store.list(&list_query)
    }

    /// Hand a deletion plan to the store
    pub fn execute_deletion<S: RecordStore>(
        &self,
        store: &mut S,
        plan: &DeletionPlan,
    ) -> Result<DeleteReport> {
        if plan.is_empty() {
            return Ok(DeleteReport::default());
        }
        let report = store.delete(&plan.ids)?;
        if !report.is_complete() {
            tracing::warn!(
                missing = report.missing.len(),
                "some planned records were not found in the store"
            );
        }
        Ok(report)
    }
}
