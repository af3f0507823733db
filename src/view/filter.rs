//! Named views over the flat record list
//!
//! Views are independent of the tree projection. Every view hides records
//! carrying the hidden sentinel first; active predicates combine with AND and
//! the recent cap is applied last, in arrival order.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::classify::{classify_record, Category};
use crate::core::StoredObjectRecord;
use crate::error::{MediaTreeError, Result};

/// Reserved name marking placeholder objects that never show up in views
pub const DEFAULT_HIDDEN_SENTINEL: &str = ".emptyFolderPlaceholder";

/// Number of records in the "recent" listing
pub const DEFAULT_RECENT_LIMIT: usize = 20;

/// Number of records in the dashboard widget
pub const DEFAULT_DASHBOARD_LIMIT: usize = 5;

/// Inclusive date range over `updated_at`; either bound may be open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.from.is_none_or(|from| at >= from) && self.to.is_none_or(|to| at <= to)
    }

    pub fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Parse a date bound given as RFC 3339 or `YYYY-MM-DD`
///
/// A bare date expands to the start of the day, or to its last nanosecond
/// when `end_of_day` is set, so a `to` bound covers the whole day.
pub fn parse_date_bound(input: &str, end_of_day: bool) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| {
        MediaTreeError::invalid(format!(
            "expected YYYY-MM-DD or RFC 3339 timestamp, got '{}'",
            input
        ))
    })?;
    let time = if end_of_day {
        NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
    } else {
        NaiveTime::from_hms_opt(0, 0, 0)
    }
    .ok_or_else(|| MediaTreeError::invalid("invalid time of day"))?;
    Ok(date.and_time(time).and_utc())
}

/// A single top-level view selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewKind {
    Recent,
    ByCategory(Category),
    Search(String),
    DateRange { from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>> },
}

/// Options shared by all views
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Records whose name or location contains this are hidden
    pub hidden_sentinel: String,
    /// Cap for the recent view
    pub recent_limit: usize,
    /// Also search the owner's display name (admin/bulk view)
    pub match_owner: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            hidden_sentinel: DEFAULT_HIDDEN_SENTINEL.to_string(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            match_owner: false,
        }
    }
}

impl ViewOptions {
    /// Whether a record carries the hidden sentinel
    pub fn is_hidden(&self, record: &StoredObjectRecord) -> bool {
        !self.hidden_sentinel.is_empty()
            && (record.name.contains(&self.hidden_sentinel)
                || record.location.contains(&self.hidden_sentinel))
    }
}

/// AND-composition of view predicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub category: Option<Category>,
    pub search: Option<String>,
    pub date_range: Option<DateRange>,
    /// Truncate to the first N matches in arrival order
    pub limit: Option<usize>,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query equivalent to a single view selector
    pub fn from_kind(kind: &ViewKind, opts: &ViewOptions) -> Self {
        match kind {
            ViewKind::Recent => Self::new().limit(opts.recent_limit),
            ViewKind::ByCategory(category) => Self::new().category(*category),
            ViewKind::Search(term) => Self::new().search(term.clone()),
            ViewKind::DateRange { from, to } => Self::new().date_range(DateRange::new(*from, *to)),
        }
    }

    /// Whether a visible record satisfies every active predicate
    pub fn matches(&self, record: &StoredObjectRecord, opts: &ViewOptions) -> bool {
        if let Some(category) = self.category {
            if !matches_category(record, category) {
                return false;
            }
        }
        if let Some(term) = &self.search {
            if !matches_search(record, term, opts.match_owner) {
                return false;
            }
        }
        if let Some(range) = &self.date_range {
            if !range.contains(record.updated_at) {
                return false;
            }
        }
        true
    }

    /// Apply the query to a record list
    pub fn apply<'a, I>(&self, records: I, opts: &ViewOptions) -> Vec<&'a StoredObjectRecord>
    where
        I: IntoIterator<Item = &'a StoredObjectRecord>,
    {
        let matching = records
            .into_iter()
            .filter(|r| !opts.is_hidden(r))
            .filter(|r| self.matches(r, opts));
        match self.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        }
    }
}

/// Category membership; "document" is everything that is not media
pub fn matches_category(record: &StoredObjectRecord, category: Category) -> bool {
    let actual = classify_record(record).category();
    match category {
        Category::Document => !actual.is_media(),
        other => actual == other,
    }
}

/// Case-insensitive substring search on the name (and owner, if enabled)
pub fn matches_search(record: &StoredObjectRecord, term: &str, match_owner: bool) -> bool {
    // Blank terms match everything; otherwise the term is used as typed
    if term.trim().is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    if record.name.to_lowercase().contains(&term) {
        return true;
    }
    match_owner
        && record
            .owner_name()
            .is_some_and(|owner| owner.to_lowercase().contains(&term))
}

/// Derive a single named view over the records
pub fn filter_view<'a, I>(
    records: I,
    view: &ViewKind,
    opts: &ViewOptions,
) -> Vec<&'a StoredObjectRecord>
where
    I: IntoIterator<Item = &'a StoredObjectRecord>,
{
    ViewQuery::from_kind(view, opts).apply(records, opts)
}
