//! Offset/limit pagination over any filtered list

use serde::Serialize;

/// One page of a larger list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub offset: usize,
    pub limit: usize,
    /// Length of the full list
    pub total: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.limit > 0 && self.offset.saturating_add(self.limit) < self.total
    }

    pub fn has_previous(&self) -> bool {
        self.offset > 0 && self.total > 0
    }

    /// Number of pages of size `limit` in the full list
    pub fn page_count(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// 1-based page number of this page
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            0
        } else {
            self.offset / self.limit + 1
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            total: self.total,
        }
    }
}

/// Slice `items[offset..offset + limit]`, clamped to the list
pub fn paginate<T: Clone>(items: &[T], offset: usize, limit: usize) -> Page<T> {
    let start = offset.min(items.len());
    let end = start.saturating_add(limit).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        offset,
        limit,
        total: items.len(),
    }
}

/// Page by 1-based page number; page 0 is treated as page 1
pub fn paginate_page<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let offset = page.max(1).saturating_sub(1).saturating_mul(per_page);
    paginate(items, offset, per_page)
}
