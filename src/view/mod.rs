//! View module - filtered views and pagination over the flat record list

pub mod filter;
pub mod paginate;

pub use filter::{
    filter_view, matches_category, matches_search, parse_date_bound, DateRange, ViewKind,
    ViewOptions, ViewQuery, DEFAULT_DASHBOARD_LIMIT, DEFAULT_HIDDEN_SENTINEL,
    DEFAULT_RECENT_LIMIT,
};
pub use paginate::{paginate, paginate_page, Page};
