//! Tree module - virtual folder tree projection and navigation

pub mod breadcrumb;
pub mod entry;
pub mod projector;

pub use breadcrumb::{
    breadcrumbs, breadcrumbs_under_root, breadcrumbs_with_home, Breadcrumb, DEFAULT_HOME_LABEL,
};
pub use entry::VirtualEntry;
pub use projector::{child_folders, place, project, remainder, Placement};
