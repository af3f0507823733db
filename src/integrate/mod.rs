//! Integrate module - CLI output
//!
//! Provides the printable forms of the core's results:
//! - Listing, view, breadcrumb, classification and deletion plan output
//!   (one item per line, or JSON)
//! - Tree mode: print the virtual folder tree below a cursor

pub mod output;
pub mod tree;

pub use output::{
    exit_code, write_breadcrumbs, write_kind, write_listing, write_plan, write_records,
    OutputFormat,
};
pub use tree::write_tree;
