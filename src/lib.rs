//! mediatree - browse a flat object-storage listing as a folder tree
//!
//! This crate projects a flat list of stored-object records (each with an
//! opaque storage path like `media/users/profile/avatar.jpg`) into a
//! navigable virtual folder tree. Nothing is persisted: every listing,
//! breadcrumb trail, view and deletion plan is derived from the snapshot
//! passed in.

pub mod action;
pub mod app;
pub mod classify;
pub mod core;
pub mod error;
pub mod integrate;
pub mod store;
pub mod tree;
pub mod view;

pub use error::{MediaTreeError, Result};
