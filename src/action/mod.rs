//! Action module - deletion planning

pub mod delete;

pub use delete::{plan_deletion, DeletionPlan, DeletionTarget};
