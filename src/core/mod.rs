//! Core module - stored records and the directory cursor

pub mod cursor;
pub mod record;

pub use cursor::DirectoryCursor;
pub use record::{Owner, RecordId, StoredObjectRecord};
