//! Application module
//!
//! This module contains the file manager orchestrator, configuration
//! (config file and CLI arguments) and command execution for mtree.

mod config;
mod config_file;
mod manager;
mod run;

pub use config::{help_text, Command, Config, ViewArgs};
pub use config_file::{ConfigFile, MediaConfig, ViewsConfig, DEFAULT_MEDIA_ROOT, DEFAULT_PAGE_SIZE};
pub use manager::{FileManager, Listing, Settings};
pub use run::run;
