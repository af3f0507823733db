//! Configuration file loading and parsing
//!
//! Loads configuration from `~/.config/mediatree/config.toml`

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MediaTreeError, Result};
use crate::tree::DEFAULT_HOME_LABEL;
use crate::view::{DEFAULT_DASHBOARD_LIMIT, DEFAULT_HIDDEN_SENTINEL, DEFAULT_RECENT_LIMIT};

/// Default media root every storage location lives under
pub const DEFAULT_MEDIA_ROOT: &str = "media/";

/// Default page size for paginated views
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Main configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Media namespace settings
    pub media: MediaConfig,
    /// View settings
    pub views: ViewsConfig,
}

/// Media namespace settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Prefix every storage location starts with
    pub root: String,
    /// Reserved name hiding placeholder records from views
    pub hidden_sentinel: String,
    /// Label of the first breadcrumb
    pub home_label: String,
    /// Allow planning a deletion of the entire media root
    pub allow_root_delete: bool,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_MEDIA_ROOT.to_string(),
            hidden_sentinel: DEFAULT_HIDDEN_SENTINEL.to_string(),
            home_label: DEFAULT_HOME_LABEL.to_string(),
            allow_root_delete: false,
        }
    }
}

/// View-related settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Records in the recent listing
    pub recent_limit: usize,
    /// Records in the dashboard widget
    pub dashboard_limit: usize,
    /// Default page size
    pub page_size: usize,
    /// Also search owner display names
    pub search_owner: bool,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            dashboard_limit: DEFAULT_DASHBOARD_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
            search_owner: false,
        }
    }
}

impl ConfigFile {
    /// Get the config directory path (~/.config/mediatree)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mediatree"))
    }

    /// Get the config file path (~/.config/mediatree/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist or can't be parsed
    pub fn load() -> Self {
        Self::config_path()
            .filter(|path| path.exists())
            .and_then(|path| match Self::load_from(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!("Ignoring config file {:?}: {}", path, e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConfigFile =
            toml::from_str(&content).map_err(|e| MediaTreeError::config(e.to_string()))?;
        Ok(config)
    }
}
