//! End-to-end tests for the mtree binary

mod browse_cli;
mod cli_basic;
mod delete_cli;
mod view_cli;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Sample listing used across the CLI tests
pub const LISTING: &str = r#"[
  { "id": "a", "name": "a.png", "location": "media/a.png", "mimeType": "image/png", "updatedAt": "2024-03-01T10:00:00Z" },
  { "id": "b", "name": "b.pdf", "location": "media/docs/b.pdf", "updatedAt": "2024-03-05T10:00:00Z" },
  { "id": "c", "name": "c.txt", "location": "media/docs/sub/c.txt", "updatedAt": "2024-03-10T10:00:00Z",
    "owner": { "id": "u1", "displayName": "Dana" } },
  { "id": "d", "name": "song", "location": "media/music/song", "mimeType": "audio/mpeg", "updatedAt": "2024-03-12T10:00:00Z" },
  { "id": "p", "name": ".emptyFolderPlaceholder", "location": "media/empty/.emptyFolderPlaceholder", "updatedAt": "2024-03-12T10:00:00Z" },
  { "id": "x", "name": "stray.png", "location": "elsewhere/stray.png", "updatedAt": "2024-03-12T10:00:00Z" }
]"#;

/// Temp workspace holding a listing file and an empty config home
pub struct Fixture {
    pub dir: TempDir,
    pub listing: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_listing(LISTING)
    }

    pub fn with_listing(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let listing = dir.path().join("records.json");
        fs::write(&listing, content).unwrap();
        Self { dir, listing }
    }

    /// mtree isolated from the user's config file
    pub fn mtree(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mtree");
        cmd.env("XDG_CONFIG_HOME", self.dir.path().join("config"))
            .env("HOME", self.dir.path())
            .env_remove("MTREE_LOG");
        cmd
    }

    pub fn write_config(&self, content: &str) {
        let dir = self.dir.path().join("config").join("mediatree");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), content).unwrap();
    }
}
