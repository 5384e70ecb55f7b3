//! Shared scratch-directory helpers for integration tests.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Temporary directory holding a task file and an empty config file.
pub struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    /// Creates a fresh scratch directory.
    pub fn new() -> Result<Self, eyre::Report> {
        let dir = tempfile::tempdir()?;
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .map_err(|path| eyre::eyre!("non UTF-8 temp dir: {}", path.display()))?;
        std::fs::write(root.join("config.yml"), "")?;
        Ok(Self { _dir: dir, root })
    }

    /// Returns the scratch directory.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the task file path inside the scratch directory.
    pub fn tasks_path(&self) -> Utf8PathBuf {
        self.root.join("tasks.json")
    }

    /// Returns the empty config file path inside the scratch directory.
    pub fn config_path(&self) -> Utf8PathBuf {
        self.root.join("config.yml")
    }
}
