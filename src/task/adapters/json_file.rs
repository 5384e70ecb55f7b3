//! JSON file repository.
//!
//! Tasks are stored as a pretty-printed JSON array. Reads load the whole
//! file; writes go to a sibling temporary file that is synced and then
//! renamed over the original.

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::{debug, warn};

use crate::task::{
    domain::{StorageError, Task},
    ports::{TaskRepository, TaskRepositoryResult},
};

/// File name of the store when no path is configured.
pub const DEFAULT_FILE_NAME: &str = "tasks.json";

/// Task repository backed by a JSON file.
#[derive(Debug)]
pub struct JsonFileTaskRepository {
    dir: Dir,
    file_name: String,
    path: Utf8PathBuf,
}

impl JsonFileTaskRepository {
    /// Opens the repository at `path`, creating missing parent directories
    /// and an empty file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when `path` names a directory, or when the
    /// parent directory or the file cannot be created.
    pub fn open(path: impl AsRef<Utf8Path>) -> TaskRepositoryResult<Self> {
        let requested = path.as_ref();
        let Some(file_name) = requested.file_name().map(str::to_owned) else {
            return Err(directory_error(requested));
        };
        let parent = match requested.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(|err| {
            StorageError::from_source(format!("cannot create directory {parent}"), err)
        })?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
            StorageError::from_source(format!("cannot open directory {parent}"), err)
        })?;

        let repository = Self {
            dir,
            path: parent.join(&file_name),
            file_name,
        };
        repository.ensure_file()?;
        debug!(path = %repository.path, "opened task file");
        Ok(repository)
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn ensure_file(&self) -> TaskRepositoryResult<()> {
        match self.dir.metadata(&self.file_name) {
            Ok(metadata) if metadata.is_dir() => Err(directory_error(&self.path)),
            Ok(_) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                self.dir.write(&self.file_name, "").map_err(|write_err| {
                    StorageError::from_source(format!("cannot create {}", self.path), write_err)
                })
            }
            Err(err) => Err(StorageError::from_source(
                format!("cannot inspect {}", self.path),
                err,
            )),
        }
    }

    fn temp_file_name(&self) -> String {
        format!(".{}.{}.tmp", self.file_name, std::process::id())
    }

    fn write_temp(&self, temp_name: &str, contents: &[u8]) -> io::Result<()> {
        let mut file = self.dir.create(temp_name)?;
        file.write_all(contents)?;
        file.sync_all()
    }

    fn discard_temp(&self, temp_name: &str) {
        if let Err(err) = self.dir.remove_file(temp_name) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(path = %self.path, error = %err, "failed to remove temporary task file");
            }
        }
    }
}

impl TaskRepository for JsonFileTaskRepository {
    fn load(&self) -> TaskRepositoryResult<Vec<Task>> {
        let contents = self.dir.read_to_string(&self.file_name).map_err(|err| {
            StorageError::from_source(format!("cannot read {}", self.path), err)
        })?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Option<Vec<Task>> = serde_json::from_str(&contents).map_err(|err| {
            StorageError::from_source(format!("corrupted JSON in {}", self.path), err)
        })?;
        let loaded = tasks.unwrap_or_default();
        debug!(path = %self.path, count = loaded.len(), "loaded tasks");
        Ok(loaded)
    }

    fn save(&self, tasks: &[Task]) -> TaskRepositoryResult<()> {
        let mut contents = serde_json::to_vec_pretty(tasks)
            .map_err(|err| StorageError::from_source("cannot serialise tasks", err))?;
        contents.push(b'\n');

        let temp_name = self.temp_file_name();
        if let Err(err) = self.write_temp(&temp_name, &contents) {
            self.discard_temp(&temp_name);
            return Err(StorageError::from_source(
                format!("cannot write {}", self.path),
                err,
            ));
        }

        if let Err(err) = self.dir.rename(&temp_name, &self.dir, &self.file_name) {
            self.discard_temp(&temp_name);
            return Err(StorageError::from_source(
                format!("cannot replace {}", self.path),
                err,
            ));
        }

        debug!(path = %self.path, count = tasks.len(), "saved tasks");
        Ok(())
    }
}

fn directory_error(path: &Utf8Path) -> StorageError {
    StorageError::new(format!("tasks path {path} is a directory, expected a file"))
}
