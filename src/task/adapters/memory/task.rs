//! In-memory repository for task service tests.

use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{StorageError, Task},
    ports::{TaskRepository, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Clones share the same backing collection, so a test can keep one handle
/// to inspect what a service saved through another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: Vec<Task>,
    save_count: usize,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `tasks`.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let state = InMemoryTaskState {
            tasks: tasks.into_iter().collect(),
            save_count: 0,
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Returns how many times [`TaskRepository::save`] has succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the state lock is poisoned.
    pub fn save_count(&self) -> TaskRepositoryResult<usize> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.save_count)
    }
}

fn lock_error(err: &impl std::fmt::Display) -> StorageError {
    StorageError::from_source(
        "in-memory task state is unavailable",
        std::io::Error::other(err.to_string()),
    )
}

impl TaskRepository for InMemoryTaskRepository {
    fn load(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| lock_error(&err))?;
        Ok(state.tasks.clone())
    }

    fn save(&self, tasks: &[Task]) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(|err| lock_error(&err))?;
        state.tasks = tasks.to_vec();
        state.save_count += 1;
        Ok(())
    }
}
