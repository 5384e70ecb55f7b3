//! Repository port for task persistence.

use crate::task::domain::{StorageError, Task};

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, StorageError>;

/// Whole-collection task persistence contract.
///
/// The tracker reads every task, changes the collection in memory, and
/// writes it back. Implementations report every failure as a
/// [`StorageError`].
pub trait TaskRepository {
    /// Loads every stored task in storage order.
    ///
    /// An empty store yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store cannot be read or its
    /// contents cannot be decoded.
    fn load(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Replaces the stored collection with `tasks`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the collection cannot be written.
    fn save(&self, tasks: &[Task]) -> TaskRepositoryResult<()>;
}
