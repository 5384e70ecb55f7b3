//! Service layer for task creation, modification, and listing.

use crate::task::{
    domain::{NotFoundError, StorageError, Task, TaskDescription, TaskError, TaskId, TaskStatus},
    ports::TaskRepository,
};
use mockable::Clock;
use std::sync::Arc;
use tracing::{debug, info};

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskError>;

/// Task use-case orchestration.
///
/// Every operation loads the whole collection, applies one change, and
/// saves the collection back. Input is validated before storage is touched.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates a `todo` task with the next free identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Validation`] for a blank description and
    /// [`TaskError::Storage`] when loading or saving fails or when no
    /// identifier is left above the highest stored one.
    pub fn add(&self, description: impl Into<String>) -> TaskServiceResult<Task> {
        let validated = TaskDescription::new(description)?;
        let mut tasks = self.repository.load()?;
        let task = Task::new(next_id(&tasks)?, validated, &*self.clock);
        tasks.push(task.clone());
        self.repository.save(&tasks)?;
        info!(task_id = %task.id(), "task added");
        Ok(task)
    }

    /// Replaces the description of the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Validation`] for a blank description,
    /// [`TaskError::NotFound`] when no task has `id`, and
    /// [`TaskError::Storage`] when loading or saving fails.
    pub fn update(&self, id: TaskId, description: impl Into<String>) -> TaskServiceResult<Task> {
        let validated = TaskDescription::new(description)?;
        let clock = &*self.clock;
        self.modify(id, |task| task.update_description(validated, clock))
    }

    /// Moves the task with `id` to `status`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] when no task has `id` and
    /// [`TaskError::Storage`] when loading or saving fails.
    pub fn set_status(&self, id: TaskId, status: TaskStatus) -> TaskServiceResult<Task> {
        let clock = &*self.clock;
        self.modify(id, |task| task.set_status(status, clock))
    }

    /// Moves the task with `id` to [`TaskStatus::InProgress`].
    ///
    /// # Errors
    ///
    /// See [`Self::set_status`].
    pub fn mark_in_progress(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.set_status(id, TaskStatus::InProgress)
    }

    /// Moves the task with `id` to [`TaskStatus::Done`].
    ///
    /// # Errors
    ///
    /// See [`Self::set_status`].
    pub fn mark_done(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.set_status(id, TaskStatus::Done)
    }

    /// Removes the task with `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] when no task has `id` and
    /// [`TaskError::Storage`] when loading or saving fails.
    pub fn delete(&self, id: TaskId) -> TaskServiceResult<Task> {
        let mut tasks = self.repository.load()?;
        let position = position_of(&tasks, id)?;
        let removed = tasks.remove(position);
        self.repository.save(&tasks)?;
        info!(task_id = %id, "task deleted");
        Ok(removed)
    }

    /// Returns the task with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] when no task has `id` and
    /// [`TaskError::Storage`] when loading fails.
    pub fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .load()?
            .into_iter()
            .find(|task| task.id() == id)
            .ok_or_else(|| not_found(id).into())
    }

    /// Returns tasks in ascending identifier order, optionally restricted to
    /// one status.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Storage`] when loading fails.
    pub fn list(&self, status: Option<TaskStatus>) -> TaskServiceResult<Vec<Task>> {
        let mut tasks: Vec<Task> = self
            .repository
            .load()?
            .into_iter()
            .filter(|task| status.is_none_or(|wanted| task.status() == wanted))
            .collect();
        tasks.sort_by_key(Task::id);
        debug!(count = tasks.len(), filter = ?status, "listed tasks");
        Ok(tasks)
    }

    fn modify(&self, id: TaskId, change: impl FnOnce(&mut Task)) -> TaskServiceResult<Task> {
        let mut tasks = self.repository.load()?;
        let task = tasks
            .iter_mut()
            .find(|candidate| candidate.id() == id)
            .ok_or_else(|| not_found(id))?;
        change(task);
        let updated = task.clone();
        self.repository.save(&tasks)?;
        info!(task_id = %id, status = %updated.status(), "task updated");
        Ok(updated)
    }
}

fn next_id(tasks: &[Task]) -> Result<TaskId, StorageError> {
    let Some(highest) = tasks.iter().map(Task::id).max() else {
        return Ok(TaskId::first());
    };
    highest
        .next()
        .ok_or_else(|| StorageError::new(format!("no task id available after {highest}")))
}

fn position_of(tasks: &[Task], id: TaskId) -> Result<usize, NotFoundError> {
    tasks
        .iter()
        .position(|task| task.id() == id)
        .ok_or_else(|| not_found(id))
}

fn not_found(id: TaskId) -> NotFoundError {
    debug!(task_id = %id, "task not found");
    NotFoundError::new("task not found")
}
