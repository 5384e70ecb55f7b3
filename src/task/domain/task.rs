//! Task aggregate root.

use super::{TaskDescription, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One tracked unit of work.
///
/// The identifier and creation timestamp are fixed at construction. The
/// description and status change through the mutators below, each of which
/// refreshes `updated_at` when the stored value actually changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    description: TaskDescription,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a `todo` task whose timestamps are both the clock's current
    /// time.
    #[must_use]
    pub fn new(id: TaskId, description: TaskDescription, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            description,
            status: TaskStatus::Todo,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replaces the description.
    pub fn update_description(&mut self, description: TaskDescription, clock: &impl Clock) {
        if self.description == description {
            return;
        }
        self.description = description;
        self.touch(clock);
    }

    /// Moves the task to `status`.
    ///
    /// Every transition is permitted, including reopening a finished task.
    /// Setting the current status leaves the task untouched.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        if self.status == status {
            return;
        }
        self.status = status;
        self.touch(clock);
    }

    /// Moves the task to [`TaskStatus::InProgress`].
    pub fn mark_in_progress(&mut self, clock: &impl Clock) {
        self.set_status(TaskStatus::InProgress, clock);
    }

    /// Moves the task to [`TaskStatus::Done`]; repeated calls are no-ops.
    pub fn mark_done(&mut self, clock: &impl Clock) {
        self.set_status(TaskStatus::Done, clock);
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
