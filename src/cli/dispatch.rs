//! Validates parsed commands and maps them onto task service operations.

use mockable::Clock;

use super::args::Command;
use crate::task::{
    domain::{Task, TaskDescription, TaskError, TaskId, TaskStatus, ValidationError},
    ports::TaskRepository,
    services::TaskService,
};

/// Result of a successfully executed command, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A task was created.
    Added(Task),
    /// A task's description was replaced.
    Updated(Task),
    /// A task was removed.
    Deleted(Task),
    /// A task's status was set.
    StatusChanged(Task),
    /// Tasks matching the requested filter, ascending by identifier.
    Listed(Vec<Task>),
}

/// A command whose identifiers, statuses, and descriptions have been
/// validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Create a task.
    Add {
        /// Description of the new task.
        description: TaskDescription,
    },
    /// Replace a task's description.
    Update {
        /// Task to change.
        id: TaskId,
        /// Replacement description.
        description: TaskDescription,
    },
    /// Remove a task.
    Delete {
        /// Task to remove.
        id: TaskId,
    },
    /// Set a task's status.
    SetStatus {
        /// Task to change.
        id: TaskId,
        /// Target status.
        status: TaskStatus,
    },
    /// List tasks, optionally restricted to one status.
    List {
        /// Status filter.
        status: Option<TaskStatus>,
    },
}

impl TryFrom<Command> for Request {
    type Error = ValidationError;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        let request = match command {
            Command::Add { description } => Self::Add {
                description: TaskDescription::new(description.join(" "))?,
            },
            Command::Update { id, description } => Self::Update {
                id: id.parse()?,
                description: TaskDescription::new(description.join(" "))?,
            },
            Command::Delete { id } => Self::Delete { id: id.parse()? },
            Command::MarkInProgress { id } => Self::SetStatus {
                id: id.parse()?,
                status: TaskStatus::InProgress,
            },
            Command::MarkDone { id } => Self::SetStatus {
                id: id.parse()?,
                status: TaskStatus::Done,
            },
            Command::Mark { id, status } => Self::SetStatus {
                id: id.parse()?,
                status: status.parse()?,
            },
            Command::List { status } => Self::List {
                status: status.as_deref().map(str::parse::<TaskStatus>).transpose()?,
            },
        };
        Ok(request)
    }
}

/// Executes a validated `request` against `service`.
///
/// # Errors
///
/// Propagates every [`TaskError`] raised by the service.
pub fn execute<R, C>(service: &TaskService<R, C>, request: Request) -> Result<Outcome, TaskError>
where
    R: TaskRepository,
    C: Clock,
{
    let outcome = match request {
        Request::Add { description } => Outcome::Added(service.add(description)?),
        Request::Update { id, description } => Outcome::Updated(service.update(id, description)?),
        Request::Delete { id } => Outcome::Deleted(service.delete(id)?),
        Request::SetStatus { id, status } => {
            Outcome::StatusChanged(service.set_status(id, status)?)
        }
        Request::List { status } => Outcome::Listed(service.list(status)?),
    };
    Ok(outcome)
}
