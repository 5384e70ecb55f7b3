//! Task status values and the status validity predicate.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task.
///
/// Any status may move to any other; no transition graph is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is under way.
    InProgress,
    /// Work is finished.
    Done,
}

impl TaskStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical textual representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// Reports whether `value` names a task status.
///
/// Matching is exact: case-sensitive, with no trimming, so `"DONE"`,
/// `" todo"`, and `"in progress"` are all rejected.
#[must_use]
pub fn is_valid_status(value: &str) -> bool {
    TaskStatus::ALL.iter().any(|status| status.as_str() == value)
}

impl TryFrom<&str> for TaskStatus {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ValidationError::new(format!(
                "invalid status {value:?} (expected: todo|in-progress|done)"
            ))),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::try_from(value)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
