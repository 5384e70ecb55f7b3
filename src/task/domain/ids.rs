//! Identifier and validated scalar types for the task domain.

use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Positive identifier of a tracked task.
///
/// Identifiers are assigned by the service from the stored collection and
/// never change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the value is zero.
    pub fn new(value: u64) -> Result<Self, ValidationError> {
        if value == 0 {
            return Err(ValidationError::new("id must be positive"));
        }
        Ok(Self(value))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one, or `None` when the
    /// numeric range is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// The identifier given to the first task in an empty store.
    #[must_use]
    pub const fn first() -> Self {
        Self(1)
    }
}

impl TryFrom<u64> for TaskId {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskId> for u64 {
    fn from(id: TaskId) -> Self {
        id.0
    }
}

impl FromStr for TaskId {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .parse::<u64>()
            .ok()
            .and_then(|raw| Self::new(raw).ok())
            .ok_or_else(|| ValidationError::new(format!("invalid id: {value:?}")))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-form task description that is never blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TaskDescription(String);

impl TaskDescription {
    /// Creates a validated description.
    ///
    /// The text is stored as given; only all-whitespace input is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when the text is empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(ValidationError::new("description cannot be empty"));
        }
        Ok(Self(raw))
    }

    /// Returns the description as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TaskDescription {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskDescription> for String {
    fn from(description: TaskDescription) -> Self {
        description.0
    }
}

impl AsRef<str> for TaskDescription {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
