//! Failure kinds raised by task operations.
//!
//! The hierarchy is closed: [`ValidationError`] for rejected input,
//! [`NotFoundError`] for unknown task identifiers, and [`StorageError`] for
//! persistence faults. Each kind carries a message, a fixed discriminator
//! name, and an optional cause kept only for diagnostic chaining.
//! [`TaskError`] unites the three kinds so callers can propagate any of them
//! with `?` and branch on the variant at the boundary.

use std::error::Error as StdError;
use std::sync::Arc;
use thiserror::Error;

/// Shared reference to the lower-level failure behind a domain failure.
pub type ErrorCause = Arc<dyn StdError + Send + Sync>;

/// Capability shared by every domain failure kind.
pub trait DomainFailure: StdError {
    /// Returns the discriminator naming the failure kind.
    fn name(&self) -> &'static str;

    /// Returns the human-readable failure message.
    fn message(&self) -> &str;

    /// Returns the originating failure, if one was attached.
    fn cause(&self) -> Option<&ErrorCause>;
}

/// Input failed a domain rule, such as an unknown status or an empty
/// description.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    #[source]
    cause: Option<ErrorCause>,
}

impl ValidationError {
    /// Discriminator reported by [`DomainFailure::name`].
    pub const NAME: &'static str = "ValidationError";

    /// Creates a validation failure without a cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a validation failure chained to an existing cause.
    ///
    /// The cause is stored as given, so [`Self::cause`] returns the same
    /// shared allocation.
    #[must_use]
    pub fn with_cause(message: impl Into<String>, cause: ErrorCause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Creates a validation failure wrapping a concrete error.
    #[must_use]
    pub fn from_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::with_cause(message, Arc::new(source))
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached cause, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }
}

/// A referenced task identifier does not exist.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct NotFoundError {
    message: String,
    #[source]
    cause: Option<ErrorCause>,
}

impl NotFoundError {
    /// Discriminator reported by [`DomainFailure::name`].
    pub const NAME: &'static str = "NotFoundError";

    /// Creates a not-found failure without a cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a not-found failure chained to an existing cause.
    #[must_use]
    pub fn with_cause(message: impl Into<String>, cause: ErrorCause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Creates a not-found failure wrapping a concrete error.
    #[must_use]
    pub fn from_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::with_cause(message, Arc::new(source))
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached cause, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }
}

/// An underlying persistence operation failed.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StorageError {
    message: String,
    #[source]
    cause: Option<ErrorCause>,
}

impl StorageError {
    /// Discriminator reported by [`DomainFailure::name`].
    pub const NAME: &'static str = "StorageError";

    /// Creates a storage failure without a cause.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a storage failure chained to an existing cause.
    #[must_use]
    pub fn with_cause(message: impl Into<String>, cause: ErrorCause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Creates a storage failure wrapping a concrete error, typically an
    /// [`std::io::Error`] or a serialisation error.
    #[must_use]
    pub fn from_source(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::with_cause(message, Arc::new(source))
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the attached cause, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }
}

impl DomainFailure for ValidationError {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn message(&self) -> &str {
        Self::message(self)
    }

    fn cause(&self) -> Option<&ErrorCause> {
        Self::cause(self)
    }
}

impl DomainFailure for NotFoundError {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn message(&self) -> &str {
        Self::message(self)
    }

    fn cause(&self) -> Option<&ErrorCause> {
        Self::cause(self)
    }
}

impl DomainFailure for StorageError {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn message(&self) -> &str {
        Self::message(self)
    }

    fn cause(&self) -> Option<&ErrorCause> {
        Self::cause(self)
    }
}

/// Discriminant of a [`TaskError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// See [`ValidationError`].
    Validation,
    /// See [`NotFoundError`].
    NotFound,
    /// See [`StorageError`].
    Storage,
}

/// Any domain failure raised while performing a task operation.
#[derive(Debug, Clone, Error)]
pub enum TaskError {
    /// Input failed a domain rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced task does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Persistence failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl TaskError {
    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::Validation(_) => TaskErrorKind::Validation,
            Self::NotFound(_) => TaskErrorKind::NotFound,
            Self::Storage(_) => TaskErrorKind::Storage,
        }
    }

    /// Borrows the wrapped failure through the shared capability.
    #[must_use]
    pub fn as_failure(&self) -> &dyn DomainFailure {
        match self {
            Self::Validation(err) => err,
            Self::NotFound(err) => err,
            Self::Storage(err) => err,
        }
    }

    /// Returns the discriminator of the wrapped failure.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Validation(_) => ValidationError::NAME,
            Self::NotFound(_) => NotFoundError::NAME,
            Self::Storage(_) => StorageError::NAME,
        }
    }

    /// Returns the message of the wrapped failure.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(err) => err.message(),
            Self::NotFound(err) => err.message(),
            Self::Storage(err) => err.message(),
        }
    }

    /// Returns the cause of the wrapped failure, if any.
    #[must_use]
    pub const fn cause(&self) -> Option<&ErrorCause> {
        match self {
            Self::Validation(err) => err.cause(),
            Self::NotFound(err) => err.cause(),
            Self::Storage(err) => err.cause(),
        }
    }
}

impl DomainFailure for TaskError {
    fn name(&self) -> &'static str {
        Self::name(self)
    }

    fn message(&self) -> &str {
        Self::message(self)
    }

    fn cause(&self) -> Option<&ErrorCause> {
        Self::cause(self)
    }
}
