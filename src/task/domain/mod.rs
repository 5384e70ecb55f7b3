//! Domain model for task tracking.
//!
//! The domain defines the [`Task`] aggregate, its validated scalar types,
//! the status validity predicate, and the closed set of failure kinds used
//! by storage and command-line collaborators. It performs no I/O.

mod error;
mod ids;
mod status;
mod task;
mod time;

pub use error::{
    DomainFailure, ErrorCause, NotFoundError, StorageError, TaskError, TaskErrorKind,
    ValidationError,
};
pub use ids::{TaskDescription, TaskId};
pub use status::{TaskStatus, is_valid_status};
pub use task::{PersistedTaskData, Task};
pub use time::{format_timestamp, now_iso};
