//! Persistence adapters for task tracking.
//!
//! - [`memory::InMemoryTaskRepository`]: thread-safe in-memory storage for
//!   tests
//! - [`json_file::JsonFileTaskRepository`]: a JSON array on disk, written
//!   atomically

pub mod json_file;
pub mod memory;
