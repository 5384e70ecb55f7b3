//! Tasktracker: a command-line task tracker.
//!
//! Users create, list, update, and delete short text tasks, each with a
//! `todo`, `in-progress`, or `done` status, persisted in a local JSON file.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: the task aggregate, status predicate, and failure kinds,
//!   free of infrastructure dependencies
//! - **Ports**: the repository contract used by services
//! - **Adapters**: in-memory and JSON file repositories
//!
//! # Modules
//!
//! - [`task`]: task domain, persistence, and use cases
//! - [`cli`]: argument parsing, configuration, logging, and exit codes

pub mod cli;
pub mod task;
