//! Command-line surface for the task tracker.
//!
//! The binary parses [`args::Cli`], loads [`config::Config`], installs
//! logging, and hands the command to [`run`]. Domain failures travel back
//! inside an [`eyre::Report`] and are mapped to exit codes by
//! [`exit::report_failure`].

pub mod args;
pub mod config;
pub mod dispatch;
pub mod exit;
pub mod logging;
pub mod output;

#[cfg(test)]
mod tests;

use std::io::Write;
use std::sync::Arc;

use eyre::Result;
use mockable::DefaultClock;

use crate::task::{
    adapters::json_file::JsonFileTaskRepository, domain::TaskError, services::TaskService,
};
use args::Command;
use config::Config;
use dispatch::Request;

/// Executes `command` against the task file named by `config` and writes the
/// report to `out`.
///
/// Input is validated before the task file is opened, so a rejected command
/// never creates or reads the file.
///
/// # Errors
///
/// Returns a report wrapping a [`TaskError`] when the operation fails, or an
/// I/O error when writing the report fails.
pub fn run(command: Command, config: &Config, out: &mut impl Write) -> Result<()> {
    let request = Request::try_from(command).map_err(TaskError::from)?;
    let repository = JsonFileTaskRepository::open(&config.store_path).map_err(TaskError::from)?;
    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    let outcome = dispatch::execute(&service, request)?;
    output::render(&outcome, out)?;
    Ok(())
}
