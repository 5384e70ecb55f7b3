//! Renders command outcomes for the terminal.

use std::io::{self, Write};

use super::dispatch::Outcome;
use crate::task::domain::{Task, format_timestamp};

/// Writes the user-facing report of `outcome` to `out`.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn render(outcome: &Outcome, out: &mut impl Write) -> io::Result<()> {
    match outcome {
        Outcome::Added(task) => writeln!(out, "Task added successfully (ID: {})", task.id()),
        Outcome::Updated(task) => writeln!(out, "Task {} updated", task.id()),
        Outcome::Deleted(task) => writeln!(out, "Task {} deleted", task.id()),
        Outcome::StatusChanged(task) => {
            writeln!(out, "Task {} marked as {}", task.id(), task.status())
        }
        Outcome::Listed(tasks) if tasks.is_empty() => writeln!(out, "No tasks found"),
        Outcome::Listed(tasks) => tasks.iter().try_for_each(|task| render_line(task, out)),
    }
}

fn render_line(task: &Task, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{}. [{}] {} (updated {})",
        task.id(),
        task.status(),
        task.description(),
        format_timestamp(task.updated_at())
    )
}
