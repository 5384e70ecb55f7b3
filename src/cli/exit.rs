//! Exit codes and failure reporting at the command-line boundary.

use std::io::{self, Write};

use crate::task::domain::{TaskError, TaskErrorKind};

/// The command succeeded.
pub const EXIT_OK: u8 = 0;
/// Storage or any other unexpected failure.
pub const EXIT_GENERAL: u8 = 1;
/// Malformed input or a rejected domain rule.
pub const EXIT_USAGE: u8 = 2;
/// The referenced task does not exist.
pub const EXIT_NOT_FOUND: u8 = 3;

/// Returns the process exit code for a failure kind.
#[must_use]
pub const fn exit_code_for(kind: TaskErrorKind) -> u8 {
    match kind {
        TaskErrorKind::Validation => EXIT_USAGE,
        TaskErrorKind::NotFound => EXIT_NOT_FOUND,
        TaskErrorKind::Storage => EXIT_GENERAL,
    }
}

/// Formats the stderr line for a domain failure.
///
/// Validation and not-found failures show their message only; storage
/// failures are prefixed with `error:` and followed by their cause.
#[must_use]
pub fn failure_message(err: &TaskError) -> String {
    match (err.kind(), err.cause()) {
        (TaskErrorKind::Storage, Some(cause)) => format!("error: {}: {cause}", err.message()),
        (TaskErrorKind::Storage, None) => format!("error: {}", err.message()),
        _ => err.message().to_owned(),
    }
}

/// Writes `report` to `err_out` and returns the matching exit code.
///
/// Reports that wrap a [`TaskError`] map through [`exit_code_for`];
/// anything else is a general failure.
///
/// # Errors
///
/// Returns any error raised by the writer.
pub fn report_failure(report: &eyre::Report, err_out: &mut impl Write) -> io::Result<u8> {
    let (code, message) = match report.downcast_ref::<TaskError>() {
        Some(err) => (exit_code_for(err.kind()), failure_message(err)),
        None => (EXIT_GENERAL, format!("error: {report:#}")),
    };
    writeln!(err_out, "{message}")?;
    Ok(code)
}
