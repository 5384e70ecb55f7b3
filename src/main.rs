//! `task-cli`: track short text tasks from the command line.
//!
//! Usage:
//!
//! ```text
//! task-cli add "description"
//! task-cli update <id> "new description"
//! task-cli delete <id>
//! task-cli mark-in-progress <id>
//! task-cli mark-done <id>
//! task-cli mark <id> <todo|in-progress|done>
//! task-cli list [todo|in-progress|done]
//! ```
//!
//! Exit codes: 0 success, 1 storage or other failure, 2 invalid input,
//! 3 unknown task.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use eyre::{Result, WrapErr};
use tasktracker::cli::{self, args::Cli, config::Config, exit, logging};
use tracing::debug;

fn main() -> ExitCode {
    let args = Cli::parse();
    match try_main(args) {
        Ok(()) => ExitCode::from(exit::EXIT_OK),
        Err(report) => {
            let code = exit::report_failure(&report, &mut io::stderr().lock())
                .unwrap_or(exit::EXIT_GENERAL);
            ExitCode::from(code)
        }
    }
}

fn try_main(args: Cli) -> Result<()> {
    let config = Config::load(args.config.as_deref())
        .wrap_err("failed to load configuration")?
        .with_store_override(args.file);
    logging::init_logging(&config.log_level, args.verbose)
        .wrap_err("failed to set up logging")?;
    debug!(store = %config.store_path, "task-cli starting");

    cli::run(args.command, &config, &mut io::stdout().lock())
}
