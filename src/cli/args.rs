//! Command-line argument model for `task-cli`.

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand};

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "task-cli")]
#[command(
    author,
    version,
    about = "Track short text tasks in a local JSON file",
    long_about = None
)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Path to the task file, overriding the configured one
    #[arg(short, long, global = true)]
    pub file: Option<Utf8PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Task operations.
///
/// Identifiers and statuses are taken as raw text and validated by the
/// domain, so malformed input surfaces as a validation failure.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new task
    Add {
        /// Task description; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Replace a task's description
    Update {
        /// Task ID
        id: String,

        /// New description; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// Task ID
        id: String,
    },

    /// Mark a task as done
    MarkDone {
        /// Task ID
        id: String,
    },

    /// Set a task's status
    Mark {
        /// Task ID
        id: String,

        /// One of todo, in-progress, done
        status: String,
    },

    /// List tasks, optionally restricted to one status
    List {
        /// One of todo, in-progress, done
        status: Option<String>,
    },
}
