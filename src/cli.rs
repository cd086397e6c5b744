//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `robotask`.
#[derive(Debug, Parser)]
#[command(name = "robotask", version, about = "Build robot route tasks and run them remotely")]
pub struct Cli {
    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `robotask=debug`).
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    /// Task service base URL; overrides `ROBOTASK_BASE_URL`.
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Access token; overrides `ROBOTASK_TOKEN`.
    #[arg(long, global = true)]
    pub token: Option<String>,
    /// Answer service calls from a recorded cassette instead of the network.
    #[arg(long, global = true, value_name = "CASSETTE")]
    pub replay: Option<PathBuf>,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the task document a route file describes.
    Build {
        /// Path to a YAML route file.
        route: PathBuf,
    },
    /// Create a task from a route file and print its id.
    Submit {
        /// Path to a YAML route file.
        route: PathBuf,
        /// Start the task right after creating it.
        #[arg(long)]
        execute: bool,
    },
    /// Start a previously created task.
    Execute {
        /// Identifier assigned by the service.
        task_id: String,
    },
    /// Show the latest status of a task.
    Status {
        /// Identifier assigned by the service.
        task_id: String,
    },
    /// List the robots visible to the token.
    Robots {
        /// Entries per page.
        #[arg(long, default_value_t = 10)]
        page_size: u32,
        /// Page to fetch, starting at 1.
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show the live state record of one robot.
    RobotState {
        /// Robot identifier, as listed by `robots`.
        robot_id: String,
    },
    /// Create, start and follow a task until it finishes or is cancelled.
    Run {
        /// Path to a YAML route file.
        route: PathBuf,
        /// Seconds between status queries.
        #[arg(long, default_value_t = 1)]
        interval_secs: u64,
        /// Consecutive failed queries tolerated before giving up.
        #[arg(long, default_value_t = 1)]
        max_failures: u32,
        /// Stop after this many queries even if the task is still running.
        #[arg(long)]
        max_polls: Option<u32>,
    },
}
