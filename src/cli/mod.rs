//! CLI command definitions and handlers

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

use workrest::client::models::TimeFrame;

pub mod args;
pub mod backlog;
pub mod board;
pub mod configure;
pub mod context;
pub mod iteration;
pub mod plan;
pub mod team;

pub use context::CommandContext;

/// workrest - command-line client for the Work REST API
#[derive(Parser, Debug)]
#[command(name = "workrest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Override config file location
    #[arg(long, global = true, env = "WORKREST_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Organization or collection URL
    #[arg(long, global = true, env = "WORKREST_URL", hide_env = true)]
    pub url: Option<String>,

    /// Personal access token
    #[arg(long, global = true, env = "WORKREST_TOKEN", hide_env = true)]
    pub token: Option<String>,

    /// Send the token as a bearer token instead of a PAT
    #[arg(long, global = true)]
    pub bearer: bool,

    /// Project name or ID
    #[arg(long, short = 'p', global = true, env = "WORKREST_PROJECT", hide_env = true)]
    pub project: Option<String>,

    /// Team name or ID (defaults to the project's default team)
    #[arg(long, short = 't', global = true, env = "WORKREST_TEAM", hide_env = true)]
    pub team: Option<String>,

    /// API version to request instead of the pinned one
    #[arg(long, global = true)]
    pub api_version: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "WORKREST_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save connection settings (from the global flags) to the config file
    Configure {
        /// Request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Print the current configuration instead of saving
        #[arg(long)]
        show: bool,
    },

    /// Backlog configuration and levels
    #[command(subcommand)]
    Backlog(BacklogCommands),

    /// Team boards
    #[command(subcommand)]
    Board(BoardCommands),

    /// Team iterations
    #[command(subcommand)]
    Iteration(IterationCommands),

    /// Delivery plans
    #[command(subcommand)]
    Plan(PlanCommands),

    /// Team settings
    #[command(subcommand)]
    Team(TeamCommands),

    /// Show the project's process configuration
    Process,
}

/// Backlog subcommands
#[derive(Subcommand, Debug)]
pub enum BacklogCommands {
    /// Show the team's backlog configuration
    Config,

    /// List backlog levels
    List,

    /// Show one backlog level
    Get {
        /// Backlog level ID (e.g. Microsoft.RequirementCategory)
        id: String,
    },

    /// List the work items in a backlog level
    Items {
        /// Backlog level ID
        backlog_id: String,
    },
}

/// Board subcommands
#[derive(Subcommand, Debug)]
pub enum BoardCommands {
    /// List the team's boards
    List,

    /// Show a board
    Get {
        /// Board name or ID
        board: String,
    },

    /// List a board's columns
    Columns { board: String },

    /// List a board's swimlanes
    Rows { board: String },

    /// List a board's charts
    Charts { board: String },

    /// Show one board chart
    Chart {
        board: String,

        /// Chart name (e.g. cumulativeFlow)
        name: String,
    },
}

/// Iteration subcommands
#[derive(Subcommand, Debug)]
pub enum IterationCommands {
    /// List the team's iterations
    List {
        /// Only iterations in this timeframe (past, current, future)
        #[arg(long)]
        timeframe: Option<TimeFrame>,
    },

    /// Show an iteration
    Get {
        /// Iteration ID
        id: String,
    },

    /// List the work items assigned to an iteration
    WorkItems { id: String },

    /// Show the team's days off in an iteration
    DaysOff { id: String },

    /// Show team member capacities for an iteration
    Capacities { id: String },

    /// Remove an iteration from the team's selection
    Delete { id: String },
}

/// Delivery plan subcommands
#[derive(Subcommand, Debug)]
pub enum PlanCommands {
    /// List the project's plans
    List,

    /// Show a plan
    Get {
        /// Plan ID
        id: String,
    },

    /// Show delivery timeline data for a plan
    Timeline {
        id: String,

        /// Plan revision last seen
        #[arg(long)]
        revision: Option<i32>,

        /// Window start (RFC 3339)
        #[arg(long)]
        start: Option<DateTime<Utc>>,

        /// Window end (RFC 3339)
        #[arg(long)]
        end: Option<DateTime<Utc>>,
    },

    /// Delete a plan
    Delete { id: String },
}

/// Team settings subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// Show team settings
    Settings,

    /// Show the team's area paths
    FieldValues,
}
