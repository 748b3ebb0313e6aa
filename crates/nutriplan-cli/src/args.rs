use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::PlanCommands;

/// Command-line front end for the NutriPlan plan store
///
/// Stores diet and workout plans per user and keeps at most one of each kind
/// active. Every command acts on behalf of a single owner, given with
/// `--owner` or the `NUTRIPLAN_OWNER` environment variable.
#[derive(Parser)]
#[command(version, about, name = "nutriplan")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/nutriplan/plans.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// How long to wait for a competing writer, in milliseconds
    #[arg(long, global = true, default_value_t = 5000)]
    pub busy_timeout_ms: u64,

    /// ID of the user whose plans are managed
    #[arg(long, global = true, env = "NUTRIPLAN_OWNER")]
    pub owner: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the NutriPlan CLI
///
/// Diet and workout plans are separate collections with the same operations.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage diet plans
    #[command(alias = "d")]
    Diet {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage workout plans
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: PlanCommands,
    },
}
