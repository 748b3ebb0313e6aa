//! NutriPlan CLI Application
//!
//! Command-line interface for storing and activating diet and workout plans.

mod args;
mod cli;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use nutriplan_core::{PlanKind, PlanStoreBuilder};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        busy_timeout_ms,
        owner,
        command,
    } = Args::parse();

    let store = PlanStoreBuilder::new()
        .with_database_path(database_file)
        .with_busy_timeout(Duration::from_millis(busy_timeout_ms))
        .build()
        .await
        .context("Failed to initialize plan store")?;

    info!("NutriPlan started with database {}", store.database_path().display());

    let cli = Cli::new(store, TerminalRenderer::new(!no_color), owner);

    match command {
        Commands::Diet { command } => cli.handle_plan_command(PlanKind::Diet, command).await,
        Commands::Workout { command } => cli.handle_plan_command(PlanKind::Workout, command).await,
    }
}
