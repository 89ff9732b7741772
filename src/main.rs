//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fbb_draft::{
    cli::{Commands, FbbDraft},
    commands::{run_draft::handle_run, schedule::handle_schedule, simulate::handle_simulate},
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = FbbDraft::parse();

    match app.command {
        Commands::Run {
            teams,
            out_dir,
            seed,
        } => handle_run(&teams, &out_dir, seed)?,

        Commands::Simulate { teams, count, seed } => handle_simulate(&teams, count, seed)?,

        Commands::Schedule { teams } => handle_schedule(&teams),
    }

    Ok(())
}
