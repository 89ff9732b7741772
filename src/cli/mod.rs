//! CLI argument definitions and parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "fbb-draft", about = "Fantasy baseball snake-draft simulator")]
pub struct FbbDraft {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a full draft and export rosters, free agents, and the draft order.
    Run {
        /// Path to the team configuration JSON.
        #[clap(long, short, default_value = "teams.json")]
        teams: PathBuf,

        /// Directory for team CSVs, `fa.csv`, and `draft_order.txt`.
        #[clap(long, short, default_value = ".")]
        out_dir: PathBuf,

        /// Seed for the pick-order shuffle; random when omitted.
        #[clap(long)]
        seed: Option<u64>,
    },

    /// Run many independent what-if drafts with distinct random pick orders
    /// and summarize each team's round-1 selections.
    Simulate {
        /// Path to the team configuration JSON.
        #[clap(long, short, default_value = "teams.json")]
        teams: PathBuf,

        /// Number of simulations.
        #[clap(long, short = 'n', default_value_t = 100)]
        count: u32,

        /// Base seed; simulation `i` shuffles with `seed + i`.
        #[clap(long, default_value_t = 0)]
        seed: u64,
    },

    /// Print a round-robin schedule for the given teams.
    Schedule {
        /// Team names, in rotation order.
        #[clap(required = true)]
        teams: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        FbbDraft::command().debug_assert();
    }

    #[test]
    fn run_defaults() {
        let app = FbbDraft::parse_from(["fbb-draft", "run"]);
        match app.command {
            Commands::Run {
                teams,
                out_dir,
                seed,
            } => {
                assert_eq!(teams, PathBuf::from("teams.json"));
                assert_eq!(out_dir, PathBuf::from("."));
                assert!(seed.is_none());
            }
            other => panic!("expected Run, got: {other:?}"),
        }
    }

    #[test]
    fn simulate_flags_parse() {
        let app = FbbDraft::parse_from(["fbb-draft", "simulate", "-n", "500", "--seed", "42"]);
        match app.command {
            Commands::Simulate { count, seed, .. } => {
                assert_eq!(count, 500);
                assert_eq!(seed, 42);
            }
            other => panic!("expected Simulate, got: {other:?}"),
        }
    }

    #[test]
    fn schedule_requires_teams() {
        assert!(FbbDraft::try_parse_from(["fbb-draft", "schedule"]).is_err());
        let app = FbbDraft::parse_from(["fbb-draft", "schedule", "NIA", "KC"]);
        match app.command {
            Commands::Schedule { teams } => assert_eq!(teams, vec!["NIA", "KC"]),
            other => panic!("expected Schedule, got: {other:?}"),
        }
    }
}
