//! The `run` subcommand: execute one full draft and export the results.

use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::info;

use crate::draft::DraftEngine;
use crate::storage::{write_draft_order, write_players};

use super::load_setups;

/// Run a complete draft and write `<team>.csv` per team, `fa.csv` for the
/// undrafted pool, and `draft_order.txt`, all under `out_dir`.
pub fn handle_run(teams_path: &Path, out_dir: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let setups = load_setups(teams_path)?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let engine = DraftEngine::new(setups, &mut rng)?;

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;
    write_draft_order(&out_dir.join("draft_order.txt"), engine.initial_order())?;

    let outcome = engine.run()?;

    for roster in &outcome.rosters {
        let path = out_dir.join(format!("{}.csv", roster.name));
        write_players(&path, &roster.players)
            .with_context(|| format!("writing roster {}", path.display()))?;
        info!(
            team = %roster.name,
            picks = roster.players.len(),
            "roster exported"
        );
    }

    write_players(&out_dir.join("fa.csv"), &outcome.free_agents)
        .context("writing free agents")?;

    println!(
        "Draft complete: {} teams, {} free agents left. Results in {}",
        outcome.rosters.len(),
        outcome.free_agents.len(),
        out_dir.display()
    );
    Ok(())
}
