//! Command implementations for the draft simulator CLI.

pub mod run_draft;
pub mod schedule;
pub mod simulate;

use anyhow::Context;
use std::path::Path;

use crate::config::load_teams;
use crate::draft::TeamSetup;
use crate::storage::load_pool;

/// Load the team configuration and every team's ranked pool.
///
/// Shared by `run` and `simulate`; any failure here is a setup-time fatal
/// error reported before a single pick happens.
pub(crate) fn load_setups(teams_path: &Path) -> anyhow::Result<Vec<TeamSetup>> {
    let config = load_teams(teams_path)
        .with_context(|| format!("loading team config {}", teams_path.display()))?;

    let mut setups = Vec::with_capacity(config.len());
    for (name, entry) in &config {
        let pool = load_pool(&entry.order).with_context(|| {
            format!(
                "loading player pool {} for team {name}",
                entry.order.display()
            )
        })?;
        setups.push(TeamSetup {
            name: name.clone(),
            strategy: entry.optimization,
            pool,
        });
    }
    Ok(setups)
}
