//! Team configuration loading (`teams.json`).
//!
//! The config maps each team name to its ranked-pool CSV path and its
//! selection strategy. Anything malformed here is a setup-time fatal error,
//! reported before any round executes.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::draft::Strategy;
use crate::error::{DraftError, Result};

/// One team's entry in `teams.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamEntry {
    /// Path to the team's ranked player-pool CSV.
    pub order: PathBuf,
    /// Pick-selection strategy tag: `active` or `active_first`.
    pub optimization: Strategy,
}

/// Team name → entry. A `BTreeMap` so iteration order is deterministic
/// before the engine shuffles the pick order.
pub type TeamsConfig = BTreeMap<String, TeamEntry>;

/// Load and validate the team configuration.
pub fn load_teams(path: &Path) -> Result<TeamsConfig> {
    let text = std::fs::read_to_string(path)?;
    let teams: TeamsConfig = serde_json::from_str(&text)?;
    if teams.is_empty() {
        return Err(DraftError::NoTeams);
    }
    Ok(teams)
}
