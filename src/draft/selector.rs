//! Pick selection: two strategies over a ranked candidate list.
//!
//! Candidates arrive in draft-preference order and are never re-sorted;
//! both strategies filter and take the first survivor.

use serde::Deserialize;

use super::legality::evaluate;
use super::player::Player;
use super::position::PositionSet;
use super::roster::RosterState;
use super::NUM_UNIQUE_REQUIRED;

/// Rounds-left threshold at or below which every team switches to
/// best-available selection.
pub const BEST_AVAILABLE_CUTOFF: u32 = 4;

/// A team's configured pick-selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Best available by list rank, subject to legality and the
    /// remaining-rounds deficit check.
    Active,
    /// Aggressively fill required slots early, then fall back to
    /// best-available for the last few rounds.
    ActiveFirst,
}

/// Select one candidate for a team, dispatching on strategy and rounds left.
///
/// Returns `None` when no candidate passes the filters, which callers must
/// treat as a fatal configuration/data error — a legal draft never runs out
/// of picks mid-roster.
pub fn select<'a>(
    strategy: Strategy,
    candidates: &'a [Player],
    state: &RosterState,
    roster_positions: &[PositionSet],
    picks_left: u32,
) -> Option<&'a Player> {
    if strategy == Strategy::ActiveFirst && picks_left > BEST_AVAILABLE_CUTOFF {
        select_active_first(candidates, state, roster_positions)
    } else {
        select_best_available(candidates, state, roster_positions, picks_left)
    }
}

/// First legal candidate whose pick strictly improves the active-slot count.
pub fn select_active_first<'a>(
    candidates: &'a [Player],
    state: &RosterState,
    roster_positions: &[PositionSet],
) -> Option<&'a Player> {
    let current_active = state.active_count();
    candidates.iter().find(|p| {
        matches!(
            evaluate(p.positions, state, roster_positions),
            Some(new_active) if new_active > current_active
        )
    })
}

/// First legal candidate whose remaining active-slot deficit is still
/// fillable within the picks left.
pub fn select_best_available<'a>(
    candidates: &'a [Player],
    state: &RosterState,
    roster_positions: &[PositionSet],
    picks_left: u32,
) -> Option<&'a Player> {
    candidates.iter().find(|p| {
        matches!(
            evaluate(p.positions, state, roster_positions),
            Some(new_active) if NUM_UNIQUE_REQUIRED - new_active < picks_left
        )
    })
}
