//! Pick legality: whether a candidate can join a roster, and the resulting
//! count of filled active slots if it does.

use super::eligibility::count_max_unique;
use super::position::{Position, PositionSet};
use super::roster::RosterState;
use super::NUM_UNIQUE_REQUIRED;

/// Evaluate drafting a candidate with eligibility `candidate` onto a roster
/// whose current eligibility sets are `roster_positions`.
///
/// Returns `None` when the pick would be illegal (the relevant slot quota is
/// exhausted); callers filter on this rather than treating it as an error.
/// Otherwise returns the number of active roster slots that would be filled
/// after the pick, capped at [`NUM_UNIQUE_REQUIRED`].
///
/// `candidate` must be non-empty.
pub fn evaluate(
    candidate: PositionSet,
    state: &RosterState,
    roster_positions: &[PositionSet],
) -> Option<u32> {
    debug_assert!(!candidate.is_empty(), "candidate has no positions");

    let active = state.active_count();

    if candidate.contains(Position::StartingPitcher) {
        return (state.sp_remaining > 0).then(|| (active + 1).min(NUM_UNIQUE_REQUIRED));
    }
    if candidate.contains(Position::ReliefPitcher) {
        return (state.rp_remaining > 0).then(|| (active + 1).min(NUM_UNIQUE_REQUIRED));
    }

    // Batter.
    if state.batters_remaining == 0 {
        return None;
    }
    let mut sets = roster_positions.to_vec();
    sets.push(candidate);
    let new_unique = count_max_unique(&sets);

    // Batter credit is measured against a 10-slot budget, not the 8 unique
    // position groups. The selection thresholds downstream are tuned to this
    // arithmetic; see DESIGN.md before changing it.
    Some((new_unique + 10 - (state.sp_remaining + state.rp_remaining)).min(NUM_UNIQUE_REQUIRED))
}
