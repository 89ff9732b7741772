//! Per-team roster and the derived remaining-slot counters.

use super::eligibility::count_max_unique;
use super::player::Player;
use super::position::{Position, PositionSet};
use super::{NUM_BATTERS, NUM_RP, NUM_SP, NUM_UNIQUE_REQUIRED};

/// The players a team has drafted so far, in pick order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

/// Derived slot-usage counts for a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterCounts {
    pub sp: u32,
    pub rp: u32,
    pub batters: u32,
    /// Maximum distinct non-pitching slots the batters can cover at once.
    pub unique: u32,
}

impl Roster {
    /// Append a drafted player. The only mutating operation; derived counts
    /// are recomputed from scratch afterwards via [`Roster::counts`].
    pub fn push(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Eligibility sets of every rostered player, in pick order.
    pub fn position_sets(&self) -> Vec<PositionSet> {
        self.players.iter().map(|p| p.positions).collect()
    }

    /// Recompute slot usage from the current roster contents.
    pub fn counts(&self) -> RosterCounts {
        let sp = self
            .players
            .iter()
            .filter(|p| p.positions.contains(Position::StartingPitcher))
            .count() as u32;
        let rp = self
            .players
            .iter()
            .filter(|p| p.positions.contains(Position::ReliefPitcher))
            .count() as u32;
        let batters = self.players.len() as u32 - sp - rp;
        let unique = count_max_unique(&self.position_sets());

        RosterCounts {
            sp,
            rp,
            batters,
            unique,
        }
    }
}

/// Remaining required slots for a team, derived from its roster.
///
/// Every field stays ≥ 0 and is only ever decremented through
/// [`RosterState::recompute`] at the end of the team's pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterState {
    pub sp_remaining: u32,
    pub rp_remaining: u32,
    pub batters_remaining: u32,
    /// Unique required slots (8 position groups + SP + RP) still open.
    pub unique_remaining: u32,
}

impl RosterState {
    /// State of an empty roster: all slots open.
    pub fn new() -> Self {
        RosterState {
            sp_remaining: NUM_SP,
            rp_remaining: NUM_RP,
            batters_remaining: NUM_BATTERS,
            unique_remaining: NUM_UNIQUE_REQUIRED,
        }
    }

    /// Number of the 18 required roster categories currently satisfied.
    pub fn active_count(&self) -> u32 {
        NUM_UNIQUE_REQUIRED - self.unique_remaining
    }

    /// Rederive all counters from the roster after a pick.
    pub fn recompute(&mut self, roster: &Roster) {
        let counts = roster.counts();
        self.sp_remaining = NUM_SP.saturating_sub(counts.sp);
        self.rp_remaining = NUM_RP.saturating_sub(counts.rp);
        self.batters_remaining = NUM_BATTERS.saturating_sub(counts.batters);
        self.unique_remaining =
            NUM_UNIQUE_REQUIRED.saturating_sub(counts.unique + counts.sp + counts.rp);
    }
}

impl Default for RosterState {
    fn default() -> Self {
        Self::new()
    }
}
