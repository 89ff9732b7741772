//! Player identity and pool-row model.

use super::position::PositionSet;
use std::fmt;

/// Type-safe wrapper for player IDs.
///
/// Prevents mixing up player IDs with other numeric values (round numbers,
/// counts) throughout the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A draftable player.
///
/// Immutable once loaded. Batting stats are meaningless for pure pitchers
/// and vice versa, so every stat is optional; missing values are backfilled
/// with league defaults only at export time, never during selection.
#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub positions: PositionSet,
    /// Batting average.
    pub avg: Option<f64>,
    /// On-base percentage.
    pub obp: Option<f64>,
    /// Earned-run average.
    pub era: Option<f64>,
}
