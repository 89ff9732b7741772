//! Core draft engine: positions, eligibility, legality, pick selection,
//! and the snake-draft orchestrator.

pub mod eligibility;
pub mod engine;
pub mod legality;
pub mod player;
pub mod position;
pub mod roster;
pub mod selector;

pub use engine::{DraftEngine, DraftOutcome, TeamRoster, TeamSetup};
pub use player::{Player, PlayerId};
pub use position::{Position, PositionSet};
pub use roster::{Roster, RosterCounts, RosterState};
pub use selector::Strategy;

/// Total number of draft rounds.
pub const NUM_ROUNDS: u32 = 22;

/// Required starting-pitcher slots per roster.
pub const NUM_SP: u32 = 5;

/// Required relief-pitcher slots per roster.
pub const NUM_RP: u32 = 5;

/// Batter slots per roster.
pub const NUM_BATTERS: u32 = 12;

/// Total required roster categories: 8 unique position groups plus the
/// pitching slots.
pub const NUM_UNIQUE_REQUIRED: u32 = 8 + NUM_SP + NUM_RP;

/// League-default batting average, backfilled for missing values at export.
pub const DEFAULT_AVG: f64 = 0.135;

/// Offset over batting average used when on-base percentage is missing.
pub const DEFAULT_OBP_OFFSET: f64 = 0.05;
