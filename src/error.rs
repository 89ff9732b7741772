//! Error types for the fantasy baseball draft simulator.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DraftError>;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown position tag: {tag}")]
    UnknownPosition { tag: String },

    #[error("player `{name}` has no position tags")]
    EmptyPositions { name: String },

    #[error("team configuration is empty")]
    NoTeams,

    #[error(
        "no legal candidate for {team} in round {round} \
         (sp_remaining={sp_remaining}, rp_remaining={rp_remaining}, \
         batters_remaining={batters_remaining}, unique_remaining={unique_remaining})"
    )]
    NoLegalCandidate {
        team: String,
        round: u32,
        sp_remaining: u32,
        rp_remaining: u32,
        batters_remaining: u32,
        unique_remaining: u32,
    },

    #[error("player `{player}` was already removed from the pool of {team}")]
    DuplicatePick { player: String, team: String },
}
