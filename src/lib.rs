//! Fantasy Baseball Draft Simulator Library
//!
//! A Rust library for simulating fantasy-baseball snake drafts, providing
//! roster legality checks, pick-selection strategies, draft orchestration,
//! and round-robin schedule generation.
//!
//! ## Features
//!
//! - **Snake Draft Engine**: 22-round drafts with per-round pick-order
//!   reversal and shared-pool bookkeeping
//! - **Roster Legality**: Combinatorial unique-position counting over
//!   multi-eligible players
//! - **Pick Strategies**: Greedy best-active and deadline-aware
//!   best-available selection
//! - **Pool I/O**: Ranked player pools from CSV, roster and free-agent
//!   export back to CSV
//! - **Schedule Generation**: Round-robin season schedules with BYE handling
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fbb_draft::{DraftEngine, Strategy, TeamSetup};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! # fn example() -> fbb_draft::Result<()> {
//! let setups = vec![
//!     TeamSetup {
//!         name: "NIA".to_string(),
//!         strategy: Strategy::ActiveFirst,
//!         pool: fbb_draft::storage::load_pool("nia_order.csv".as_ref())?,
//!     },
//! ];
//! let mut rng = StdRng::seed_from_u64(42);
//! let outcome = DraftEngine::new(setups, &mut rng)?.run()?;
//! println!("{} free agents left", outcome.free_agents.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod schedule;
pub mod storage;

// Re-export commonly used types
pub use draft::{
    DraftEngine, DraftOutcome, Player, PlayerId, Position, PositionSet, Roster, RosterState,
    Strategy, TeamRoster, TeamSetup,
};
pub use error::{DraftError, Result};
