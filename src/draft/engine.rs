//! Snake-draft orchestration: rounds, pick-order reversal, broadcast pool
//! removal, and the finalize/backfill step.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use super::player::Player;
use super::roster::{Roster, RosterState};
use super::selector::{select, Strategy};
use super::{DEFAULT_AVG, DEFAULT_OBP_OFFSET, NUM_ROUNDS};
use crate::error::{DraftError, Result};

/// Inputs for one team: its name, strategy, and ranked player pool.
///
/// Pool row order is the team's draft preference order; the engine never
/// re-sorts it.
#[derive(Debug, Clone)]
pub struct TeamSetup {
    pub name: String,
    pub strategy: Strategy,
    pub pool: Vec<Player>,
}

#[derive(Debug)]
struct TeamState {
    name: String,
    strategy: Strategy,
    /// This team's view of the available pool; removals are broadcast to
    /// every view when any team drafts.
    pool: Vec<Player>,
    roster: Roster,
    state: RosterState,
    picks_left: u32,
}

/// A finished team roster, players in pick order, stats backfilled.
#[derive(Debug, Clone)]
pub struct TeamRoster {
    pub name: String,
    pub players: Vec<Player>,
}

/// The result of a completed (or stopped) draft.
#[derive(Debug, Clone)]
pub struct DraftOutcome {
    /// One entry per team, in configuration order.
    pub rosters: Vec<TeamRoster>,
    /// Players nobody drafted, stats backfilled, in rank order.
    pub free_agents: Vec<Player>,
    /// The randomized round-1 pick order.
    pub initial_order: Vec<String>,
}

/// Sequential snake-draft engine.
///
/// Owns the shared available-player pool exclusively; every pick mutates it
/// before the next selection, so picks within a round are strictly ordered.
pub struct DraftEngine {
    teams: Vec<TeamState>,
    /// Indices into `teams`; reversed after every round.
    pick_order: Vec<usize>,
    initial_order: Vec<String>,
    rounds_left: u32,
}

impl DraftEngine {
    /// Build an engine from team setups, shuffling the initial pick order
    /// once with `rng`.
    pub fn new(setups: Vec<TeamSetup>, rng: &mut impl Rng) -> Result<Self> {
        if setups.is_empty() {
            return Err(DraftError::NoTeams);
        }

        let teams: Vec<TeamState> = setups
            .into_iter()
            .map(|s| TeamState {
                name: s.name,
                strategy: s.strategy,
                pool: s.pool,
                roster: Roster::default(),
                state: RosterState::new(),
                picks_left: NUM_ROUNDS,
            })
            .collect();

        let mut pick_order: Vec<usize> = (0..teams.len()).collect();
        pick_order.shuffle(rng);

        let initial_order: Vec<String> =
            pick_order.iter().map(|&i| teams[i].name.clone()).collect();
        info!(order = ?initial_order, "draft order set");

        Ok(DraftEngine {
            teams,
            pick_order,
            initial_order,
            rounds_left: NUM_ROUNDS,
        })
    }

    /// Team names in the current pick order.
    pub fn pick_order(&self) -> Vec<&str> {
        self.pick_order
            .iter()
            .map(|&i| self.teams[i].name.as_str())
            .collect()
    }

    /// The randomized round-1 order.
    pub fn initial_order(&self) -> &[String] {
        &self.initial_order
    }

    pub fn rounds_left(&self) -> u32 {
        self.rounds_left
    }

    /// Execute one draft round: every team picks once in the current order,
    /// then the order reverses.
    pub fn round(&mut self) -> Result<()> {
        let round = NUM_ROUNDS - self.rounds_left + 1;
        info!(round, "****** ROUND {round} ******");

        let order = self.pick_order.clone();
        for &idx in &order {
            self.pick_for(idx, round)?;
        }

        self.pick_order.reverse();
        self.rounds_left -= 1;
        Ok(())
    }

    /// One pick for the team at `idx`: select, remove from every pool,
    /// append to the roster, recompute the roster state.
    fn pick_for(&mut self, idx: usize, round: u32) -> Result<()> {
        let picked = {
            let team = &self.teams[idx];
            let roster_positions = team.roster.position_sets();
            select(
                team.strategy,
                &team.pool,
                &team.state,
                &roster_positions,
                team.picks_left,
            )
            .ok_or_else(|| DraftError::NoLegalCandidate {
                team: team.name.clone(),
                round,
                sp_remaining: team.state.sp_remaining,
                rp_remaining: team.state.rp_remaining,
                batters_remaining: team.state.batters_remaining,
                unique_remaining: team.state.unique_remaining,
            })?
            .clone()
        };

        info!("{} picks {}!", self.teams[idx].name, picked.name);

        // Broadcast removal: the player leaves every team's view of the
        // pool, including the picking team's own.
        for team in &mut self.teams {
            let pos = team.pool.iter().position(|p| p.id == picked.id).ok_or_else(|| {
                DraftError::DuplicatePick {
                    player: picked.name.clone(),
                    team: team.name.clone(),
                }
            })?;
            team.pool.remove(pos);
        }

        let team = &mut self.teams[idx];
        team.roster.push(picked);
        team.picks_left -= 1;
        team.state.recompute(&team.roster);
        Ok(())
    }

    /// Run every remaining round, then finalize.
    pub fn run(mut self) -> Result<DraftOutcome> {
        while self.rounds_left > 0 {
            self.round()?;
        }
        Ok(self.finish())
    }

    /// Stop here and produce the outcome, backfilling missing batting stats
    /// on every roster and on the leftover free-agent pool.
    pub fn finish(self) -> DraftOutcome {
        // After broadcast removals every pool is identical; take the
        // current leader's view as the free-agent list.
        let mut free_agents = self.teams[self.pick_order[0]].pool.clone();
        for player in &mut free_agents {
            backfill(player);
        }

        let rosters = self
            .teams
            .into_iter()
            .map(|team| {
                let mut players = team.roster.players().to_vec();
                for player in &mut players {
                    backfill(player);
                }
                TeamRoster {
                    name: team.name,
                    players,
                }
            })
            .collect();

        DraftOutcome {
            rosters,
            free_agents,
            initial_order: self.initial_order,
        }
    }
}

/// League-default stat backfill: a missing batting average becomes
/// [`DEFAULT_AVG`], and a missing on-base percentage becomes the (possibly
/// backfilled) average plus [`DEFAULT_OBP_OFFSET`]. ERA is left untouched.
fn backfill(player: &mut Player) {
    let avg = *player.avg.get_or_insert(DEFAULT_AVG);
    player.obp.get_or_insert(avg + DEFAULT_OBP_OFFSET);
}
