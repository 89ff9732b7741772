//! The `schedule` subcommand: print a round-robin season schedule.

use crate::schedule::round_robin;

/// Print one block per round, `home - away` per matchup.
pub fn handle_schedule(teams: &[String]) {
    for (i, round) in round_robin(teams).iter().enumerate() {
        println!("Round {}", i + 1);
        for (home, away) in round {
            println!("  {home} - {away}");
        }
    }
}
