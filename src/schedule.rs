//! Round-robin schedule generator.
//!
//! Independent of the draft: rotates a team list to produce one pairing per
//! team per round. Odd-sized lists are padded with a BYE entry.

/// Placeholder opponent added when the team count is odd.
pub const BYE: &str = "BYE";

/// Generate a round-robin schedule: `n - 1` rounds (after BYE padding) of
/// `(home, away)` pairings, with sides switching on alternating rounds so
/// no team is always listed first.
pub fn round_robin(teams: &[String]) -> Vec<Vec<(String, String)>> {
    let mut list: Vec<String> = teams.to_vec();
    if list.len() % 2 == 1 {
        list.push(BYE.to_string());
    }

    let n = list.len();
    let mut rounds = Vec::new();
    if n < 2 {
        return rounds;
    }

    for i in 0..n - 1 {
        let mid = n / 2;
        let first_half = &list[..mid];
        let second_half: Vec<&String> = list[mid..].iter().rev().collect();

        let pairings: Vec<(String, String)> = if i % 2 == 1 {
            first_half
                .iter()
                .zip(second_half.iter())
                .map(|(a, b)| (a.clone(), (*b).clone()))
                .collect()
        } else {
            second_half
                .iter()
                .zip(first_half.iter())
                .map(|(a, b)| ((*a).clone(), b.clone()))
                .collect()
        };
        rounds.push(pairings);

        // Rotate: hold position 0 fixed, move the last team to position 1.
        let last = list.pop().expect("list is non-empty");
        list.insert(1, last);
    }

    rounds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn four_teams_three_rounds() {
        let rounds = round_robin(&teams(&["NIA", "KC", "CHA", "GH2"]));
        assert_eq!(rounds.len(), 3);
        for round in &rounds {
            assert_eq!(round.len(), 2);
        }
    }

    #[test]
    fn every_team_plays_once_per_round() {
        let names = teams(&["A", "B", "C", "D", "E", "F"]);
        for round in round_robin(&names) {
            let mut seen: Vec<&str> = Vec::new();
            for (home, away) in &round {
                seen.push(home);
                seen.push(away);
            }
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), names.len());
        }
    }

    #[test]
    fn every_pair_meets_exactly_once() {
        let names = teams(&["A", "B", "C", "D"]);
        let mut meetings: Vec<(String, String)> = Vec::new();
        for round in round_robin(&names) {
            for (home, away) in round {
                let key = if home < away {
                    (home, away)
                } else {
                    (away, home)
                };
                meetings.push(key);
            }
        }
        meetings.sort();
        meetings.dedup();
        // C(4, 2) distinct pairings.
        assert_eq!(meetings.len(), 6);
    }

    #[test]
    fn odd_team_count_gets_a_bye() {
        let rounds = round_robin(&teams(&["A", "B", "C"]));
        // Padded to 4 entries: 3 rounds, and BYE appears once per round.
        assert_eq!(rounds.len(), 3);
        for round in rounds {
            let byes = round
                .iter()
                .filter(|(h, a)| h == BYE || a == BYE)
                .count();
            assert_eq!(byes, 1);
        }
    }

    #[test]
    fn sides_switch_between_rounds() {
        let rounds = round_robin(&teams(&["NIA", "KC", "CHA", "GH2"]));
        // Round 1 lists the back half first; the fixed team NIA sits on the
        // away side, then swaps to home in round 2.
        assert_eq!(rounds[0][0], ("GH2".to_string(), "NIA".to_string()));
        assert_eq!(rounds[1][0].0, "NIA".to_string());
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(round_robin(&[]).is_empty());
        let solo = round_robin(&teams(&["A"]));
        assert_eq!(solo.len(), 1);
        assert_eq!(solo[0][0], (BYE.to_string(), "A".to_string()));
    }
}
