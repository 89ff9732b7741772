//! Positional-overlap counting: how many distinct roster slots a group of
//! multi-eligible batters can cover at once.

use super::position::{Position, PositionSet};

/// Maximum number of distinct positions simultaneously coverable by the
/// given eligibility sets.
///
/// Each player occupies exactly one of their eligible positions at a time;
/// this finds the assignment that maximizes distinct slots covered. Sets
/// that are exactly `{SP}` or `{RP}` are skipped — pitchers are counted
/// against their own slot quotas, not the unique-position total.
///
/// Worst case this enumerates the Cartesian product of the sets, which is
/// exponential in the number of multi-eligible players. Rosters cap out at
/// 12 batters and the recursion collapses choices that duplicate an
/// already-covered position, so in practice it is cheap.
///
/// Returns 0 for empty input.
pub fn count_max_unique(position_sets: &[PositionSet]) -> u32 {
    let pure_sp = PositionSet::only(Position::StartingPitcher);
    let pure_rp = PositionSet::only(Position::ReliefPitcher);
    let batters: Vec<PositionSet> = position_sets
        .iter()
        .copied()
        .filter(|set| *set != pure_sp && *set != pure_rp)
        .collect();

    best_assignment(&batters, PositionSet::EMPTY)
}

fn best_assignment(sets: &[PositionSet], covered: PositionSet) -> u32 {
    let Some((first, rest)) = sets.split_first() else {
        return covered.len();
    };

    let mut best = 0;
    let fresh = first.difference(covered);
    for pos in fresh.iter() {
        best = best.max(best_assignment(rest, covered.with(pos)));
    }
    // Every choice of an already-covered position leads to the same
    // subproblem; explore it once.
    if fresh != *first {
        best = best.max(best_assignment(rest, covered));
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(tags: &[&str]) -> Vec<PositionSet> {
        tags.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn empty_input_counts_zero() {
        assert_eq!(count_max_unique(&[]), 0);
    }

    #[test]
    fn single_player_counts_one() {
        assert_eq!(count_max_unique(&sets(&["1B"])), 1);
    }

    #[test]
    fn overlap_resolved_to_distinct_slots() {
        // First player yields 3B so the second can take 1B.
        assert_eq!(count_max_unique(&sets(&["1B,3B", "1B"])), 2);
    }

    #[test]
    fn pure_pitchers_are_excluded() {
        assert_eq!(count_max_unique(&sets(&["SP", "RP"])), 0);
        assert_eq!(count_max_unique(&sets(&["SP", "1B", "RP"])), 1);
    }

    #[test]
    fn identical_single_eligibility_cannot_stack() {
        // Three first basemen can only ever cover one 1B slot.
        assert_eq!(count_max_unique(&sets(&["1B", "1B", "1B"])), 1);
    }

    #[test]
    fn chain_of_overlaps() {
        // 2B -> SS -> 3B shifts each player off the contested slot.
        assert_eq!(count_max_unique(&sets(&["2B", "2B,SS", "SS,3B"])), 3);
    }

    #[test]
    fn count_saturates_at_available_distinct_positions() {
        let all = sets(&["C", "1B", "2B", "3B", "SS", "LF", "CF", "RF", "C,1B"]);
        // Only 8 distinct non-pitching groups exist.
        assert_eq!(count_max_unique(&all), 8);
    }
}
