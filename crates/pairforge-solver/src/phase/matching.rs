//! Phase 3: put two teams on each court.

use pairforge_config::OpponentPenalty;
use pairforge_core::{ConstraintState, Match, Team};

/// Cost of `a` facing `b`, summed over the four cross-team combinations.
pub fn opponent_cost(
    state: &ConstraintState,
    a: &Team,
    b: &Team,
    penalty: &OpponentPenalty,
) -> u64 {
    let mut cost = 0;
    for x in a.players() {
        for y in b.players() {
            cost += penalty.cost(state.opponent_count(x, y));
        }
    }
    cost
}

/// Groups teams into matches, one per court.
///
/// The first unassigned team always takes the cheapest remaining opponent;
/// ties go to the earlier team. Returns `None` for an odd number of teams.
pub fn form_matches(
    state: &ConstraintState,
    teams: &[Team],
    penalty: &OpponentPenalty,
) -> Option<Vec<Match>> {
    if teams.len() % 2 != 0 {
        return None;
    }

    let mut available: Vec<Team> = teams.to_vec();
    let mut matches = Vec::with_capacity(teams.len() / 2);

    while !available.is_empty() {
        let team1 = available.remove(0);
        let (position, _) = available
            .iter()
            .enumerate()
            .min_by_key(|(_, candidate)| opponent_cost(state, &team1, candidate, penalty))?;
        let team2 = available.remove(position);
        matches.push(Match::new(team1, team2));
    }

    Some(matches)
}
