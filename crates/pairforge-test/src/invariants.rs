//! Assertions over generated rounds and constraint state.

use std::collections::BTreeSet;

use pairforge_core::{ConstraintState, CourtLayout, PlayerId, Round, PLAYERS_PER_COURT};

/// Asserts that `round` places every player of `pool` exactly once.
///
/// Also checks the court arithmetic: playing count is four per used court
/// and the bye count is what [`CourtLayout`] predicts for `courts`.
pub fn assert_round_covers_pool(round: &Round, pool: &[PlayerId], courts: usize) {
    let named: Vec<PlayerId> = round.participants().collect();
    let unique: BTreeSet<PlayerId> = named.iter().copied().collect();
    assert_eq!(unique.len(), named.len(), "player named twice in {:?}", round);

    let expected: BTreeSet<PlayerId> = pool.iter().copied().collect();
    assert_eq!(unique, expected, "round does not cover the pool exactly");

    let layout = CourtLayout::new(pool.len(), courts);
    assert_eq!(round.courts_used(), layout.courts_used);
    assert_eq!(round.playing().count(), round.courts_used() * PLAYERS_PER_COURT);
    assert_eq!(round.byes().len(), layout.byes_per_round);

    for m in round.matches() {
        for team in [m.team1(), m.team2()] {
            assert_ne!(team.first(), team.second(), "team with one player twice");
        }
    }
}

/// Asserts that no round in `rounds` names a player outside `allowed`.
pub fn assert_rounds_use_only(rounds: &[Round], allowed: &[PlayerId]) {
    let allowed: BTreeSet<PlayerId> = allowed.iter().copied().collect();
    for (index, round) in rounds.iter().enumerate() {
        for player in round.participants() {
            assert!(
                allowed.contains(&player),
                "round {} names player {} outside the allowed set",
                index,
                player
            );
        }
    }
}

/// Asserts that both counter matrices are symmetric.
pub fn assert_state_symmetric(state: &ConstraintState) {
    let population = state.population();
    for a in population.players() {
        for b in population.players() {
            assert_eq!(state.partner_count(a, b), state.partner_count(b, a));
            assert_eq!(state.opponent_count(a, b), state.opponent_count(b, a));
        }
    }
}

/// Asserts that every two distinct players of `players` partnered exactly once.
pub fn assert_every_pair_partnered_once(state: &ConstraintState, players: &[PlayerId]) {
    for (i, &a) in players.iter().enumerate() {
        for &b in &players[i + 1..] {
            assert_eq!(
                state.partner_count(a, b),
                1,
                "players {} and {} partnered {} times",
                a,
                b,
                state.partner_count(a, b)
            );
        }
    }
}
