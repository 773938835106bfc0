//! Compact builders for test data.

use pairforge_core::{Match, PlayerId, Round, Team};

/// Shorthand for `PlayerId::new`.
pub fn p(index: usize) -> PlayerId {
    PlayerId::new(index)
}

/// Players `0..count` in index order.
pub fn players(count: usize) -> Vec<PlayerId> {
    (0..count).map(PlayerId::new).collect()
}

/// A team of two distinct indices.
///
/// # Panics
///
/// Panics if `a == b`.
pub fn team(a: usize, b: usize) -> Team {
    Team::new(p(a), p(b)).expect("fixture team must hold distinct players")
}

/// Builds a round from `[a, b, c, d]` courts (team `a-b` against `c-d`) and byes.
pub fn round_of(courts: &[[usize; 4]], byes: &[usize]) -> Round {
    Round::new(
        courts
            .iter()
            .map(|&[a, b, c, d]| Match::new(team(a, b), team(c, d)))
            .collect(),
        byes.iter().copied().map(p).collect(),
    )
}
