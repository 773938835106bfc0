//! Phase 1: choose who rests this round.

use pairforge_config::ByeWeighting;
use pairforge_core::{ConstraintState, PlayerId};

/// Bye priority of a player at `round_index`; lower rests first.
///
/// Fewest past byes dominates; among equals, the player who rested longest
/// ago (or never) goes first. Arithmetic saturates at the `i64` bounds.
pub fn bye_priority(
    state: &ConstraintState,
    player: PlayerId,
    round_index: usize,
    weighting: &ByeWeighting,
) -> i64 {
    let last = state
        .last_bye_round(player)
        .map_or(weighting.never_rested_offset.saturating_neg(), |r| r as i64);
    let distance = (round_index as i64).saturating_sub(last);
    i64::from(state.bye_count(player))
        .saturating_mul(weighting.count_weight)
        .saturating_sub(distance)
}

/// Picks `count` players from `pool` to sit out, returned in index order.
///
/// Ties on priority go to the lower index.
pub fn select_byes(
    state: &ConstraintState,
    round_index: usize,
    pool: &[PlayerId],
    count: usize,
    weighting: &ByeWeighting,
) -> Vec<PlayerId> {
    if count == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(i64, PlayerId)> = pool
        .iter()
        .map(|&p| (bye_priority(state, p, round_index, weighting), p))
        .collect();
    ranked.sort_unstable();

    let mut byes: Vec<PlayerId> = ranked.into_iter().take(count).map(|(_, p)| p).collect();
    byes.sort_unstable();
    byes
}
