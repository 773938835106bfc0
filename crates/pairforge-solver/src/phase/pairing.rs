//! Phase 2: split the playing players into teams.
//!
//! A strict pass looks for teams of players who never partnered, using a
//! minimum-remaining-values greedy: the player with the fewest fresh
//! partners is served first and takes the fresh partner who is itself the
//! most constrained. If some player runs out of fresh partners the whole
//! pass is dropped and a relaxed pass pairs players in index order with
//! their least-repeated partner.

use pairforge_core::{ConstraintState, PairForgeError, PlayerId, Result, Team};
use tracing::trace;

/// Teams formed for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    /// Teams in the order they were formed.
    pub teams: Vec<Team>,
    /// True if the relaxed pass had to allow partner repeats.
    pub relaxed: bool,
}

/// Pairs every player of `active` with exactly one partner.
///
/// `active` is processed in index order regardless of how it is passed in.
/// Returns `Ok(None)` if no pairing exists even after relaxation.
///
/// # Errors
///
/// Returns [`PairForgeError::EmptyPool`] for an empty pool and
/// [`PairForgeError::OddActivePopulation`] for an odd one.
pub fn form_pairs(state: &ConstraintState, active: &[PlayerId]) -> Result<Option<Pairing>> {
    if active.is_empty() {
        return Err(PairForgeError::EmptyPool);
    }
    if active.len() % 2 != 0 {
        return Err(PairForgeError::OddActivePopulation(active.len()));
    }

    let mut ordered = active.to_vec();
    ordered.sort_unstable();

    if let Some(teams) = strict_pass(state, &ordered)? {
        return Ok(Some(Pairing {
            teams,
            relaxed: false,
        }));
    }
    Ok(relaxed_pass(state, &ordered)?.map(|teams| Pairing {
        teams,
        relaxed: true,
    }))
}

fn fresh_candidates<'a>(
    state: &'a ConstraintState,
    player: PlayerId,
    available: &'a [PlayerId],
) -> impl Iterator<Item = PlayerId> + 'a {
    available
        .iter()
        .copied()
        .filter(move |&other| other != player && state.partner_count(player, other) == 0)
}

fn strict_pass(state: &ConstraintState, ordered: &[PlayerId]) -> Result<Option<Vec<Team>>> {
    let mut available = ordered.to_vec();
    let mut teams = Vec::with_capacity(available.len() / 2);

    while !available.is_empty() {
        let Some((player, options)) = available
            .iter()
            .map(|&p| (p, state.fresh_partner_count(p, &available)))
            .min_by_key(|&(_, options)| options)
        else {
            return Ok(None);
        };
        if options == 0 {
            trace!(player = player.index(), "no fresh partner left, dropping strict pass");
            return Ok(None);
        }

        // Fresh partner with the fewest fresh options once `player` is gone.
        let Some(partner) = fresh_candidates(state, player, &available).min_by_key(|&candidate| {
            fresh_candidates(state, candidate, &available)
                .filter(|&m| m != player)
                .count()
        }) else {
            return Ok(None);
        };

        teams.push(Team::new(player, partner)?);
        available.retain(|&p| p != player && p != partner);
    }

    Ok(Some(teams))
}

fn relaxed_pass(state: &ConstraintState, ordered: &[PlayerId]) -> Result<Option<Vec<Team>>> {
    let mut available = ordered.to_vec();
    let mut teams = Vec::with_capacity(available.len() / 2);

    while !available.is_empty() {
        let player = available.remove(0);
        let Some(partner) = available
            .iter()
            .copied()
            .min_by_key(|&candidate| state.partner_count(player, candidate))
        else {
            return Ok(None);
        };

        teams.push(Team::new(player, partner)?);
        available.retain(|&p| p != partner);
    }

    Ok(Some(teams))
}
