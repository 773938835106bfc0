//! Partner, opponent and bye bookkeeping for one tournament.

use super::matrix::PairMatrix;
use crate::domain::{PlayerId, Population, Round};
use crate::error::{PairForgeError, Result};

/// Constraint state derived from committed rounds.
///
/// Counters only ever grow through [`ConstraintState::record_round`]. To undo
/// history, build a fresh state with [`ConstraintState::replay`] over the
/// rounds that remain; there is no decrement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    population: Population,
    partners: PairMatrix,
    opponents: PairMatrix,
    bye_counts: Vec<u32>,
    last_bye: Vec<Option<usize>>,
}

impl ConstraintState {
    /// Creates an empty state for the population.
    pub fn new(population: Population) -> Self {
        let n = population.size();
        ConstraintState {
            population,
            partners: PairMatrix::new(n),
            opponents: PairMatrix::new(n),
            bye_counts: vec![0; n],
            last_bye: vec![None; n],
        }
    }

    /// Rebuilds a state from scratch by recording `rounds` in order.
    ///
    /// Round `i` of the slice is recorded as round index `i`.
    pub fn replay(population: Population, rounds: &[Round]) -> Result<Self> {
        let mut state = ConstraintState::new(population);
        for (index, round) in rounds.iter().enumerate() {
            state.record_round(index, round)?;
        }
        Ok(state)
    }

    /// Reassembles a state from exported parts.
    ///
    /// # Errors
    ///
    /// Returns [`PairForgeError::InvalidSnapshot`] if any part does not match
    /// the population size or a matrix is not symmetric.
    pub fn from_parts(
        population: Population,
        partners: PairMatrix,
        opponents: PairMatrix,
        bye_counts: Vec<u32>,
        last_bye: Vec<Option<usize>>,
    ) -> Result<Self> {
        let n = population.size();
        let check = |what: &str, len: usize| {
            if len == n {
                Ok(())
            } else {
                Err(PairForgeError::InvalidSnapshot(format!(
                    "{} has {} entries, population is {}",
                    what, len, n
                )))
            }
        };
        check("partner matrix", partners.size())?;
        check("opponent matrix", opponents.size())?;
        check("bye counts", bye_counts.len())?;
        check("last bye rounds", last_bye.len())?;
        if !partners.is_symmetric() || !opponents.is_symmetric() {
            return Err(PairForgeError::InvalidSnapshot(
                "counter matrices must be symmetric".to_string(),
            ));
        }
        Ok(ConstraintState {
            population,
            partners,
            opponents,
            bye_counts,
            last_bye,
        })
    }

    /// Applies one committed round to the counters.
    ///
    /// The round is validated first; on error nothing is changed.
    pub fn record_round(&mut self, round_index: usize, round: &Round) -> Result<()> {
        round.validate(round_index, self.population.size())?;

        for m in round.matches() {
            for team in [m.team1(), m.team2()] {
                self.partners.increment(team.first(), team.second());
            }
            for (a, b) in m.opponent_pairs() {
                self.opponents.increment(a, b);
            }
        }
        for &player in round.byes() {
            self.bye_counts[player.index()] += 1;
            self.last_bye[player.index()] = Some(round_index);
        }
        Ok(())
    }

    #[inline]
    pub fn population(&self) -> Population {
        self.population
    }

    #[inline]
    pub fn partner_count(&self, a: PlayerId, b: PlayerId) -> u32 {
        self.partners.get(a, b)
    }

    #[inline]
    pub fn opponent_count(&self, a: PlayerId, b: PlayerId) -> u32 {
        self.opponents.get(a, b)
    }

    #[inline]
    pub fn bye_count(&self, player: PlayerId) -> u32 {
        self.bye_counts[player.index()]
    }

    /// Round index of the player's most recent bye, if any.
    #[inline]
    pub fn last_bye_round(&self, player: PlayerId) -> Option<usize> {
        self.last_bye[player.index()]
    }

    pub fn partners(&self) -> &PairMatrix {
        &self.partners
    }

    pub fn opponents(&self) -> &PairMatrix {
        &self.opponents
    }

    pub fn bye_counts(&self) -> &[u32] {
        &self.bye_counts
    }

    pub fn last_bye_rounds(&self) -> &[Option<usize>] {
        &self.last_bye
    }

    /// Number of players in `pool` (other than `player`) never partnered with `player`.
    pub fn fresh_partner_count(&self, player: PlayerId, pool: &[PlayerId]) -> usize {
        pool.iter()
            .filter(|&&other| other != player && self.partner_count(player, other) == 0)
            .count()
    }
}
