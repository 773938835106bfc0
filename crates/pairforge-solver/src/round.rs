//! One-round generation.
//!
//! [`RoundGenerator`] chains the three phases (byes, pairing, matching) and
//! commits the result into the [`ConstraintState`]. The same generator serves
//! the initial build and the regeneration of a suffix after withdrawals.
//!
//! Logging levels:
//! - **DEBUG**: each committed round
//! - **WARN**: relaxed pairing, no round produced

use pairforge_config::{ByeWeighting, OpponentPenalty, TournamentConfig};
use pairforge_core::{
    ConstraintState, CourtLayout, PairForgeError, PlayerId, Result, Round, MIN_PLAYERS,
};
use tracing::{debug, warn};

use crate::phase::{form_matches, form_pairs, select_byes};

/// A round produced by [`RoundGenerator::generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRound {
    pub round: Round,
    /// True if some team repeats an earlier partnership.
    pub relaxed: bool,
}

/// Produces one round at a time for a pool of active players.
///
/// # Example
///
/// ```
/// use pairforge_core::{ConstraintState, PlayerId, Population};
/// use pairforge_solver::RoundGenerator;
///
/// let population = Population::new(9).unwrap();
/// let mut state = ConstraintState::new(population);
/// let pool: Vec<PlayerId> = population.players().collect();
///
/// let generator = RoundGenerator::new(2).unwrap();
/// let generated = generator.generate(&mut state, 0, &pool).unwrap().unwrap();
///
/// assert_eq!(generated.round.courts_used(), 2);
/// assert_eq!(generated.round.byes(), &[PlayerId::new(0)]);
/// assert_eq!(state.bye_count(PlayerId::new(0)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundGenerator {
    courts: usize,
    bye_weighting: ByeWeighting,
    opponent_penalty: OpponentPenalty,
}

impl RoundGenerator {
    /// Creates a generator with default weights.
    ///
    /// # Errors
    ///
    /// Returns [`PairForgeError::NoCourts`] if `courts` is zero.
    pub fn new(courts: usize) -> Result<Self> {
        if courts == 0 {
            return Err(PairForgeError::NoCourts);
        }
        Ok(RoundGenerator {
            courts,
            bye_weighting: ByeWeighting::default(),
            opponent_penalty: OpponentPenalty::default(),
        })
    }

    /// Creates a generator from the courts and weights of a configuration.
    pub fn from_config(config: &TournamentConfig) -> Result<Self> {
        Ok(RoundGenerator {
            bye_weighting: config.bye_weighting,
            opponent_penalty: config.opponent_penalty,
            ..Self::new(config.courts)?
        })
    }

    pub fn with_bye_weighting(mut self, weighting: ByeWeighting) -> Self {
        self.bye_weighting = weighting;
        self
    }

    pub fn with_opponent_penalty(mut self, penalty: OpponentPenalty) -> Self {
        self.opponent_penalty = penalty;
        self
    }

    #[inline]
    pub fn courts(&self) -> usize {
        self.courts
    }

    /// Court and bye arithmetic for `active` players.
    pub fn layout(&self, active: usize) -> CourtLayout {
        CourtLayout::new(active, self.courts)
    }

    /// Generates and commits round `round_index` for `pool`.
    ///
    /// Returns `Ok(None)` when no round can be produced even with relaxed
    /// pairing; `state` is then left untouched.
    ///
    /// # Errors
    ///
    /// Precondition failures: an id outside the population, a player listed
    /// twice, or a pool too small to fill one court.
    pub fn generate(
        &self,
        state: &mut ConstraintState,
        round_index: usize,
        pool: &[PlayerId],
    ) -> Result<Option<GeneratedRound>> {
        let population = state.population();
        let mut pool = pool.to_vec();
        pool.sort_unstable();
        for (i, &player) in pool.iter().enumerate() {
            population.check(player)?;
            if i > 0 && pool[i - 1] == player {
                return Err(PairForgeError::DuplicatePlayer(player.index(), round_index));
            }
        }

        let layout = self.layout(pool.len());
        if layout.courts_used == 0 {
            return Err(PairForgeError::TooFewActivePlayers {
                remaining: pool.len(),
                minimum: MIN_PLAYERS,
            });
        }

        let byes = select_byes(
            state,
            round_index,
            &pool,
            layout.byes_per_round,
            &self.bye_weighting,
        );
        let playing: Vec<PlayerId> = pool
            .iter()
            .copied()
            .filter(|p| byes.binary_search(p).is_err())
            .collect();

        let Some(pairing) = form_pairs(state, &playing)? else {
            warn!(event = "no_pairing", round = round_index, players = playing.len());
            return Ok(None);
        };
        if pairing.relaxed {
            warn!(
                event = "relaxed_pairing",
                round = round_index,
                players = playing.len(),
            );
        }

        let Some(matches) = form_matches(state, &pairing.teams, &self.opponent_penalty) else {
            warn!(event = "no_matching", round = round_index, teams = pairing.teams.len());
            return Ok(None);
        };

        let round = Round::new(matches, byes);
        state.record_round(round_index, &round)?;

        debug!(
            event = "round",
            round = round_index,
            courts = round.courts_used(),
            byes = round.byes().len(),
            relaxed = pairing.relaxed,
        );

        Ok(Some(GeneratedRound {
            round,
            relaxed: pairing.relaxed,
        }))
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod tests;
