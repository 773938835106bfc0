//! Withdrawal and regeneration of the unplayed suffix.
//!
//! Rounds before the cut are kept as they are. The constraint state is
//! rebuilt by replaying that prefix and the rest of the schedule is
//! generated again over the players who remain.

use std::collections::BTreeSet;

use pairforge_core::{
    ConstraintState, PairForgeError, PlayerId, Result, ScheduleStatistics, MIN_PLAYERS,
};
use serde::Serialize;
use tracing::info;

use crate::engine::{extend_schedule, ScheduleEngine};
use crate::stats::GenerationStats;

/// Players leaving the tournament from a given round on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalRequest {
    /// First round to regenerate; rounds before it are kept.
    pub cut_round: usize,
    /// Players to remove. May be empty to regenerate without a withdrawal.
    pub withdrawing: Vec<PlayerId>,
    /// New total round count; the current target if `None`.
    pub total_rounds: Option<usize>,
}

impl WithdrawalRequest {
    pub fn new(cut_round: usize, withdrawing: impl IntoIterator<Item = PlayerId>) -> Self {
        WithdrawalRequest {
            cut_round,
            withdrawing: withdrawing.into_iter().collect(),
            total_rounds: None,
        }
    }

    pub fn with_total_rounds(mut self, total_rounds: usize) -> Self {
        self.total_rounds = Some(total_rounds);
        self
    }
}

/// Outcome of [`ScheduleEngine::regenerate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegenerationReport {
    /// One-line description of what happened.
    pub summary: String,
    pub cut_round: usize,
    /// Total rounds aimed for, kept prefix included.
    pub requested: usize,
    /// Total rounds now in the schedule, kept prefix included.
    pub achieved: usize,
    /// True if generation stopped before `requested`.
    pub exhausted: bool,
    pub active: Vec<PlayerId>,
    pub withdrawn: Vec<PlayerId>,
    pub statistics: ScheduleStatistics,
    pub acceptable: bool,
}

impl ScheduleEngine {
    /// Withdraws players and regenerates every round from the cut on.
    ///
    /// Withdrawn players accumulate across calls. Nothing changes if the
    /// request is rejected.
    ///
    /// # Errors
    ///
    /// - [`PairForgeError::InvalidCutRound`] if the cut is not a committed round
    /// - [`PairForgeError::PlayerOutOfRange`] for an unknown player
    /// - [`PairForgeError::TooFewActivePlayers`] if fewer than four would remain
    /// - [`PairForgeError::InvalidRoundCount`] if the new total is below the cut
    ///
    /// # Example
    ///
    /// ```
    /// use pairforge_config::TournamentConfig;
    /// use pairforge_core::PlayerId;
    /// use pairforge_solver::{ScheduleEngine, WithdrawalRequest};
    ///
    /// let mut engine = ScheduleEngine::build_from(TournamentConfig::new(12, 3).with_rounds(10)).unwrap();
    /// let request = WithdrawalRequest::new(3, [PlayerId::new(4), PlayerId::new(9)]);
    /// let report = engine.regenerate(&request).unwrap();
    ///
    /// assert_eq!(report.achieved, 10);
    /// assert_eq!(report.active.len(), 10);
    /// assert_eq!(report.withdrawn, vec![PlayerId::new(4), PlayerId::new(9)]);
    /// ```
    pub fn regenerate(&mut self, request: &WithdrawalRequest) -> Result<RegenerationReport> {
        let committed = self.schedule.len();
        let cut = request.cut_round;
        if cut >= committed {
            return Err(PairForgeError::InvalidCutRound {
                cut,
                rounds: committed,
            });
        }

        let mut withdrawn: BTreeSet<PlayerId> = self.withdrawn.clone();
        for &player in &request.withdrawing {
            self.population.check(player)?;
            withdrawn.insert(player);
        }

        let active: Vec<PlayerId> = self
            .population
            .players()
            .filter(|p| !withdrawn.contains(p))
            .collect();
        if active.len() < MIN_PLAYERS {
            return Err(PairForgeError::TooFewActivePlayers {
                remaining: active.len(),
                minimum: MIN_PLAYERS,
            });
        }

        let total = request.total_rounds.unwrap_or(self.target_rounds);
        if total < cut {
            return Err(PairForgeError::InvalidRoundCount {
                requested: total,
                retained: cut,
            });
        }

        let mut schedule = self.schedule.clone();
        schedule.retain_prefix(cut);
        let mut state = ConstraintState::replay(self.population, schedule.rounds())?;

        let layout = self.generator.layout(active.len());
        info!(
            event = "regenerate_start",
            cut_round = cut,
            withdrawing = request.withdrawing.len(),
            active = active.len(),
            courts = layout.courts_used,
            byes = layout.byes_per_round,
            rounds = total,
        );

        let mut stats = GenerationStats::default();
        stats.start();
        let exhausted = extend_schedule(
            &self.generator,
            &mut state,
            &mut schedule,
            total,
            &active,
            &mut stats,
        )?;

        self.state = state;
        self.schedule = schedule;
        self.withdrawn = withdrawn;
        self.target_rounds = total;
        self.stats = stats;

        let statistics = self.statistics();
        let acceptable = statistics.is_acceptable(&self.config.acceptance);
        let achieved = self.schedule.len();
        info!(
            event = "regenerate_end",
            rounds = achieved,
            requested = total,
            relaxed_rounds = self.stats.relaxed_rounds,
            duration_ms = self.stats.elapsed().as_millis() as u64,
            acceptable = acceptable,
        );

        let summary = if achieved > cut {
            format!(
                "Rounds {}-{} regenerated for {} active players ({} withdrawn); {} of {} rounds scheduled",
                cut + 1,
                achieved,
                active.len(),
                self.withdrawn.len(),
                achieved,
                total
            )
        } else {
            format!(
                "Schedule truncated to {} rounds for {} active players ({} withdrawn); {} of {} rounds scheduled",
                achieved,
                active.len(),
                self.withdrawn.len(),
                achieved,
                total
            )
        };

        Ok(RegenerationReport {
            summary,
            cut_round: cut,
            requested: total,
            achieved,
            exhausted,
            active,
            withdrawn: self.withdrawn_players(),
            statistics,
            acceptable,
        })
    }

    /// Removes `player` from the withdrawn set.
    ///
    /// Returns false if the player was not withdrawn. No round is generated;
    /// call [`ScheduleEngine::regenerate`] to bring the player back on court.
    pub fn reinstate(&mut self, player: PlayerId) -> bool {
        self.withdrawn.remove(&player)
    }
}

#[cfg(test)]
#[path = "regenerate_tests.rs"]
mod tests;
