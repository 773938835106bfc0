//! Schedule engine: drives the round generator across a tournament.
//!
//! Logging levels:
//! - **INFO**: build start/end
//! - **WARN**: early stop
//! - **DEBUG**: each round (from [`RoundGenerator`])

use std::collections::BTreeSet;
use std::fmt::Write as _;

use pairforge_config::TournamentConfig;
use pairforge_core::{
    ConstraintState, CourtLayout, PairForgeError, PlayerId, Population, Result, Round, Schedule,
    ScheduleStatistics, MIN_PLAYERS,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::round::RoundGenerator;
use crate::stats::GenerationStats;

/// Outcome of [`ScheduleEngine::build`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    /// Rounds asked for, after clamping to the population ceiling.
    pub requested: usize,
    /// Rounds actually committed.
    pub achieved: usize,
    /// True if generation stopped before `requested`.
    pub exhausted: bool,
    pub statistics: ScheduleStatistics,
    pub acceptable: bool,
}

/// Owns one tournament: configuration, committed schedule and the
/// constraint state derived from it.
///
/// # Example
///
/// ```
/// use pairforge_config::TournamentConfig;
/// use pairforge_solver::ScheduleEngine;
///
/// let mut engine = ScheduleEngine::new(TournamentConfig::new(8, 2)).unwrap();
/// let report = engine.build().unwrap();
///
/// assert_eq!(report.achieved, 7);
/// assert_eq!(report.statistics.max_partner_repeat, 1);
/// assert!(report.acceptable);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleEngine {
    pub(crate) config: TournamentConfig,
    pub(crate) population: Population,
    pub(crate) generator: RoundGenerator,
    pub(crate) state: ConstraintState,
    pub(crate) schedule: Schedule,
    pub(crate) withdrawn: BTreeSet<PlayerId>,
    pub(crate) target_rounds: usize,
    pub(crate) stats: GenerationStats,
}

impl ScheduleEngine {
    /// Creates an engine with an empty schedule.
    ///
    /// # Errors
    ///
    /// [`PairForgeError::PopulationTooSmall`] and [`PairForgeError::NoCourts`]
    /// for an unplayable setup, [`PairForgeError::Config`] for any other
    /// rejected setting.
    pub fn new(config: TournamentConfig) -> Result<Self> {
        let population = Population::new(config.population)?;
        let generator = RoundGenerator::from_config(&config)?;
        config
            .validate()
            .map_err(|e| PairForgeError::Config(e.to_string()))?;

        Ok(ScheduleEngine {
            target_rounds: config.target_rounds(),
            state: ConstraintState::new(population),
            schedule: Schedule::new(),
            withdrawn: BTreeSet::new(),
            stats: GenerationStats::default(),
            config,
            population,
            generator,
        })
    }

    /// Creates an engine and builds its schedule.
    pub fn build_from(config: TournamentConfig) -> Result<Self> {
        let mut engine = Self::new(config)?;
        engine.build()?;
        Ok(engine)
    }

    /// Generates the schedule from round 0 over the active players.
    ///
    /// Any committed rounds are discarded. Withdrawn players stay withdrawn;
    /// see [`ScheduleEngine::reset`] to start over with everybody.
    pub fn build(&mut self) -> Result<BuildReport> {
        let active = self.active_players();
        if active.len() < MIN_PLAYERS {
            return Err(PairForgeError::TooFewActivePlayers {
                remaining: active.len(),
                minimum: MIN_PLAYERS,
            });
        }

        let requested = self.config.target_rounds();
        info!(
            event = "build_start",
            population = self.population.size(),
            active = active.len(),
            courts = self.config.courts,
            rounds = requested,
        );

        let mut state = ConstraintState::new(self.population);
        let mut schedule = Schedule::new();
        let mut stats = GenerationStats::default();
        stats.start();
        let exhausted = extend_schedule(
            &self.generator,
            &mut state,
            &mut schedule,
            requested,
            &active,
            &mut stats,
        )?;

        self.state = state;
        self.schedule = schedule;
        self.stats = stats;
        self.target_rounds = requested;

        let statistics = self.statistics();
        let acceptable = statistics.is_acceptable(&self.config.acceptance);
        info!(
            event = "build_end",
            rounds = self.schedule.len(),
            requested = requested,
            relaxed_rounds = self.stats.relaxed_rounds,
            duration_ms = self.stats.elapsed().as_millis() as u64,
            acceptable = acceptable,
        );

        Ok(BuildReport {
            requested,
            achieved: self.schedule.len(),
            exhausted,
            statistics,
            acceptable,
        })
    }

    /// Reinstates every withdrawn player and builds from scratch.
    pub fn reset(&mut self) -> Result<BuildReport> {
        self.withdrawn.clear();
        self.build()
    }

    /// Statistics over the committed schedule.
    ///
    /// Bye figures cover the active players only.
    pub fn statistics(&self) -> ScheduleStatistics {
        ScheduleStatistics::compute(
            &self.state,
            self.schedule.rounds(),
            &self.active_players(),
            &self.config.acceptance,
        )
    }

    /// Validity predicate over the current statistics.
    pub fn is_acceptable(&self) -> bool {
        self.statistics().is_acceptable(&self.config.acceptance)
    }

    /// Recomputes the constraint state by replaying every committed round.
    pub fn rebuild_state(&mut self) -> Result<()> {
        self.state = ConstraintState::replay(self.population, self.schedule.rounds())?;
        Ok(())
    }

    /// Players not withdrawn, in index order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.population
            .players()
            .filter(|p| !self.withdrawn.contains(p))
            .collect()
    }

    /// Withdrawn players, in index order.
    pub fn withdrawn_players(&self) -> Vec<PlayerId> {
        self.withdrawn.iter().copied().collect()
    }

    pub fn is_withdrawn(&self, player: PlayerId) -> bool {
        self.withdrawn.contains(&player)
    }

    /// Court arithmetic for the current active population.
    pub fn court_layout(&self) -> CourtLayout {
        self.generator.layout(self.population.size() - self.withdrawn.len())
    }

    /// Human-readable listing of every round followed by the statistics.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let first_court = self.config.first_court as usize;
        for (index, round) in self.schedule.iter().enumerate() {
            let _ = writeln!(out, "Round {}", index + 1);
            for (court, m) in round.matches().iter().enumerate() {
                let _ = writeln!(out, "  Court {}: {}", first_court + court, m);
            }
            if !round.byes().is_empty() {
                let byes: Vec<String> = round.byes().iter().map(|p| p.to_string()).collect();
                let _ = writeln!(out, "  Byes: {}", byes.join(", "));
            }
        }
        let statistics = self.statistics();
        let _ = writeln!(out, "{}", statistics);
        let verdict = if statistics.is_acceptable(&self.config.acceptance) {
            "acceptable"
        } else {
            "not acceptable"
        };
        let _ = write!(out, "Schedule is {}", verdict);
        out
    }

    #[inline]
    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    #[inline]
    pub fn population(&self) -> Population {
        self.population
    }

    #[inline]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    #[inline]
    pub fn rounds(&self) -> &[Round] {
        self.schedule.rounds()
    }

    #[inline]
    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    #[inline]
    pub fn generator(&self) -> &RoundGenerator {
        &self.generator
    }

    /// Round count the last build or regeneration aimed for.
    #[inline]
    pub fn target_rounds(&self) -> usize {
        self.target_rounds
    }

    /// Counters of the last build or regeneration.
    #[inline]
    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }
}

/// Appends rounds to `schedule` until it holds `total`, or the generator
/// runs dry. Returns true on an early stop.
pub(crate) fn extend_schedule(
    generator: &RoundGenerator,
    state: &mut ConstraintState,
    schedule: &mut Schedule,
    total: usize,
    pool: &[PlayerId],
    stats: &mut GenerationStats,
) -> Result<bool> {
    while schedule.len() < total {
        let index = schedule.len();
        match generator.generate(state, index, pool)? {
            Some(generated) => {
                stats.record_round(generated.relaxed);
                schedule.push(generated.round);
            }
            None => {
                warn!(
                    event = "exhausted",
                    round = index,
                    requested = total,
                    achieved = schedule.len(),
                );
                stats.record_exhaustion();
                return Ok(true);
            }
        }
    }
    Ok(false)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
