//! Full engine state export and import.
//!
//! A snapshot carries the configuration, the committed rounds and every
//! counter, so a host can resume without replaying. [`ScheduleEngine::rebuild_state`]
//! is the replay alternative.

use std::collections::BTreeSet;

use pairforge_config::TournamentConfig;
use pairforge_core::{
    ConstraintState, PairForgeError, PairMatrix, PlayerId, Result, Round, Schedule, MIN_PLAYERS,
};
use serde::{Deserialize, Serialize};

use crate::engine::ScheduleEngine;
use crate::stats::GenerationStats;

/// Serializable image of a [`ScheduleEngine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: TournamentConfig,
    pub target_rounds: usize,
    pub rounds: Vec<Round>,
    pub partner_counts: Vec<Vec<u32>>,
    pub opponent_counts: Vec<Vec<u32>>,
    pub bye_counts: Vec<u32>,
    pub last_bye_rounds: Vec<Option<usize>>,
    pub withdrawn: Vec<PlayerId>,
}

impl EngineSnapshot {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PairForgeError::InvalidSnapshot(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PairForgeError::InvalidSnapshot(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PairForgeError::InvalidSnapshot(e.to_string()))
    }
}

impl ScheduleEngine {
    /// Exports configuration, rounds and counters.
    pub fn export_snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config.clone(),
            target_rounds: self.target_rounds,
            rounds: self.schedule.rounds().to_vec(),
            partner_counts: self.state.partners().rows(),
            opponent_counts: self.state.opponents().rows(),
            bye_counts: self.state.bye_counts().to_vec(),
            last_bye_rounds: self.state.last_bye_rounds().to_vec(),
            withdrawn: self.withdrawn_players(),
        }
    }

    /// Restores an engine from a snapshot without replaying its rounds.
    ///
    /// The counters are taken as they are once their shape checks out. Call
    /// [`ScheduleEngine::rebuild_state`] afterwards to recompute them from
    /// the rounds instead.
    ///
    /// # Errors
    ///
    /// Configuration errors as for [`ScheduleEngine::new`], a structural
    /// error for any invalid round or withdrawn id, and
    /// [`PairForgeError::InvalidSnapshot`] for inconsistent counters.
    pub fn from_snapshot(snapshot: EngineSnapshot) -> Result<Self> {
        let mut engine = ScheduleEngine::new(snapshot.config)?;
        let population = engine.population;

        for (index, round) in snapshot.rounds.iter().enumerate() {
            round.validate(index, population.size())?;
        }
        let mut withdrawn = BTreeSet::new();
        for player in snapshot.withdrawn {
            withdrawn.insert(population.check(player)?);
        }
        let active = population.size() - withdrawn.len();
        if active < MIN_PLAYERS {
            return Err(PairForgeError::InvalidSnapshot(format!(
                "only {} active players left",
                active
            )));
        }

        engine.state = ConstraintState::from_parts(
            population,
            PairMatrix::from_rows(&snapshot.partner_counts)?,
            PairMatrix::from_rows(&snapshot.opponent_counts)?,
            snapshot.bye_counts,
            snapshot.last_bye_rounds,
        )?;
        engine.schedule = Schedule::from_rounds(snapshot.rounds);
        engine.withdrawn = withdrawn;
        engine.target_rounds = snapshot.target_rounds;
        engine.stats = GenerationStats::default();
        Ok(engine)
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
