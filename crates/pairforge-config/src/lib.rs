//! Configuration system for PairForge.
//!
//! Load tournament configuration from TOML or YAML to control the
//! population, courts, round count and the fairness weights without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use pairforge_config::TournamentConfig;
//!
//! let config = TournamentConfig::from_toml_str(r#"
//!     population = 12
//!     courts = 3
//!     rounds = 10
//!
//!     [opponent_penalty]
//!     twice = 200
//! "#).unwrap();
//!
//! assert_eq!(config.target_rounds(), 10);
//! assert_eq!(config.opponent_penalty.twice, 200);
//! assert_eq!(config.opponent_penalty.once, 10);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use pairforge_config::TournamentConfig;
//!
//! let config = TournamentConfig::load("pairforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use pairforge_core::{Population, MIN_PLAYERS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use pairforge_core::AcceptanceCriteria;

/// Default number of players.
pub const DEFAULT_POPULATION: usize = 8;

/// Default number of courts.
pub const DEFAULT_COURTS: usize = 7;

/// Largest accepted value for either bye weight.
pub const MAX_BYE_WEIGHT: i64 = 1_000_000_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main tournament configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TournamentConfig {
    /// Number of players in the tournament.
    #[serde(default = "default_population")]
    pub population: usize,

    /// Number of courts available each round.
    #[serde(default = "default_courts")]
    pub courts: usize,

    /// Requested number of rounds; `None` means as many as possible.
    #[serde(default)]
    pub rounds: Option<usize>,

    /// Number printed on the first court.
    #[serde(default = "default_first_court")]
    pub first_court: u32,

    /// Bye selection weights.
    #[serde(default)]
    pub bye_weighting: ByeWeighting,

    /// Opponent repeat penalties used when forming matches.
    #[serde(default)]
    pub opponent_penalty: OpponentPenalty,

    /// Thresholds for the validity predicate.
    #[serde(default)]
    pub acceptance: AcceptanceCriteria,
}

fn default_population() -> usize {
    DEFAULT_POPULATION
}

fn default_courts() -> usize {
    DEFAULT_COURTS
}

fn default_first_court() -> u32 {
    1
}

impl Default for TournamentConfig {
    fn default() -> Self {
        TournamentConfig {
            population: DEFAULT_POPULATION,
            courts: DEFAULT_COURTS,
            rounds: None,
            first_court: default_first_court(),
            bye_weighting: ByeWeighting::default(),
            opponent_penalty: OpponentPenalty::default(),
            acceptance: AcceptanceCriteria::default(),
        }
    }
}

impl TournamentConfig {
    /// Creates a configuration for `population` players on `courts` courts.
    pub fn new(population: usize, courts: usize) -> Self {
        TournamentConfig {
            population,
            courts,
            ..Self::default()
        }
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` files are read as YAML, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or fails to parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
        if is_yaml {
            Self::from_yaml_file(path)
        } else {
            Self::from_toml_file(path)
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Serializes the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Sets the requested round count.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = Some(rounds);
        self
    }

    /// Sets the number of the first court.
    pub fn with_first_court(mut self, first_court: u32) -> Self {
        self.first_court = first_court;
        self
    }

    /// Replaces the bye weighting.
    pub fn with_bye_weighting(mut self, weighting: ByeWeighting) -> Self {
        self.bye_weighting = weighting;
        self
    }

    /// Replaces the opponent penalties.
    pub fn with_opponent_penalty(mut self, penalty: OpponentPenalty) -> Self {
        self.opponent_penalty = penalty;
        self
    }

    /// Replaces the acceptance thresholds.
    pub fn with_acceptance(mut self, acceptance: AcceptanceCriteria) -> Self {
        self.acceptance = acceptance;
        self
    }

    /// Checks that the configuration describes a playable tournament.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population < MIN_PLAYERS {
            return Err(ConfigError::Invalid(format!(
                "population must be at least {}, got {}",
                MIN_PLAYERS, self.population
            )));
        }
        if self.courts == 0 {
            return Err(ConfigError::Invalid("courts must be at least 1".to_string()));
        }
        if self.rounds == Some(0) {
            return Err(ConfigError::Invalid("rounds must be at least 1".to_string()));
        }
        let weighting = &self.bye_weighting;
        if !(1..=MAX_BYE_WEIGHT).contains(&weighting.count_weight) {
            return Err(ConfigError::Invalid(format!(
                "bye_weighting.count_weight must be between 1 and {}, got {}",
                MAX_BYE_WEIGHT, weighting.count_weight
            )));
        }
        if !(0..=MAX_BYE_WEIGHT).contains(&weighting.never_rested_offset) {
            return Err(ConfigError::Invalid(format!(
                "bye_weighting.never_rested_offset must be between 0 and {}, got {}",
                MAX_BYE_WEIGHT, weighting.never_rested_offset
            )));
        }
        Ok(())
    }

    /// Returns the validated population.
    pub fn population(&self) -> Result<Population, ConfigError> {
        Population::new(self.population).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    /// Most rounds in which all partnerships can stay distinct.
    pub fn round_ceiling(&self) -> usize {
        self.population.saturating_sub(1)
    }

    /// Requested rounds clamped to the ceiling; the ceiling if unset.
    pub fn target_rounds(&self) -> usize {
        let ceiling = self.round_ceiling();
        self.rounds.map_or(ceiling, |r| r.min(ceiling))
    }
}

/// Bye selection weights.
///
/// A candidate's priority is
/// `bye_count * count_weight - (round - last_bye_round)`; the lowest
/// priorities rest. Players who never rested count as having rested
/// `never_rested_offset` rounds before round 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ByeWeighting {
    /// Weight of one past bye.
    pub count_weight: i64,

    /// Distance assumed for players without any bye yet.
    pub never_rested_offset: i64,
}

impl Default for ByeWeighting {
    fn default() -> Self {
        ByeWeighting {
            count_weight: 1000,
            never_rested_offset: 999,
        }
    }
}

/// Opponent repeat penalties, per cross-team player combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OpponentPenalty {
    /// Cost when the two players already faced each other once.
    pub once: u64,

    /// Cost when they faced each other twice.
    pub twice: u64,

    /// Cost when they faced each other three times or more.
    pub three_or_more: u64,
}

impl Default for OpponentPenalty {
    fn default() -> Self {
        OpponentPenalty {
            once: 10,
            twice: 100,
            three_or_more: 10_000,
        }
    }
}

impl OpponentPenalty {
    /// Cost of one more meeting after `previous` meetings.
    #[inline]
    pub fn cost(&self, previous: u32) -> u64 {
        match previous {
            0 => 0,
            1 => self.once,
            2 => self.twice,
            _ => self.three_or_more,
        }
    }
}

#[cfg(test)]
mod tests;
