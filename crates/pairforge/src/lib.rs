//! PairForge - fair doubles tournament scheduling in Rust
//!
//! Generate rounds of doubles matches where partners rarely repeat,
//! opponents are spread out and byes are shared evenly, then regenerate
//! the rest of the schedule when players withdraw.
//!
//! # Example
//!
//! ```rust
//! use pairforge::prelude::*;
//!
//! let mut engine = ScheduleEngine::new(TournamentConfig::new(9, 2)).unwrap();
//! let report = engine.build().unwrap();
//! assert_eq!(report.achieved, 8);
//!
//! let names = ["Ann", "Ben", "Cat", "Dan", "Eve", "Fay", "Gus", "Hal", "Ivy"];
//! let rounds = ScheduleAdapter::new(&names).adapt_schedule(engine.schedule());
//! assert_eq!(rounds[0].byes, vec!["Ann"]);
//! assert_eq!(rounds[0].matches[0].team1, vec!["Ben", "Cat"]);
//! ```

pub mod adapter;
#[cfg(feature = "console")]
pub mod console;

pub use adapter::{CourtMatch, CourtRound, ScheduleAdapter};

// Domain and state
pub use pairforge_core::{
    AcceptanceCriteria, ConstraintState, CourtLayout, Match, PairForgeError, PairMatrix, PlayerId,
    Population, Result, Round, Schedule, ScheduleStatistics, Team, MIN_PLAYERS, PLAYERS_PER_COURT,
};

// Configuration
pub use pairforge_config::{ByeWeighting, ConfigError, OpponentPenalty, TournamentConfig};

// Engine
pub use pairforge_solver::{
    BuildReport, EngineSnapshot, GeneratedRound, GenerationStats, RegenerationReport,
    RoundGenerator, ScheduleEngine, WithdrawalRequest,
};

pub mod prelude {
    pub use super::{
        BuildReport, PlayerId, RegenerationReport, Round, Schedule, ScheduleEngine,
        ScheduleStatistics, TournamentConfig, WithdrawalRequest,
    };
    pub use super::{CourtMatch, CourtRound, ScheduleAdapter};
}
