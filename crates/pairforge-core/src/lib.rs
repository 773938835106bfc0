//! PairForge Core - Core types for doubles tournament scheduling
//!
//! This crate provides the fundamental data of the pairing engine:
//! - Domain types: index-identity players, teams, matches, rounds, schedules
//! - Constraint state: partner / opponent matrices and bye bookkeeping
//! - Statistics: fairness aggregates and the validity predicate
//!
//! Players are plain indices into a [`Population`]. Nothing here holds a
//! reference to caller-side player records.

pub mod constraint;
pub mod domain;
pub mod error;
pub mod statistics;

pub use constraint::{ConstraintState, PairMatrix};
pub use domain::{
    CourtLayout, Match, PlayerId, Population, Round, Schedule, Team, MIN_PLAYERS,
    PLAYERS_PER_COURT,
};
pub use error::{PairForgeError, Result};
pub use statistics::{AcceptanceCriteria, ScheduleStatistics};
