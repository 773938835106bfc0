//! PairForge Solver Engine
//!
//! This crate provides the scheduling engine:
//! - Phases (bye selection, partner pairing, court matching)
//! - Round generator
//! - Schedule engine with statistics and the validity predicate
//! - Withdrawal and regeneration of the unplayed suffix
//! - Snapshot export and import
//! - Run statistics

pub mod engine;
pub mod phase;
pub mod regenerate;
pub mod round;
pub mod snapshot;
pub mod stats;

pub use engine::{BuildReport, ScheduleEngine};
pub use phase::{
    bye_priority, form_matches, form_pairs, opponent_cost, select_byes, Pairing,
};
pub use regenerate::{RegenerationReport, WithdrawalRequest};
pub use round::{GeneratedRound, RoundGenerator};
pub use snapshot::EngineSnapshot;
pub use stats::GenerationStats;
