//! The three phases of round generation
//!
//! 1. [`bye`]: select who rests
//! 2. [`pairing`]: form teams, never repeating partners when avoidable
//! 3. [`matching`]: pair teams on courts, spreading opponents

pub mod bye;
pub mod matching;
pub mod pairing;

#[cfg(test)]
mod pairing_tests;

pub use bye::{bye_priority, select_byes};
pub use matching::{form_matches, opponent_cost};
pub use pairing::{form_pairs, Pairing};
