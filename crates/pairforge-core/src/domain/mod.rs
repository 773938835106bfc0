//! Domain model for doubles scheduling
//!
//! - `PlayerId` / `Population`: index-identity players
//! - `Team`, `Match`, `Round`, `Schedule`: what a schedule is made of
//! - `CourtLayout`: court and bye arithmetic

mod court;
mod player;
mod round;


pub use court::{CourtLayout, PLAYERS_PER_COURT};
pub use player::{PlayerId, Population, MIN_PLAYERS};
pub use round::{Match, Round, Schedule, Team};
