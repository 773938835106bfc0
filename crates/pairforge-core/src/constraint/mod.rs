//! Constraint state: who partnered, faced and rested with whom.

mod matrix;
mod state;


pub use matrix::PairMatrix;
pub use state::ConstraintState;
