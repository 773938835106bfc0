//! Error types for PairForge

use thiserror::Error;

/// Main error type for PairForge operations.
///
/// Every variant except [`PairForgeError::InvalidSnapshot`] and
/// [`PairForgeError::Config`] is a precondition failure: the operation that
/// returned it was rejected before committing anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairForgeError {
    /// Fewer players than a doubles court needs
    #[error("Population of {size} is too small (at least {minimum} players required)")]
    PopulationTooSmall { size: usize, minimum: usize },

    /// No court available
    #[error("At least one court is required")]
    NoCourts,

    /// A player index outside `0..population`
    #[error("Player {index} is out of range (population {population})")]
    PlayerOutOfRange { index: usize, population: usize },

    /// A player appears twice where it must appear once
    #[error("Player {0} appears more than once in round {1}")]
    DuplicatePlayer(usize, usize),

    /// A team whose two slots hold the same player
    #[error("Team must hold two distinct players, got {0} twice")]
    InvalidTeam(usize),

    /// Pairing was asked to split an odd number of players
    #[error("Cannot pair an odd number of active players ({0})")]
    OddActivePopulation(usize),

    /// Pairing was asked to split nobody
    #[error("No active players to pair")]
    EmptyPool,

    /// Withdrawal would leave fewer players than one court needs
    #[error("Not enough remaining players ({remaining} < {minimum})")]
    TooFewActivePlayers { remaining: usize, minimum: usize },

    /// Regeneration cut does not address a committed round
    #[error("Round {cut} is invalid (schedule has {rounds} rounds)")]
    InvalidCutRound { cut: usize, rounds: usize },

    /// Requested total round count cannot hold the retained prefix
    #[error("Round count {requested} is smaller than the retained {retained} rounds")]
    InvalidRoundCount { requested: usize, retained: usize },

    /// Imported state does not describe a consistent engine
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Configuration rejected while building an engine
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PairForgeError {
    /// Returns true for the precondition family of failures.
    pub fn is_precondition(&self) -> bool {
        !matches!(
            self,
            PairForgeError::InvalidSnapshot(_) | PairForgeError::Config(_)
        )
    }
}

/// Result type alias for PairForge operations
pub type Result<T> = std::result::Result<T, PairForgeError>;
