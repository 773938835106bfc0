//! Index-identity players and the population they belong to.

use std::fmt;

use crate::error::{PairForgeError, Result};

/// Smallest population that fills one doubles court.
pub const MIN_PLAYERS: usize = 4;

/// Engine-internal player identity.
///
/// A player is nothing more than a position in `0..population`. The engine
/// never holds references to caller records; an id only becomes meaningful
/// once checked against a [`Population`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(usize);

impl PlayerId {
    /// Creates a player id for the given index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        PlayerId(index)
    }

    /// Returns the dense index of this player.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<PlayerId> for usize {
    fn from(id: PlayerId) -> usize {
        id.0
    }
}

/// The fixed set of players a tournament was created with.
///
/// # Examples
///
/// ```
/// use pairforge_core::{PlayerId, Population};
///
/// let population = Population::new(8).unwrap();
/// assert_eq!(population.round_ceiling(), 7);
/// assert!(population.player(7).is_ok());
/// assert!(population.player(8).is_err());
/// assert!(population.contains(PlayerId::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    size: usize,
}

impl Population {
    /// Creates a population of `size` players.
    ///
    /// # Errors
    ///
    /// Returns [`PairForgeError::PopulationTooSmall`] below [`MIN_PLAYERS`].
    pub fn new(size: usize) -> Result<Self> {
        if size < MIN_PLAYERS {
            return Err(PairForgeError::PopulationTooSmall {
                size,
                minimum: MIN_PLAYERS,
            });
        }
        Ok(Population { size })
    }

    /// Number of players.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Resolves an index to a player of this population.
    pub fn player(&self, index: usize) -> Result<PlayerId> {
        self.check(PlayerId(index))
    }

    /// Returns the id unchanged if it belongs to this population.
    pub fn check(&self, player: PlayerId) -> Result<PlayerId> {
        if player.0 < self.size {
            Ok(player)
        } else {
            Err(PairForgeError::PlayerOutOfRange {
                index: player.0,
                population: self.size,
            })
        }
    }

    /// Returns true if the id belongs to this population.
    #[inline]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.0 < self.size
    }

    /// All players in index order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.size).map(PlayerId)
    }

    /// Maximum rounds in which every partnership can still be distinct.
    #[inline]
    pub fn round_ceiling(&self) -> usize {
        self.size - 1
    }
}
