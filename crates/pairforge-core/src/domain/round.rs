//! Teams, matches, rounds and the schedule that orders them.

use std::collections::HashSet;
use std::fmt;

use super::player::PlayerId;
use crate::error::{PairForgeError, Result};

/// Two distinct players sharing one side of a court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Team([PlayerId; 2]);

impl Team {
    /// Creates a team of two distinct players.
    ///
    /// # Errors
    ///
    /// Returns [`PairForgeError::InvalidTeam`] if both slots hold the same player.
    pub fn new(first: PlayerId, second: PlayerId) -> Result<Self> {
        if first == second {
            return Err(PairForgeError::InvalidTeam(first.index()));
        }
        Ok(Team([first, second]))
    }

    #[inline]
    pub fn first(&self) -> PlayerId {
        self.0[0]
    }

    #[inline]
    pub fn second(&self) -> PlayerId {
        self.0[1]
    }

    /// Both players, in the order they were paired.
    #[inline]
    pub fn players(&self) -> [PlayerId; 2] {
        self.0
    }

    pub fn contains(&self, player: PlayerId) -> bool {
        self.0.contains(&player)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0[0], self.0[1])
    }
}

/// Two teams facing each other on one court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
    team1: Team,
    team2: Team,
}

impl Match {
    pub fn new(team1: Team, team2: Team) -> Self {
        Match { team1, team2 }
    }

    #[inline]
    pub fn team1(&self) -> Team {
        self.team1
    }

    #[inline]
    pub fn team2(&self) -> Team {
        self.team2
    }

    /// The four players on court: team 1 first, then team 2.
    pub fn players(&self) -> [PlayerId; 4] {
        let [a, b] = self.team1.players();
        let [c, d] = self.team2.players();
        [a, b, c, d]
    }

    /// The four cross-team opponent combinations.
    pub fn opponent_pairs(&self) -> impl Iterator<Item = (PlayerId, PlayerId)> + '_ {
        self.team1
            .players()
            .into_iter()
            .flat_map(move |a| self.team2.players().into_iter().map(move |b| (a, b)))
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} vs {}]", self.team1, self.team2)
    }
}

/// One full allocation of courts and byes.
///
/// Matches are ordered by court. A round is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    matches: Vec<Match>,
    byes: Vec<PlayerId>,
}

impl Round {
    pub fn new(matches: Vec<Match>, byes: Vec<PlayerId>) -> Self {
        Round { matches, byes }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn byes(&self) -> &[PlayerId] {
        &self.byes
    }

    #[inline]
    pub fn courts_used(&self) -> usize {
        self.matches.len()
    }

    /// Players on court this round, match by match.
    pub fn playing(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.matches.iter().flat_map(|m| m.players())
    }

    /// Every player named by this round, playing or resting.
    pub fn participants(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.playing().chain(self.byes.iter().copied())
    }

    /// Flat list of successive teams, two per match.
    ///
    /// This is the pair-list view where teams `2k` and `2k + 1` share court `k`.
    pub fn pair_list(&self) -> Vec<Team> {
        self.matches
            .iter()
            .flat_map(|m| [m.team1, m.team2])
            .collect()
    }

    /// Checks the structural invariants of a round against a population size.
    ///
    /// Every id must be below `population`, every team must hold two distinct
    /// players, and no player may appear twice across matches and byes.
    pub fn validate(&self, round_index: usize, population: usize) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.matches.len() * 4 + self.byes.len());
        for m in &self.matches {
            for team in [m.team1, m.team2] {
                if team.first() == team.second() {
                    return Err(PairForgeError::InvalidTeam(team.first().index()));
                }
            }
        }
        for player in self.participants() {
            if player.index() >= population {
                return Err(PairForgeError::PlayerOutOfRange {
                    index: player.index(),
                    population,
                });
            }
            if !seen.insert(player) {
                return Err(PairForgeError::DuplicatePlayer(player.index(), round_index));
            }
        }
        Ok(())
    }
}

/// Ordered list of committed rounds.
///
/// Rounds are only ever appended or cut off as a suffix; a round already in
/// the schedule is never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    rounds: Vec<Round>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rounds(rounds: Vec<Round>) -> Self {
        Schedule { rounds }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn get(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Round> {
        self.rounds.iter()
    }

    /// Appends a committed round.
    pub fn push(&mut self, round: Round) {
        self.rounds.push(round);
    }

    /// Drops every round from `cut` onwards, keeping `[0, cut)`.
    pub fn retain_prefix(&mut self, cut: usize) {
        self.rounds.truncate(cut);
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Round;
    type IntoIter = std::slice::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}
