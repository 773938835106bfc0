//! Mapping from engine indices to caller player records.
//!
//! The engine only knows player indices. [`ScheduleAdapter`] resolves them
//! against the caller's player list and lays each round out as numbered
//! courts with two teams and empty score slots.
//!
//! An index that does not resolve is logged at WARN and left out of the
//! output; it points at an indexing defect upstream.

use pairforge_core::{PlayerId, Round, Schedule, Team};
use serde::Serialize;
use tracing::warn;

/// One court of an adapted round.
///
/// Serialized with the keys the host application reads
/// (`terrain`, `equipe1`, `equipe2`); unset scores are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourtMatch<P> {
    #[serde(rename = "terrain")]
    pub court: u32,
    #[serde(rename = "equipe1")]
    pub team1: Vec<P>,
    #[serde(rename = "equipe2")]
    pub team2: Vec<P>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score1: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score2: Option<u32>,
}

/// An adapted round: courts plus resting players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourtRound<P> {
    #[serde(rename = "matchs")]
    pub matches: Vec<CourtMatch<P>>,
    pub byes: Vec<P>,
}

/// Resolves engine rounds against a slice of player records.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleAdapter<'a, P> {
    players: &'a [P],
    first_court: u32,
}

impl<'a, P: Clone> ScheduleAdapter<'a, P> {
    /// Player `i` of the engine is `players[i]`. Courts start at 1.
    pub fn new(players: &'a [P]) -> Self {
        ScheduleAdapter {
            players,
            first_court: 1,
        }
    }

    pub fn with_first_court(mut self, first_court: u32) -> Self {
        self.first_court = first_court;
        self
    }

    #[inline]
    pub fn first_court(&self) -> u32 {
        self.first_court
    }

    pub fn resolve(&self, player: PlayerId) -> Option<&'a P> {
        self.players.get(player.index())
    }

    /// Adapts every round of a schedule.
    pub fn adapt_schedule(&self, schedule: &Schedule) -> Vec<CourtRound<P>> {
        schedule
            .iter()
            .enumerate()
            .map(|(index, round)| self.adapt_round(index, round))
            .collect()
    }

    pub fn adapt_round(&self, round_index: usize, round: &Round) -> CourtRound<P> {
        self.adapt_pair_list(round_index, &round.pair_list(), round.byes())
    }

    /// Adapts a flat pair list where pairs `2k` and `2k + 1` share court `k`.
    ///
    /// A trailing pair without an opponent is logged and skipped.
    pub fn adapt_pair_list(
        &self,
        round_index: usize,
        pairs: &[Team],
        byes: &[PlayerId],
    ) -> CourtRound<P> {
        let mut matches = Vec::with_capacity(pairs.len() / 2);
        for (court, chunk) in pairs.chunks(2).enumerate() {
            let [team1, team2] = chunk else {
                warn!(
                    event = "unpaired_team",
                    round = round_index,
                    court = self.first_court + court as u32,
                    team = %chunk[0],
                );
                continue;
            };
            matches.push(CourtMatch {
                court: self.first_court + court as u32,
                team1: self.resolve_all(round_index, &team1.players()),
                team2: self.resolve_all(round_index, &team2.players()),
                score1: None,
                score2: None,
            });
        }

        CourtRound {
            matches,
            byes: self.resolve_all(round_index, byes),
        }
    }

    fn resolve_all(&self, round_index: usize, ids: &[PlayerId]) -> Vec<P> {
        ids.iter()
            .filter_map(|&id| match self.resolve(id) {
                Some(player) => Some(player.clone()),
                None => {
                    warn!(
                        event = "unresolved_player",
                        round = round_index,
                        player = id.index(),
                        known = self.players.len(),
                    );
                    None
                }
            })
            .collect()
    }
}
