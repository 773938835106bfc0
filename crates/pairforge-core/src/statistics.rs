//! Aggregate fairness statistics for a schedule.

use std::collections::HashSet;
use std::fmt;

use crate::constraint::ConstraintState;
use crate::domain::{PlayerId, Round};

/// Thresholds for the schedule validity predicate and violation counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct AcceptanceCriteria {
    /// Largest tolerated difference between most and fewest byes.
    pub max_bye_spread: u32,
    /// Largest tolerated number of rounds any two players partner.
    pub max_partner_repeat: u32,
    /// Largest tolerated number of rounds any two players face each other.
    pub max_opponent_repeat: u32,
    /// A partnership counts as a violation above this many rounds.
    pub partner_violation_above: u32,
    /// An opposition counts as a violation above this many rounds.
    pub opponent_violation_above: u32,
}

impl Default for AcceptanceCriteria {
    fn default() -> Self {
        AcceptanceCriteria {
            max_bye_spread: 1,
            max_partner_repeat: 1,
            max_opponent_repeat: 3,
            partner_violation_above: 1,
            opponent_violation_above: 2,
        }
    }
}

/// Derived statistics over a committed schedule.
///
/// # Examples
///
/// ```
/// use pairforge_core::{AcceptanceCriteria, ScheduleStatistics};
///
/// let stats = ScheduleStatistics {
///     rounds_generated: 7,
///     bye_min: 0,
///     bye_max: 1,
///     bye_spread: 1,
///     consecutive_bye_repeats: 0,
///     max_partner_repeat: 1,
///     partner_violation_count: 0,
///     max_opponent_repeat: 3,
///     opponent_violation_count: 2,
/// };
/// assert!(stats.is_acceptable(&AcceptanceCriteria::default()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleStatistics {
    pub rounds_generated: usize,
    pub bye_min: u32,
    pub bye_max: u32,
    pub bye_spread: u32,
    /// Bye slots where the player also rested the previous round.
    pub consecutive_bye_repeats: usize,
    pub max_partner_repeat: u32,
    pub partner_violation_count: usize,
    pub max_opponent_repeat: u32,
    pub opponent_violation_count: usize,
}

impl ScheduleStatistics {
    /// Computes statistics from the state and the rounds it was built from.
    ///
    /// Bye extremes are taken over `players` (normally the active players);
    /// partner and opponent figures cover the whole population, since
    /// history with withdrawn players still counts.
    pub fn compute(
        state: &ConstraintState,
        rounds: &[Round],
        players: &[PlayerId],
        criteria: &AcceptanceCriteria,
    ) -> Self {
        let byes = players.iter().map(|&p| state.bye_count(p));
        let bye_min = byes.clone().min().unwrap_or(0);
        let bye_max = byes.max().unwrap_or(0);

        let consecutive_bye_repeats = rounds
            .windows(2)
            .map(|pair| {
                let previous: HashSet<PlayerId> = pair[0].byes().iter().copied().collect();
                pair[1]
                    .byes()
                    .iter()
                    .filter(|p| previous.contains(p))
                    .count()
            })
            .sum();

        ScheduleStatistics {
            rounds_generated: rounds.len(),
            bye_min,
            bye_max,
            bye_spread: bye_max - bye_min,
            consecutive_bye_repeats,
            max_partner_repeat: state.partners().max_pair(),
            partner_violation_count: state
                .partners()
                .count_above(criteria.partner_violation_above),
            max_opponent_repeat: state.opponents().max_pair(),
            opponent_violation_count: state
                .opponents()
                .count_above(criteria.opponent_violation_above),
        }
    }

    /// Validity predicate: bye spread, partner and opponent repeats within bounds.
    pub fn is_acceptable(&self, criteria: &AcceptanceCriteria) -> bool {
        self.bye_spread <= criteria.max_bye_spread
            && self.max_partner_repeat <= criteria.max_partner_repeat
            && self.max_opponent_repeat <= criteria.max_opponent_repeat
    }
}

impl fmt::Display for ScheduleStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Rounds: {}", self.rounds_generated)?;
        writeln!(
            f,
            "Byes: min={}, max={}, spread={}",
            self.bye_min, self.bye_max, self.bye_spread
        )?;
        writeln!(f, "Consecutive byes: {}", self.consecutive_bye_repeats)?;
        writeln!(
            f,
            "Max partner repeat: {} (violations: {})",
            self.max_partner_repeat, self.partner_violation_count
        )?;
        write!(
            f,
            "Max opponent repeat: {} (violations: {})",
            self.max_opponent_repeat, self.opponent_violation_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Match, Population, Team};

    fn p(index: usize) -> PlayerId {
        PlayerId::new(index)
    }

    fn single_court(a: usize, b: usize, c: usize, d: usize, byes: &[usize]) -> Round {
        Round::new(
            vec![Match::new(
                Team::new(p(a), p(b)).unwrap(),
                Team::new(p(c), p(d)).unwrap(),
            )],
            byes.iter().copied().map(p).collect(),
        )
    }

    #[test]
    fn test_compute_counts_consecutive_byes() {
        let population = Population::new(6).unwrap();
        let rounds = vec![
            single_court(0, 1, 2, 3, &[4, 5]),
            single_court(0, 2, 1, 4, &[3, 5]),
        ];
        let state = ConstraintState::replay(population, &rounds).unwrap();
        let players: Vec<PlayerId> = population.players().collect();
        let stats =
            ScheduleStatistics::compute(&state, &rounds, &players, &AcceptanceCriteria::default());

        assert_eq!(stats.rounds_generated, 2);
        assert_eq!(stats.consecutive_bye_repeats, 1);
        assert_eq!(stats.bye_min, 0);
        assert_eq!(stats.bye_max, 2);
        assert_eq!(stats.bye_spread, 2);
        assert_eq!(stats.max_partner_repeat, 1);
        // 1 and 2 face each other in both rounds
        assert_eq!(stats.max_opponent_repeat, 2);
        assert_eq!(stats.opponent_violation_count, 0);
        assert!(!stats.is_acceptable(&AcceptanceCriteria::default()));
    }

    #[test]
    fn test_violation_thresholds() {
        let population = Population::new(4).unwrap();
        let rounds = vec![
            single_court(0, 1, 2, 3, &[]),
            single_court(0, 1, 2, 3, &[]),
            single_court(0, 1, 2, 3, &[]),
        ];
        let state = ConstraintState::replay(population, &rounds).unwrap();
        let players: Vec<PlayerId> = population.players().collect();
        let criteria = AcceptanceCriteria::default();
        let stats = ScheduleStatistics::compute(&state, &rounds, &players, &criteria);

        assert_eq!(stats.max_partner_repeat, 3);
        assert_eq!(stats.partner_violation_count, 2);
        assert_eq!(stats.max_opponent_repeat, 3);
        assert_eq!(stats.opponent_violation_count, 4);
        assert!(!stats.is_acceptable(&criteria));
    }

    #[test]
    fn test_bye_extremes_only_over_given_players() {
        let population = Population::new(5).unwrap();
        let rounds = vec![single_court(0, 1, 2, 3, &[4])];
        let state = ConstraintState::replay(population, &rounds).unwrap();
        let without_four: Vec<PlayerId> = (0..4).map(p).collect();
        let stats = ScheduleStatistics::compute(
            &state,
            &rounds,
            &without_four,
            &AcceptanceCriteria::default(),
        );
        assert_eq!(stats.bye_max, 0);
        assert_eq!(stats.bye_spread, 0);
    }

    #[test]
    fn test_empty_schedule() {
        let population = Population::new(4).unwrap();
        let state = ConstraintState::new(population);
        let stats =
            ScheduleStatistics::compute(&state, &[], &[], &AcceptanceCriteria::default());
        assert_eq!(stats, ScheduleStatistics::default());
        assert!(stats.is_acceptable(&AcceptanceCriteria::default()));
    }
}
