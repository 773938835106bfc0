//! Generation statistics.
//!
//! Counters for one build or regeneration run. Fairness figures over the
//! schedule itself live in [`pairforge_core::ScheduleStatistics`].

use std::time::{Duration, Instant};

/// Run-level counters for a generation pass.
///
/// # Example
///
/// ```
/// use pairforge_solver::stats::GenerationStats;
///
/// let mut stats = GenerationStats::default();
/// stats.start();
/// stats.record_round(false);
/// stats.record_round(true);
///
/// assert_eq!(stats.rounds_generated, 2);
/// assert_eq!(stats.relaxed_rounds, 1);
/// assert!(!stats.exhausted);
/// ```
#[derive(Debug, Default, Clone)]
pub struct GenerationStats {
    start_time: Option<Instant>,
    /// Rounds appended during this run.
    pub rounds_generated: u64,
    /// Rounds whose pairing had to allow a partner repeat.
    pub relaxed_rounds: u64,
    /// True if the run stopped before its target.
    pub exhausted: bool,
}

impl GenerationStats {
    /// Resets the counters and marks the start of a run.
    pub fn start(&mut self) {
        *self = Self {
            start_time: Some(Instant::now()),
            ..Self::default()
        };
    }

    /// Returns the elapsed time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records one appended round.
    pub fn record_round(&mut self, relaxed: bool) {
        self.rounds_generated += 1;
        if relaxed {
            self.relaxed_rounds += 1;
        }
    }

    /// Records that no further round could be produced.
    pub fn record_exhaustion(&mut self) {
        self.exhausted = true;
    }

    /// Returns the rounds per second rate.
    pub fn rounds_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.rounds_generated as f64 / secs
        } else {
            0.0
        }
    }

    /// Returns the share of rounds that needed relaxation.
    pub fn relaxation_rate(&self) -> f64 {
        if self.rounds_generated == 0 {
            0.0
        } else {
            self.relaxed_rounds as f64 / self.rounds_generated as f64
        }
    }
}
