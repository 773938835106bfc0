//! Court and bye arithmetic for a given active population.

/// Players on one doubles court.
pub const PLAYERS_PER_COURT: usize = 4;

/// How many courts a round fills and how many players sit out.
///
/// `courts_used = min(available, active / 4)` and everybody who does not fit
/// on a court rests, so the playing count is always a multiple of four.
///
/// # Examples
///
/// ```
/// use pairforge_core::CourtLayout;
///
/// let layout = CourtLayout::new(9, 2);
/// assert_eq!(layout.courts_used, 2);
/// assert_eq!(layout.players_per_round, 8);
/// assert_eq!(layout.byes_per_round, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourtLayout {
    /// Courts that hold a match each round.
    pub courts_used: usize,
    /// Players on court each round.
    pub players_per_round: usize,
    /// Players resting each round.
    pub byes_per_round: usize,
}

impl CourtLayout {
    pub fn new(active_players: usize, available_courts: usize) -> Self {
        let courts_used = available_courts.min(active_players / PLAYERS_PER_COURT);
        let players_per_round = courts_used * PLAYERS_PER_COURT;
        CourtLayout {
            courts_used,
            players_per_round,
            byes_per_round: active_players - players_per_round,
        }
    }
}
