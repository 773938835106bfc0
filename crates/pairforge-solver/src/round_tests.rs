//! Tests for the round generator.

use super::*;
use pairforge_core::{Match, Population};
use pairforge_test::{assert_round_covers_pool, p, players, team};

fn fresh(size: usize) -> ConstraintState {
    ConstraintState::new(Population::new(size).unwrap())
}

#[test]
fn test_zero_courts_is_rejected() {
    assert_eq!(RoundGenerator::new(0), Err(PairForgeError::NoCourts));
}

#[test]
fn test_first_round_of_eight_on_two_courts() {
    let generator = RoundGenerator::new(2).unwrap();
    let mut state = fresh(8);
    let generated = generator.generate(&mut state, 0, &players(8)).unwrap().unwrap();

    assert!(!generated.relaxed);
    assert_eq!(
        generated.round.matches(),
        &[
            Match::new(team(0, 1), team(2, 3)),
            Match::new(team(4, 5), team(6, 7)),
        ]
    );
    assert!(generated.round.byes().is_empty());
    assert_eq!(state.partner_count(p(0), p(1)), 1);
    assert_eq!(state.opponent_count(p(0), p(3)), 1);
}

#[test]
fn test_second_round_avoids_first_round_partners() {
    let generator = RoundGenerator::new(2).unwrap();
    let mut state = fresh(8);
    generator.generate(&mut state, 0, &players(8)).unwrap().unwrap();
    let generated = generator.generate(&mut state, 1, &players(8)).unwrap().unwrap();

    assert_eq!(
        generated.round.matches(),
        &[
            Match::new(team(0, 2), team(4, 6)),
            Match::new(team(1, 3), team(5, 7)),
        ]
    );
}

#[test]
fn test_unused_courts_stay_empty() {
    let generator = RoundGenerator::new(7).unwrap();
    let mut state = fresh(8);
    let generated = generator.generate(&mut state, 0, &players(8)).unwrap().unwrap();

    assert_eq!(generated.round.courts_used(), 2);
    assert_round_covers_pool(&generated.round, &players(8), 7);
}

#[test]
fn test_odd_population_rests_one_player() {
    let generator = RoundGenerator::new(1).unwrap();
    let mut state = fresh(5);
    let generated = generator.generate(&mut state, 0, &players(5)).unwrap().unwrap();

    assert_eq!(generated.round.byes(), &[p(0)]);
    assert_eq!(generated.round.playing().count(), 4);
    assert_round_covers_pool(&generated.round, &players(5), 1);
}

#[test]
fn test_layout_always_leaves_an_even_playing_count() {
    let generator = RoundGenerator::new(3).unwrap();
    for active in 4..40 {
        let layout = generator.layout(active);
        assert_eq!(layout.players_per_round % 4, 0, "active = {}", active);
        assert_eq!(layout.players_per_round + layout.byes_per_round, active);
    }
}

#[test]
fn test_restricted_pool() {
    let generator = RoundGenerator::new(3).unwrap();
    let mut state = fresh(12);
    let pool: Vec<PlayerId> = players(12)
        .into_iter()
        .filter(|&x| x != p(4) && x != p(9))
        .collect();

    let generated = generator.generate(&mut state, 0, &pool).unwrap().unwrap();

    assert_round_covers_pool(&generated.round, &pool, 3);
    assert_eq!(generated.round.courts_used(), 2);
    assert_eq!(state.bye_count(p(4)), 0);
    assert_eq!(state.bye_count(p(9)), 0);
}

#[test]
fn test_pool_order_does_not_matter() {
    let generator = RoundGenerator::new(2).unwrap();
    let mut a = fresh(9);
    let mut b = fresh(9);
    let mut reversed = players(9);
    reversed.reverse();

    let first = generator.generate(&mut a, 0, &players(9)).unwrap();
    let second = generator.generate(&mut b, 0, &reversed).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_out_of_range_player_is_rejected() {
    let generator = RoundGenerator::new(1).unwrap();
    let mut state = fresh(4);
    let before = state.clone();

    let result = generator.generate(&mut state, 0, &[p(0), p(1), p(2), p(7)]);
    assert_eq!(
        result,
        Err(PairForgeError::PlayerOutOfRange {
            index: 7,
            population: 4
        })
    );
    assert_eq!(state, before);
}

#[test]
fn test_duplicate_player_is_rejected() {
    let generator = RoundGenerator::new(1).unwrap();
    let mut state = fresh(5);

    let result = generator.generate(&mut state, 2, &[p(0), p(1), p(1), p(3)]);
    assert_eq!(result, Err(PairForgeError::DuplicatePlayer(1, 2)));
}

#[test]
fn test_pool_below_one_court_is_rejected() {
    let generator = RoundGenerator::new(2).unwrap();
    let mut state = fresh(8);
    let before = state.clone();

    let result = generator.generate(&mut state, 0, &players(3));
    assert_eq!(
        result,
        Err(PairForgeError::TooFewActivePlayers {
            remaining: 3,
            minimum: 4
        })
    );
    assert_eq!(state, before);
}

#[test]
fn test_from_config_takes_weights() {
    let config = TournamentConfig::new(8, 2).with_opponent_penalty(OpponentPenalty {
        once: 1,
        twice: 2,
        three_or_more: 3,
    });
    let generator = RoundGenerator::from_config(&config).unwrap();
    assert_eq!(generator.courts(), 2);
    assert_eq!(generator.opponent_penalty.once, 1);
}
