//! Tests for team formation.

use super::pairing::form_pairs;
use pairforge_core::{ConstraintState, PairForgeError, Population, Round};
use pairforge_test::{p, players, round_of, team};

fn state_with(size: usize, rounds: &[Round]) -> ConstraintState {
    ConstraintState::replay(Population::new(size).unwrap(), rounds).unwrap()
}

#[test]
fn test_empty_pool_is_rejected() {
    let state = state_with(4, &[]);
    assert_eq!(form_pairs(&state, &[]), Err(PairForgeError::EmptyPool));
}

#[test]
fn test_odd_pool_is_rejected() {
    let state = state_with(5, &[]);
    assert_eq!(
        form_pairs(&state, &players(5)),
        Err(PairForgeError::OddActivePopulation(5))
    );
}

#[test]
fn test_fresh_state_pairs_neighbours() {
    let state = state_with(8, &[]);
    let pairing = form_pairs(&state, &players(8)).unwrap().unwrap();

    assert!(!pairing.relaxed);
    assert_eq!(
        pairing.teams,
        vec![team(0, 1), team(2, 3), team(4, 5), team(6, 7)]
    );
}

#[test]
fn test_input_order_does_not_matter() {
    let state = state_with(4, &[]);
    let shuffled = [p(3), p(1), p(2), p(0)];
    let pairing = form_pairs(&state, &shuffled).unwrap().unwrap();
    assert_eq!(pairing.teams, vec![team(0, 1), team(2, 3)]);
}

#[test]
fn test_avoids_previous_partners() {
    let state = state_with(4, &[round_of(&[[0, 1, 2, 3]], &[])]);
    let pairing = form_pairs(&state, &players(4)).unwrap().unwrap();

    assert!(!pairing.relaxed);
    assert_eq!(pairing.teams, vec![team(0, 2), team(1, 3)]);
}

#[test]
fn test_most_constrained_player_is_served_first() {
    // Player 5 has partnered everyone except 4.
    let state = state_with(
        6,
        &[
            round_of(&[[5, 0, 1, 2]], &[3, 4]),
            round_of(&[[5, 1, 0, 3]], &[2, 4]),
            round_of(&[[5, 2, 0, 4]], &[1, 3]),
            round_of(&[[5, 3, 1, 4]], &[0, 2]),
        ],
    );
    let pairing = form_pairs(&state, &players(6)).unwrap().unwrap();

    assert!(!pairing.relaxed);
    assert_eq!(pairing.teams, vec![team(5, 4), team(0, 1), team(2, 3)]);
}

#[test]
fn test_relaxes_when_every_pair_is_used() {
    let state = state_with(
        4,
        &[
            round_of(&[[0, 1, 2, 3]], &[]),
            round_of(&[[0, 2, 1, 3]], &[]),
            round_of(&[[0, 3, 1, 2]], &[]),
        ],
    );
    let pairing = form_pairs(&state, &players(4)).unwrap().unwrap();

    assert!(pairing.relaxed);
    assert_eq!(pairing.teams, vec![team(0, 1), team(2, 3)]);
}

#[test]
fn test_relaxed_pass_prefers_least_repeated_partner() {
    let state = state_with(
        4,
        &[
            round_of(&[[0, 1, 2, 3]], &[]),
            round_of(&[[0, 2, 1, 3]], &[]),
            round_of(&[[0, 3, 1, 2]], &[]),
            round_of(&[[0, 1, 2, 3]], &[]),
        ],
    );
    let pairing = form_pairs(&state, &players(4)).unwrap().unwrap();

    assert!(pairing.relaxed);
    assert_eq!(pairing.teams, vec![team(0, 2), team(1, 3)]);
}

#[test]
fn test_every_player_appears_once() {
    let state = state_with(12, &[]);
    let pool = players(12);
    let pairing = form_pairs(&state, &pool).unwrap().unwrap();

    let mut seen: Vec<_> = pairing.teams.iter().flat_map(|t| t.players()).collect();
    seen.sort_unstable();
    assert_eq!(seen, pool);
}
