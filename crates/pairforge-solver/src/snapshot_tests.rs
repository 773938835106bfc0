//! Tests for snapshot export and import.

use super::*;
use crate::regenerate::WithdrawalRequest;
use pairforge_test::p;

fn built(population: usize, courts: usize) -> ScheduleEngine {
    ScheduleEngine::build_from(TournamentConfig::new(population, courts)).unwrap()
}

#[test]
fn test_json_roundtrip_restores_engine() {
    let engine = built(9, 2);
    let json = engine.export_snapshot().to_json().unwrap();
    let restored = ScheduleEngine::from_snapshot(EngineSnapshot::from_json(&json).unwrap()).unwrap();

    assert_eq!(restored.rounds(), engine.rounds());
    assert_eq!(restored.state(), engine.state());
    assert_eq!(restored.config(), engine.config());
    assert_eq!(restored.target_rounds(), engine.target_rounds());
    assert_eq!(restored.statistics(), engine.statistics());
}

#[test]
fn test_json_uses_index_teams() {
    let engine = ScheduleEngine::build_from(TournamentConfig::new(8, 2).with_rounds(1)).unwrap();
    let json = engine.export_snapshot().to_json().unwrap();

    assert!(json.contains(r#""team1":[0,1],"team2":[2,3]"#));
    assert!(json.contains(r#""byes":[]"#));
}

#[test]
fn test_restored_engine_continues_like_the_original() {
    let mut original = ScheduleEngine::build_from(TournamentConfig::new(12, 3).with_rounds(10)).unwrap();
    original
        .regenerate(&WithdrawalRequest::new(3, [p(4), p(9)]))
        .unwrap();

    let json = original.export_snapshot().to_json_pretty().unwrap();
    let mut restored = ScheduleEngine::from_snapshot(EngineSnapshot::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.withdrawn_players(), vec![p(4), p(9)]);

    let request = WithdrawalRequest::new(6, [p(0)]);
    let a = original.regenerate(&request).unwrap();
    let b = restored.regenerate(&request).unwrap();
    assert_eq!(a, b);
    assert_eq!(original.rounds(), restored.rounds());
}

#[test]
fn test_rebuild_after_import_matches_counters() {
    let engine = built(10, 2);
    let mut restored = ScheduleEngine::from_snapshot(engine.export_snapshot()).unwrap();
    restored.rebuild_state().unwrap();
    assert_eq!(restored.state(), engine.state());
}

#[test]
fn test_asymmetric_matrix_is_rejected() {
    let mut snapshot = built(8, 2).export_snapshot();
    snapshot.partner_counts[0][1] += 1;

    let result = ScheduleEngine::from_snapshot(snapshot);
    assert!(matches!(result, Err(PairForgeError::InvalidSnapshot(_))));
}

#[test]
fn test_wrong_dimensions_are_rejected() {
    let mut snapshot = built(8, 2).export_snapshot();
    snapshot.bye_counts.pop();
    assert!(matches!(
        ScheduleEngine::from_snapshot(snapshot),
        Err(PairForgeError::InvalidSnapshot(_))
    ));

    let mut snapshot = built(8, 2).export_snapshot();
    snapshot.opponent_counts.push(vec![0; 9]);
    assert!(matches!(
        ScheduleEngine::from_snapshot(snapshot),
        Err(PairForgeError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_out_of_range_round_is_rejected() {
    let mut snapshot = built(8, 2).export_snapshot();
    snapshot.config.population = 6;
    let result = ScheduleEngine::from_snapshot(snapshot);
    assert!(matches!(
        result,
        Err(PairForgeError::PlayerOutOfRange { population: 6, .. })
    ));
}

#[test]
fn test_unknown_withdrawn_player_is_rejected() {
    let mut snapshot = built(8, 2).export_snapshot();
    snapshot.withdrawn.push(p(8));
    assert_eq!(
        ScheduleEngine::from_snapshot(snapshot).err(),
        Some(PairForgeError::PlayerOutOfRange {
            index: 8,
            population: 8
        })
    );
}

#[test]
fn test_too_many_withdrawn_is_rejected() {
    let mut snapshot = built(5, 1).export_snapshot();
    snapshot.withdrawn = vec![p(0), p(1)];
    assert!(matches!(
        ScheduleEngine::from_snapshot(snapshot),
        Err(PairForgeError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(matches!(
        EngineSnapshot::from_json("{\"config\": 3}"),
        Err(PairForgeError::InvalidSnapshot(_))
    ));
}
