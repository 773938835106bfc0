//! Tests for tournament configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        population = 12
        courts = 3
        rounds = 10
        first_court = 4

        [bye_weighting]
        count_weight = 500

        [opponent_penalty]
        once = 5
        twice = 50
        three_or_more = 5000

        [acceptance]
        max_opponent_repeat = 2
    "#;

    let config = TournamentConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.population, 12);
    assert_eq!(config.courts, 3);
    assert_eq!(config.rounds, Some(10));
    assert_eq!(config.first_court, 4);
    assert_eq!(config.bye_weighting.count_weight, 500);
    assert_eq!(config.bye_weighting.never_rested_offset, 999);
    assert_eq!(config.opponent_penalty.three_or_more, 5000);
    assert_eq!(config.acceptance.max_opponent_repeat, 2);
    assert_eq!(config.acceptance.max_partner_repeat, 1);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        population: 9
        courts: 2
        opponent_penalty:
          twice: 250
        acceptance:
          max_bye_spread: 2
    "#;

    let config = TournamentConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.population, 9);
    assert_eq!(config.courts, 2);
    assert_eq!(config.rounds, None);
    assert_eq!(config.first_court, 1);
    assert_eq!(config.opponent_penalty.twice, 250);
    assert_eq!(config.acceptance.max_bye_spread, 2);
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = TournamentConfig::from_toml_str("").unwrap();
    assert_eq!(config, TournamentConfig::default());
    assert_eq!(config.population, DEFAULT_POPULATION);
    assert_eq!(config.courts, DEFAULT_COURTS);
}

#[test]
fn test_builder() {
    let config = TournamentConfig::new(16, 4)
        .with_rounds(12)
        .with_first_court(3)
        .with_opponent_penalty(OpponentPenalty {
            once: 1,
            twice: 2,
            three_or_more: 3,
        });

    assert_eq!(config.population, 16);
    assert_eq!(config.rounds, Some(12));
    assert_eq!(config.first_court, 3);
    assert_eq!(config.opponent_penalty.cost(5), 3);
}

#[test]
fn test_target_rounds_clamped_to_ceiling() {
    assert_eq!(TournamentConfig::new(8, 2).target_rounds(), 7);
    assert_eq!(TournamentConfig::new(8, 2).with_rounds(20).target_rounds(), 7);
    assert_eq!(TournamentConfig::new(8, 2).with_rounds(3).target_rounds(), 3);
}

#[test]
fn test_validate() {
    assert!(TournamentConfig::new(4, 1).validate().is_ok());
    assert!(matches!(
        TournamentConfig::new(3, 1).validate(),
        Err(ConfigError::Invalid(_))
    ));
    assert!(TournamentConfig::new(8, 0).validate().is_err());
    assert!(TournamentConfig::new(8, 2).with_rounds(0).validate().is_err());
}

#[test]
fn test_validate_bye_weight_bounds() {
    let with = |count_weight, never_rested_offset| {
        TournamentConfig::new(8, 2)
            .with_bye_weighting(ByeWeighting {
                count_weight,
                never_rested_offset,
            })
            .validate()
    };

    assert!(with(MAX_BYE_WEIGHT, MAX_BYE_WEIGHT).is_ok());
    assert!(with(1, 0).is_ok());
    assert!(matches!(with(0, 999), Err(ConfigError::Invalid(_))));
    assert!(matches!(
        with(i64::MAX / 2 + 1, 999),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(with(1000, i64::MAX), Err(ConfigError::Invalid(_))));
    assert!(matches!(with(1000, -1), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_load_picks_format_by_extension() {
    let dir = std::env::temp_dir().join(format!("pairforge-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let yaml = dir.join("tournament.yaml");
    std::fs::write(&yaml, "population: 10\ncourts: 2\nrounds: 6\n").unwrap();
    let config = TournamentConfig::load(&yaml).unwrap();
    assert_eq!(config, TournamentConfig::new(10, 2).with_rounds(6));

    let yml = dir.join("tournament.YML");
    std::fs::write(&yml, "population: 9\n").unwrap();
    assert_eq!(TournamentConfig::load(&yml).unwrap().population, 9);

    let toml = dir.join("tournament.toml");
    std::fs::write(&toml, "population = 12\ncourts = 3\n").unwrap();
    assert_eq!(
        TournamentConfig::load(&toml).unwrap(),
        TournamentConfig::new(12, 3)
    );

    // YAML content behind a TOML extension is parsed as TOML.
    let mislabeled = dir.join("tournament.conf");
    std::fs::write(&mislabeled, "population: 9\n").unwrap();
    assert!(matches!(
        TournamentConfig::load(&mislabeled),
        Err(ConfigError::Toml(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_opponent_penalty_steps() {
    let penalty = OpponentPenalty::default();
    assert_eq!(penalty.cost(0), 0);
    assert_eq!(penalty.cost(1), 10);
    assert_eq!(penalty.cost(2), 100);
    assert_eq!(penalty.cost(3), 10_000);
    assert_eq!(penalty.cost(7), 10_000);
}

#[test]
fn test_toml_roundtrip() {
    let config = TournamentConfig::new(10, 2).with_rounds(6);
    let text = config.to_toml_string().unwrap();
    assert_eq!(TournamentConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_invalid_toml() {
    assert!(matches!(
        TournamentConfig::from_toml_str("population = \"many\""),
        Err(ConfigError::Toml(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        TournamentConfig::load("/nonexistent/pairforge.toml"),
        Err(ConfigError::Io(_))
    ));
}
