use super::*;
use search_core::{AdversaryModel, TieBreak};

const SAMPLE: &str = r#"
name = "depth sweep"

[session]
games = 3
seed = 42
width = 3
height = 3

[[players]]
kind = "expectimax"
preset = "smooth"
search = { depth = 1, tie_break = "first_found" }

[[players]]
kind = "expectimax"
name = "adaptive"
adaptive = true

[[players]]
kind = "minimax"
search = { depth = 2, pruning = false, adversary = "uniform" }

[[players]]
kind = "random"
seed = 9
"#;

#[test]
fn test_parse_sample() {
    let config = ArenaConfig::from_toml_str(SAMPLE).unwrap();
    assert_eq!(config.name, "depth sweep");
    assert_eq!(config.output, None);
    assert_eq!(config.session.games, 3);
    assert_eq!(config.session.seed, Some(42));
    assert_eq!(config.session.max_moves, SessionConfig::default().max_moves);
    assert_eq!(config.players.len(), 4);

    let first = &config.players[0];
    assert_eq!(first.kind, PlayerKind::Expectimax);
    assert_eq!(first.search.depth, 1);
    assert_eq!(first.search.tie_break, TieBreak::FirstFound);
    assert_eq!(first.weights().unwrap(), HeuristicWeights::smooth());

    let minimax = &config.players[2];
    assert!(!minimax.search.pruning);
    assert_eq!(minimax.search.adversary, AdversaryModel::Uniform);
    assert_eq!(minimax.weights().unwrap(), HeuristicWeights::default());
}

#[test]
fn test_build_players() {
    let config = ArenaConfig::from_toml_str(SAMPLE).unwrap();
    let names: Vec<String> = config
        .players
        .iter()
        .map(|spec| {
            let player = spec.build(&config.session).unwrap();
            spec.label(player.as_ref())
        })
        .collect();
    assert_eq!(names, ["expectimax-d1", "adaptive", "minimax-d2", "random"]);
}

#[test]
fn test_explicit_weights_win_over_preset() {
    let config = ArenaConfig::from_toml_str(
        r#"
        [[players]]
        kind = "expectimax"
        preset = "snake"
        weights = { empty_tiles = 1.0 }
        "#,
    )
    .unwrap();
    let weights = config.players[0].weights().unwrap();
    assert_eq!(weights.empty_tiles, 1.0);
}

#[test]
fn test_unknown_preset_is_rejected() {
    let err = ArenaConfig::from_toml_str(
        r#"
        [[players]]
        kind = "minimax"
        preset = "corner"
        "#,
    )
    .unwrap_err();
    assert!(format!("{err:#}").contains("corner"));
}

#[test]
fn test_zero_depth_is_rejected() {
    let result = ArenaConfig::from_toml_str(
        r#"
        [[players]]
        kind = "expectimax"
        search = { depth = 0 }
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_empty_config_is_rejected() {
    assert!(ArenaConfig::from_toml_str("name = \"nobody\"").is_err());
}

#[test]
fn test_unknown_kind_is_rejected() {
    let result = ArenaConfig::from_toml_str(
        r#"
        [[players]]
        kind = "neural"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_tiny_board_is_rejected() {
    let result = ArenaConfig::from_toml_str(
        r#"
        [session]
        width = 1

        [[players]]
        kind = "random"
        "#,
    );
    assert!(result.is_err());
}
