use super::*;
use random_engine::RandomPlayer;
use tile_game::{Direction, MoveChoice};

/// Always slides the same way, or gives up when that slide is a no-op.
struct Stubborn(Direction);

impl Player for Stubborn {
    fn choose_move(&mut self, board: &Board) -> Result<MoveChoice, TileError> {
        let direction = board.try_slide(self.0).map(|_| self.0);
        Ok(MoveChoice::immediate(direction))
    }

    fn name(&self) -> &str {
        "stubborn"
    }
}

/// Claims a slide even when it changes nothing.
struct Cheater;

impl Player for Cheater {
    fn choose_move(&mut self, _board: &Board) -> Result<MoveChoice, TileError> {
        Ok(MoveChoice::immediate(Some(Direction::Up)))
    }

    fn name(&self) -> &str {
        "cheater"
    }
}

fn config(games: u32) -> SessionConfig {
    SessionConfig {
        games,
        seed: Some(11),
        ..Default::default()
    }
}

#[test]
fn test_session_plays_every_game() {
    let session = Session::new(config(3));
    let mut player = RandomPlayer::new(Some(1));
    let result = session.run(&mut player).unwrap();

    assert_eq!(result.games.len(), 3);
    assert_eq!(result.player, "random");
    for game in &result.games {
        assert_eq!(game.outcome, GameOutcome::Stuck);
        assert!(game.moves > 0);
        assert!(game.total >= 4);
        assert!(game.max_tile.is_power_of_two());
    }
    assert_eq!(result.tile_histogram().values().sum::<u32>(), 3);
}

#[test]
fn test_same_seed_same_games() {
    let session = Session::new(config(2));
    let a = session.run(&mut RandomPlayer::new(Some(5))).unwrap();
    let b = session.run(&mut RandomPlayer::new(Some(5))).unwrap();
    assert_eq!(a.games, b.games);
}

#[test]
fn test_move_cap() {
    let session = Session::new(SessionConfig {
        max_moves: 5,
        ..config(1)
    });
    let result = session.run(&mut RandomPlayer::new(Some(2))).unwrap();
    assert_eq!(result.games[0].outcome, GameOutcome::MoveCap);
    assert_eq!(result.games[0].moves, 5);
}

#[test]
fn test_target_tile_wins() {
    let session = Session::new(SessionConfig {
        target: Some(8),
        ..config(4)
    });
    let result = session.run(&mut RandomPlayer::new(Some(3))).unwrap();
    for game in &result.games {
        if game.outcome == GameOutcome::Won {
            assert!(game.max_tile >= 8);
        } else {
            assert!(game.max_tile < 8);
        }
    }
}

#[test]
fn test_player_that_gives_up_is_stuck() {
    let session = Session::new(config(1));
    let result = session.run(&mut Stubborn(Direction::Left)).unwrap();
    assert_eq!(result.games[0].outcome, GameOutcome::Stuck);
}

#[test]
fn test_illegal_slide_is_an_error() {
    let session = Session::new(config(1));
    let mut player = Cheater;
    // Sliding up forever eventually stops changing the board.
    let err = session.run(&mut player).unwrap_err();
    assert_eq!(err, TileError::IllegalMove(Direction::Up));
}

#[test]
fn test_aggregates() {
    let record = |total, score, max_tile, outcome| GameRecord {
        seed: 0,
        moves: 1,
        score,
        total,
        max_tile,
        outcome,
        nodes: 1,
    };
    let result = SessionResult {
        player: "p".to_string(),
        config: SessionConfig::default(),
        games: vec![
            record(100, 400, 64, GameOutcome::Stuck),
            record(300, 1200, 128, GameOutcome::Won),
            record(200, 800, 64, GameOutcome::Stuck),
        ],
    };
    assert_eq!(result.average_total(), 200.0);
    assert_eq!(result.best_total(), 300);
    assert_eq!(result.average_score(), 800.0);
    assert_eq!(result.best_score(), 1200);
    assert_eq!(result.wins(), 1);
    let histogram = result.tile_histogram();
    assert_eq!(histogram.get(&64), Some(&2));
    assert_eq!(histogram.get(&128), Some(&1));
}
