//! Session runner for playing batches of games with one player

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tile_game::{Board, Player, TileError, TileRules};
use tracing::{debug, info};

/// Configuration for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of games to play
    pub games: u32,
    pub width: usize,
    pub height: usize,
    /// Seed for board generation (None = random). Game `i` uses `seed + i`,
    /// so players compared under the same seed see the same spawns as long
    /// as they play the same slides.
    pub seed: Option<u64>,
    /// Maximum slides per game
    pub max_moves: u32,
    /// Stop a game as won once this tile appears (None = play until stuck)
    pub target: Option<u32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            games: 25,
            width: 4,
            height: 4,
            seed: None,
            max_moves: 10_000,
            target: None,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    /// The target tile was reached
    Won,
    /// No slide changes the board
    Stuck,
    /// The move cap was hit
    MoveCap,
}

/// Summary of one finished game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub moves: u32,
    /// Points earned by merges
    pub score: u64,
    /// Sum of the tiles left on the board
    pub total: u64,
    pub max_tile: u32,
    pub outcome: GameOutcome,
    /// Nodes searched over the whole game
    pub nodes: u64,
}

/// All games one player played in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResult {
    pub player: String,
    pub config: SessionConfig,
    pub games: Vec<GameRecord>,
}

impl SessionResult {
    pub fn average_total(&self) -> f64 {
        self.average(|g| g.total as f64)
    }

    pub fn average_score(&self) -> f64 {
        self.average(|g| g.score as f64)
    }

    pub fn best_total(&self) -> u64 {
        self.games.iter().map(|g| g.total).max().unwrap_or(0)
    }

    pub fn best_score(&self) -> u64 {
        self.games.iter().map(|g| g.score).max().unwrap_or(0)
    }

    pub fn wins(&self) -> usize {
        self.games
            .iter()
            .filter(|g| g.outcome == GameOutcome::Won)
            .count()
    }

    /// Number of games that finished with each max tile.
    pub fn tile_histogram(&self) -> BTreeMap<u32, u32> {
        let mut histogram = BTreeMap::new();
        for game in &self.games {
            *histogram.entry(game.max_tile).or_insert(0) += 1;
        }
        histogram
    }

    fn average(&self, f: impl Fn(&GameRecord) -> f64) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        self.games.iter().map(f).sum::<f64>() / self.games.len() as f64
    }
}

/// Plays sessions of games
pub struct Session {
    config: SessionConfig,
    rules: TileRules,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let rules = TileRules::new().with_target(config.target);
        Self { config, rules }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Play `config.games` games with `player`.
    pub fn run(&self, player: &mut dyn Player) -> Result<SessionResult, TileError> {
        let base = self.config.seed.unwrap_or_else(rand::random);
        let mut games = Vec::with_capacity(self.config.games as usize);

        for game_num in 0..self.config.games {
            let seed = base.wrapping_add(game_num as u64);
            let record = self.play_game(player, seed)?;
            info!(
                player = player.name(),
                game = game_num + 1,
                of = self.config.games,
                total = record.total,
                score = record.score,
                max_tile = record.max_tile,
                outcome = ?record.outcome,
                "game finished"
            );
            games.push(record);
        }

        Ok(SessionResult {
            player: player.name().to_string(),
            config: SessionConfig {
                seed: Some(base),
                ..self.config.clone()
            },
            games,
        })
    }

    /// Play a single game from a board generated by `seed`.
    pub fn play_game(&self, player: &mut dyn Player, seed: u64) -> Result<GameRecord, TileError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new_game(self.config.width, self.config.height, &mut rng)?;
        player.new_game();

        let mut moves = 0;
        let mut nodes = 0;
        let outcome = loop {
            if self.rules.is_won(&board) {
                break GameOutcome::Won;
            }
            if moves >= self.config.max_moves {
                break GameOutcome::MoveCap;
            }

            let choice = player.choose_move(&board)?;
            nodes += choice.nodes;
            let Some(direction) = choice.direction else {
                break GameOutcome::Stuck;
            };
            board = board
                .try_slide(direction)
                .ok_or(TileError::IllegalMove(direction))?;
            board.spawn_random(&mut rng);
            moves += 1;
            debug!(move_num = moves, %direction, value = choice.value, "slide played");
        };

        Ok(GameRecord {
            seed,
            moves,
            score: board.score(),
            total: board.total(),
            max_tile: board.max_tile(),
            outcome,
            nodes,
        })
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
