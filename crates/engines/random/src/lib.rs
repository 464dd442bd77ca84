//! Random Player
//!
//! Picks uniformly among the slides that change the board.
//! Useful for:
//! - Testing the arena before tuning heuristics
//! - Baseline comparisons (any searching player should easily beat this)

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tile_game::{Board, MoveChoice, Player, TileError};


/// A player that slides in a random legal direction.
///
/// It never evaluates anything. Seed it for reproducible games.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, board: &Board) -> Result<MoveChoice, TileError> {
        let direction = board.legal_directions().choose(&mut self.rng).copied();
        Ok(MoveChoice::immediate(direction))
    }

    fn name(&self) -> &str {
        "random"
    }
}
