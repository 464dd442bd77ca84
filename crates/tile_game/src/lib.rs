//! The sliding-tile puzzle: board rules, search adapters, evaluation
//! heuristics and the interface every automated player implements.

pub mod board;
pub mod error;
pub mod heuristics;
pub mod rules;
pub mod types;

pub use board::{Board, SPAWN_DISTRIBUTION};
pub use error::TileError;
pub use heuristics::{HeuristicWeights, TileHeuristic};
pub use rules::{TileAction, TileRules};
pub use types::{Cell, Direction};

/// A player's decision for one board.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveChoice {
    /// The slide to play (None if no slide changes the board)
    pub direction: Option<Direction>,
    /// Backed-up value of the chosen slide, from the player's evaluator
    pub value: f64,
    /// Search depth used for this move
    pub depth: u32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early by a budget
    pub stopped: bool,
}

impl MoveChoice {
    /// A choice made without searching.
    pub fn immediate(direction: Option<Direction>) -> Self {
        Self {
            direction,
            value: 0.0,
            depth: 0,
            nodes: 1,
            stopped: false,
        }
    }
}

/// Trait that all players implement.
///
/// This allows the arena to pit expectimax, minimax and random players
/// against the same sequence of boards.
pub trait Player: Send {
    /// Picks a slide for `board`.
    fn choose_move(&mut self, board: &Board) -> Result<MoveChoice, TileError>;

    /// Short name used in reports
    fn name(&self) -> &str;

    /// Reset internal state before a new game.
    fn new_game(&mut self) {}
}
