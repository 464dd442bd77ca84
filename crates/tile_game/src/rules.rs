//! Game adapters that let the search engines play the tile puzzle.
//!
//! The same rules are exposed twice: as a [`StochasticGame`] where tiles
//! spawn at random, and as a two-agent [`AdversarialGame`] where a second
//! agent chooses where the next tile lands.

use search_core::{AdversarialGame, AgentIndex, StochasticGame};

use crate::board::{Board, SPAWN_DISTRIBUTION};
use crate::types::{Cell, Direction};

/// An action of either agent in the adversarial view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileAction {
    Slide(Direction),
    Spawn { cell: Cell, value: u32 },
}

/// Rules of the sliding-tile puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct TileRules {
    spawn: Vec<(u32, f64)>,
    target: Option<u32>,
}

impl Default for TileRules {
    fn default() -> Self {
        Self {
            spawn: SPAWN_DISTRIBUTION.to_vec(),
            target: None,
        }
    }
}

impl TileRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat reaching `target` as a win.
    pub fn with_target(mut self, target: Option<u32>) -> Self {
        self.target = target;
        self
    }

    pub fn with_spawn(mut self, spawn: Vec<(u32, f64)>) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn target(&self) -> Option<u32> {
        self.target
    }

    pub fn spawn(&self) -> &[(u32, f64)] {
        &self.spawn
    }

    pub fn is_won(&self, board: &Board) -> bool {
        self.target.is_some_and(|t| board.max_tile() >= t)
    }

    pub fn is_stuck(&self, board: &Board) -> bool {
        !board.can_move()
    }
}

impl StochasticGame for TileRules {
    type State = Board;
    type Action = Direction;
    type Position = Cell;
    type Outcome = u32;

    fn legal_actions(&self, board: &Board) -> Vec<Direction> {
        board.legal_directions()
    }

    fn successor(&self, board: &Board, direction: Direction) -> Board {
        board.slide(direction)
    }

    fn is_win(&self, board: &Board) -> bool {
        self.is_won(board)
    }

    fn is_lose(&self, board: &Board) -> bool {
        self.is_stuck(board)
    }

    fn eligible_positions(&self, board: &Board) -> Vec<Cell> {
        board.empty_cells()
    }

    fn outcomes(&self) -> &[(u32, f64)] {
        &self.spawn
    }

    fn place(&self, board: &Board, cell: Cell, value: u32) -> Board {
        board.with_tile(cell, value)
    }
}

/// Agent 0 slides, agent 1 places any spawnable tile on any empty cell.
impl AdversarialGame for TileRules {
    type State = Board;
    type Action = TileAction;

    fn num_agents(&self, _board: &Board) -> usize {
        2
    }

    fn legal_actions(&self, board: &Board, agent: AgentIndex) -> Vec<TileAction> {
        if agent == 0 {
            return board
                .legal_directions()
                .into_iter()
                .map(TileAction::Slide)
                .collect();
        }
        board
            .empty_cells()
            .into_iter()
            .flat_map(|cell| {
                self.spawn
                    .iter()
                    .map(move |&(value, _)| TileAction::Spawn { cell, value })
            })
            .collect()
    }

    fn successor(&self, board: &Board, _agent: AgentIndex, action: TileAction) -> Board {
        match action {
            TileAction::Slide(direction) => board.slide(direction),
            TileAction::Spawn { cell, value } => board.with_tile(cell, value),
        }
    }

    fn is_win(&self, board: &Board) -> bool {
        self.is_won(board)
    }

    fn is_lose(&self, board: &Board) -> bool {
        self.is_stuck(board)
    }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
