//! Expectimax Player
//!
//! Searches slides against the real spawn distribution: every empty cell is
//! equally likely and a 2 appears nine times out of ten.
//! Optionally picks the depth per move from the number of empty cells.

use search_core::{DepthController, Expectiminimax, SearchConfig};
use tile_game::{Board, HeuristicWeights, MoveChoice, Player, TileError, TileHeuristic, TileRules};
use tracing::debug;

#[cfg(test)]
mod lib_tests;

/// Player driven by expectiminimax search.
pub struct ExpectimaxPlayer {
    rules: TileRules,
    search: Expectiminimax<TileHeuristic>,
    adaptive: Option<DepthController>,
    name: String,
}

impl ExpectimaxPlayer {
    pub fn new(weights: HeuristicWeights, config: SearchConfig) -> Self {
        let name = format!("expectimax-d{}", config.depth);
        Self {
            rules: TileRules::default(),
            search: Expectiminimax::new(TileHeuristic::new(weights), config),
            adaptive: None,
            name,
        }
    }

    /// Choose the depth of every move with `controller` instead of the
    /// configured fixed depth.
    pub fn with_adaptive_depth(mut self, controller: DepthController) -> Self {
        self.adaptive = Some(controller);
        self.name = "expectimax-adaptive".to_string();
        self
    }

    pub fn with_rules(mut self, rules: TileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        self.search.config()
    }
}

impl Player for ExpectimaxPlayer {
    fn choose_move(&mut self, board: &Board) -> Result<MoveChoice, TileError> {
        let result = match &self.adaptive {
            Some(controller) => self.search.choose_action_adaptive(&self.rules, board, controller)?,
            None => self.search.choose_action(&self.rules, board)?,
        };

        debug!(
            direction = ?result.best_action,
            value = result.value,
            depth = result.depth,
            empty = board.count_empty(),
            "expectimax move"
        );

        Ok(MoveChoice {
            direction: result.best_action,
            value: result.value,
            depth: result.depth,
            nodes: result.stats.nodes,
            stopped: result.stopped,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
