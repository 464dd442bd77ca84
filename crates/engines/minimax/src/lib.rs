//! Minimax Player
//!
//! Treats every spawn as chosen by an opponent that wants the worst board
//! for us. One ply of depth is one slide followed by one spawn. With the
//! uniform adversary model the same search becomes expectimax over spawns
//! that ignores the 2/4 odds.

use search_core::{AdversarialSearch, SearchConfig};
use tile_game::{
    Board, HeuristicWeights, MoveChoice, Player, TileAction, TileError, TileHeuristic, TileRules,
};
use tracing::debug;

#[cfg(test)]
mod lib_tests;

/// Player driven by minimax with alpha-beta pruning.
pub struct MinimaxPlayer {
    rules: TileRules,
    search: AdversarialSearch<TileHeuristic>,
    name: String,
}

impl MinimaxPlayer {
    pub fn new(weights: HeuristicWeights, config: SearchConfig) -> Self {
        let name = format!("minimax-d{}", config.depth);
        Self {
            rules: TileRules::default(),
            search: AdversarialSearch::new(TileHeuristic::new(weights), config),
            name,
        }
    }

    pub fn with_rules(mut self, rules: TileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        self.search.config()
    }
}

impl Player for MinimaxPlayer {
    fn choose_move(&mut self, board: &Board) -> Result<MoveChoice, TileError> {
        let result = self.search.choose_action(&self.rules, board)?;

        // Agent 0 only ever slides.
        let direction = match result.best_action {
            Some(TileAction::Slide(direction)) => Some(direction),
            Some(TileAction::Spawn { .. }) | None => None,
        };

        debug!(
            ?direction,
            value = result.value,
            cutoffs = result.stats.cutoffs,
            "minimax move"
        );

        Ok(MoveChoice {
            direction,
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
