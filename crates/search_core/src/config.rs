//! Search configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::classifier::AdversaryModel;
use crate::error::{Result, SearchError};
use crate::limits::SearchLimits;
use crate::selection::TieBreak;

/// Configuration shared by the adversarial and stochastic searches.
///
/// `depth` counts plies (full agent rotations) for the adversarial search and
/// full agent+environment moves for the stochastic one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum lookahead. Must be at least 1.
    pub depth: u32,
    /// Enable alpha-beta pruning at MAX/MIN nodes.
    pub pruning: bool,
    /// How agents other than agent 0 are modelled.
    pub adversary: AdversaryModel,
    /// How ties between the best root actions are broken.
    pub tie_break: TieBreak,
    /// Drop "stand still" actions at every node.
    pub exclude_stationary: bool,
    /// Seed for tie-breaking (None = entropy).
    pub seed: Option<u64>,
    /// Wall-clock budget per search in milliseconds (None = infinite).
    pub move_time_ms: Option<u64>,
    /// Node budget per search (None = infinite).
    pub node_limit: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            pruning: true,
            adversary: AdversaryModel::Minimizing,
            tie_break: TieBreak::UniformRandom,
            exclude_stationary: true,
            seed: None,
            move_time_ms: None,
            node_limit: None,
        }
    }
}

impl SearchConfig {
    /// Default configuration at the given depth.
    pub fn depth(depth: u32) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_adversary(mut self, adversary: AdversaryModel) -> Self {
        self.adversary = adversary;
        self
    }

    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            move_time: self.move_time_ms.map(Duration::from_millis),
            node_limit: self.node_limit,
        }
    }

    /// Rejects configurations the search cannot run with.
    pub fn validate(&self) -> Result<()> {
        validate_depth(self.depth)
    }
}

/// A depth of zero would never expand the root.
pub fn validate_depth(depth: u32) -> Result<()> {
    if depth == 0 {
        return Err(SearchError::DepthConfiguration { depth });
    }
    Ok(())
}
