//! Adaptive lookahead.
//!
//! Maps the number of open positions in a state to a search depth through a
//! monotone step function: many open positions mean a wide chance layer and
//! a shallow search, few open positions mean a narrow one and a deeper search.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::game::StochasticGame;

/// One step of the schedule: used when more than `min_open` positions are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthTier {
    pub min_open: usize,
    pub depth: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthController {
    tiers: Vec<DepthTier>,
    fallback: u32,
}

impl DepthController {
    /// Builds a schedule. Tiers may be given in any order; they are sorted by
    /// descending `min_open` and must not get shallower as fewer positions
    /// are open.
    pub fn new(mut tiers: Vec<DepthTier>, fallback: u32) -> Result<Self> {
        tiers.sort_by(|a, b| b.min_open.cmp(&a.min_open));

        if fallback == 0 || tiers.iter().any(|t| t.depth == 0) {
            return Err(SearchError::InvalidDepthSchedule(
                "depths must be at least 1".to_string(),
            ));
        }
        for pair in tiers.windows(2) {
            if pair[0].min_open == pair[1].min_open {
                return Err(SearchError::InvalidDepthSchedule(format!(
                    "duplicate threshold {}",
                    pair[0].min_open
                )));
            }
            if pair[1].depth < pair[0].depth {
                return Err(SearchError::InvalidDepthSchedule(format!(
                    "depth {} above {} open positions is deeper than depth {} above {}",
                    pair[0].depth, pair[0].min_open, pair[1].depth, pair[1].min_open
                )));
            }
        }
        if let Some(last) = tiers.last() {
            if fallback < last.depth {
                return Err(SearchError::InvalidDepthSchedule(format!(
                    "fallback depth {} is shallower than {}",
                    fallback, last.depth
                )));
            }
        }

        Ok(Self { tiers, fallback })
    }

    /// A schedule that always returns `depth`.
    pub fn fixed(depth: u32) -> Result<Self> {
        Self::new(Vec::new(), depth)
    }

    /// Three-tier schedule for a board of `cells` positions: more than a
    /// quarter open searches 1 move, more than an eighth 2 moves, else 3.
    /// On boards too small to tell a quarter from an eighth the middle tier
    /// is dropped.
    pub fn for_area(cells: usize) -> Self {
        let mut tiers = vec![DepthTier {
            min_open: cells / 4,
            depth: 1,
        }];
        if cells / 8 < cells / 4 {
            tiers.push(DepthTier {
                min_open: cells / 8,
                depth: 2,
            });
        }
        Self { tiers, fallback: 3 }
    }

    pub fn tiers(&self) -> &[DepthTier] {
        &self.tiers
    }

    pub fn depth_for(&self, open: usize) -> u32 {
        self.tiers
            .iter()
            .find(|tier| open > tier.min_open)
            .map(|tier| tier.depth)
            .unwrap_or(self.fallback)
    }

    pub fn choose_depth<G: StochasticGame>(&self, game: &G, state: &G::State) -> u32 {
        self.depth_for(game.eligible_positions(state).len())
    }
}

#[cfg(test)]
#[path = "depth_tests.rs"]
mod depth_tests;
