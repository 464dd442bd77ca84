//! Depth-limited multi-agent game-tree search.
//!
//! Three kinds of nodes are explored: a maximizing agent (agent 0),
//! minimizing adversaries, and chance nodes for random events. Two engines
//! share the same root-selection machinery:
//! - [`AdversarialSearch`]: minimax with optional alpha-beta pruning, or
//!   expectimax when adversaries are modelled as uniformly random.
//! - [`Expectiminimax`]: the agent alternates with a random environment
//!   drawing from a known outcome distribution.
//!
//! The game itself is supplied through [`AdversarialGame`] or
//! [`StochasticGame`], and leaves are scored by any [`Evaluator`].

pub mod classifier;
pub mod config;
pub mod depth;
pub mod error;
pub mod expectimax;
pub mod game;
pub mod limits;
pub mod minimax;
pub mod selection;

pub use classifier::*;
pub use config::SearchConfig;
pub use depth::{DepthController, DepthTier};
pub use error::{Result, SearchError};
pub use expectimax::Expectiminimax;
pub use game::*;
pub use limits::{Budget, SearchLimits};
pub use minimax::AdversarialSearch;
pub use selection::{seeded_rng, select_best, TieBreak};

use rand::rngs::StdRng;

/// Outcome probabilities at a chance node must sum to one within this tolerance.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Counters collected during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, including the root and leaves
    pub nodes: u64,
    /// Calls to the evaluation function
    pub evaluations: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

/// Result of a root search
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// The chosen action (None if the root is terminal)
    pub best_action: Option<A>,
    /// Backed-up value of the chosen action
    pub value: f64,
    /// Value of every fully searched root action, in enumeration order
    pub root_values: Vec<(A, f64)>,
    /// Depth the search was configured with
    pub depth: u32,
    pub stats: SearchStats,
    /// Whether search was stopped early by a time or node budget
    pub stopped: bool,
}

impl<A: Copy> SearchResult<A> {
    pub(crate) fn terminal(value: f64, depth: u32, stats: SearchStats) -> Self {
        Self {
            best_action: None,
            value,
            root_values: Vec::new(),
            depth,
            stats,
            stopped: false,
        }
    }

    /// Selects among the searched root actions. When the budget stopped the
    /// search before any action finished, falls back to the first legal one.
    pub(crate) fn from_root_values(
        root_values: Vec<(A, f64)>,
        actions: &[A],
        tie_break: TieBreak,
        rng: &mut StdRng,
        depth: u32,
        stats: SearchStats,
        stopped: bool,
    ) -> Self {
        let (best_action, value) = match select_best(&root_values, tie_break, rng) {
            Some((action, value)) => (Some(action), value),
            None => (actions.first().copied(), f64::NEG_INFINITY),
        };
        Self {
            best_action,
            value,
            root_values,
            depth,
            stats,
            stopped,
        }
    }
}

/// Fails with [`SearchError::MalformedDistribution`] unless `total` is one.
pub fn check_distribution(total: f64) -> Result<()> {
    if (total - 1.0).abs() > PROBABILITY_TOLERANCE || total.is_nan() {
        return Err(SearchError::MalformedDistribution { total });
    }
    Ok(())
}

/// Chooses an action for agent 0 with alpha-beta search at `max_depth`
/// plies, using default settings otherwise.
///
/// Returns `Ok(None)` when the state is already won or lost.
pub fn choose_action<G, E>(
    game: &G,
    state: &G::State,
    max_depth: u32,
    evaluator: E,
) -> Result<Option<G::Action>>
where
    G: AdversarialGame,
    E: Evaluator<G::State>,
{
    let mut search = AdversarialSearch::new(evaluator, SearchConfig::depth(max_depth));
    Ok(search.choose_action(game, state)?.best_action)
}
