//! Expectiminimax for games against a random environment.
//!
//! MAX layers keep the best child; CHANCE layers enumerate every
//! `(position, outcome)` pair, weight it by `p(outcome) / |positions|` and
//! return the weighted sum. Nothing is pruned.
//!
//! Depth is counted in full moves (one MAX layer followed by one CHANCE
//! layer), so a depth of `d` spans `2·d` phases including the root.

use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::classifier::{phase_units, Phase};
use crate::config::{validate_depth, SearchConfig};
use crate::depth::DepthController;
use crate::error::{Result, SearchError};
use crate::game::{Evaluator, StochasticGame, MAX_AGENT};
use crate::limits::{Budget, SearchLimits};
use crate::selection::seeded_rng;
use crate::{check_distribution, SearchResult, SearchStats};

/// Depth-limited search over a [`StochasticGame`].
pub struct Expectiminimax<E> {
    evaluator: E,
    config: SearchConfig,
    rng: StdRng,
    stats: SearchStats,
}

impl<E> Expectiminimax<E> {
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        let rng = seeded_rng(config.seed);
        Self {
            evaluator,
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Statistics from the last search.
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Backed-up value of `state` with the agent to move, at the configured
    /// depth. Ignores time and node budgets.
    pub fn value<G>(&mut self, game: &G, state: &G::State) -> Result<f64>
    where
        G: StochasticGame,
        E: Evaluator<G::State>,
    {
        validate_depth(self.config.depth)?;
        let units = phase_units(self.config.depth);
        let mut searcher = Searcher::new(game, &self.evaluator, units, SearchLimits::unlimited());
        let value = searcher.search(state, Phase::Max, units);
        self.stats = searcher.stats();
        value
    }

    /// Best action at the configured depth.
    pub fn choose_action<G>(&mut self, game: &G, state: &G::State) -> Result<SearchResult<G::Action>>
    where
        G: StochasticGame,
        E: Evaluator<G::State>,
    {
        self.choose_action_with_depth(game, state, self.config.depth)
    }

    /// Best action at a depth picked by `controller` from the state's sparsity.
    pub fn choose_action_adaptive<G>(
        &mut self,
        game: &G,
        state: &G::State,
        controller: &DepthController,
    ) -> Result<SearchResult<G::Action>>
    where
        G: StochasticGame,
        E: Evaluator<G::State>,
    {
        let depth = controller.choose_depth(game, state);
        self.choose_action_with_depth(game, state, depth)
    }

    /// Searches every root action explicitly and picks the best one.
    ///
    /// `best_action` is `None` when the root is already won or lost.
    pub fn choose_action_with_depth<G>(
        &mut self,
        game: &G,
        state: &G::State,
        depth: u32,
    ) -> Result<SearchResult<G::Action>>
    where
        G: StochasticGame,
        E: Evaluator<G::State>,
    {
        validate_depth(depth)?;
        let units = phase_units(depth);
        let mut searcher = Searcher::new(game, &self.evaluator, units, self.config.limits());

        searcher.budget.tick();
        if game.is_win(state) || game.is_lose(state) {
            let value = searcher.evaluate(state);
            self.stats = searcher.stats();
            return Ok(SearchResult::terminal(value, depth, self.stats));
        }

        let actions = game.legal_actions(state);
        if actions.is_empty() {
            return Err(SearchError::IllegalState {
                agent: MAX_AGENT,
                ply: 1,
            });
        }

        let mut root_values = Vec::with_capacity(actions.len());
        let mut stopped = false;
        for &action in &actions {
            let child = game.successor(state, action);
            let value = searcher.search(&child, Phase::Chance, units - 1)?;
            if searcher.budget.is_stopped() {
                stopped = true;
                break;
            }
            trace!(?action, value, "root action searched");
            root_values.push((action, value));
        }

        self.stats = searcher.stats();
        let result = SearchResult::from_root_values(
            root_values,
            &actions,
            self.config.tie_break,
            &mut self.rng,
            depth,
            self.stats,
            stopped,
        );
        debug!(
            action = ?result.best_action,
            value = result.value,
            depth,
            nodes = self.stats.nodes,
            stopped,
            "expectiminimax search finished"
        );
        Ok(result)
    }
}

struct Searcher<'a, G, E> {
    game: &'a G,
    evaluator: &'a E,
    units: u32,
    budget: Budget,
    evaluations: u64,
}

impl<'a, G, E> Searcher<'a, G, E>
where
    G: StochasticGame,
    E: Evaluator<G::State>,
{
    fn new(game: &'a G, evaluator: &'a E, units: u32, limits: SearchLimits) -> Self {
        Self {
            game,
            evaluator,
            units,
            budget: limits.start(),
            evaluations: 0,
        }
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.budget.nodes(),
            evaluations: self.evaluations,
            cutoffs: 0,
        }
    }

    fn evaluate(&mut self, state: &G::State) -> f64 {
        self.evaluations += 1;
        self.evaluator.evaluate(state)
    }

    /// Value of `state` in `phase` with `remaining` phase units left. Once
    /// the budget is exhausted the returned value must be discarded.
    fn search(&mut self, state: &G::State, phase: Phase, remaining: u32) -> Result<f64> {
        if self.budget.tick() {
            return Ok(0.0);
        }

        if remaining == 0 || self.game.is_win(state) || self.game.is_lose(state) {
            return Ok(self.evaluate(state));
        }

        match phase {
            Phase::Max => {
                let actions = self.game.legal_actions(state);
                if actions.is_empty() {
                    return Err(SearchError::IllegalState {
                        agent: MAX_AGENT,
                        ply: (self.units - remaining) / 2 + 1,
                    });
                }
                let mut best = f64::NEG_INFINITY;
                for action in actions {
                    let child = self.game.successor(state, action);
                    let value = self.search(&child, phase.next(), remaining - 1)?;
                    if self.budget.is_stopped() {
                        return Ok(best);
                    }
                    best = best.max(value);
                }
                Ok(best)
            }
            Phase::Chance => {
                let positions = self.game.eligible_positions(state);
                if positions.is_empty() {
                    // The environment has nowhere to act; the state passes through.
                    return self.search(state, phase.next(), remaining - 1);
                }

                let game = self.game;
                let outcomes = game.outcomes();
                let share = 1.0 / positions.len() as f64;
                if outcomes.iter().any(|&(_, p)| !(0.0..=1.0).contains(&p)) {
                    return Err(SearchError::MalformedDistribution {
                        total: outcomes.iter().map(|&(_, p)| p).sum(),
                    });
                }
                let total = positions.len() as f64
                    * outcomes.iter().map(|&(_, p)| p * share).sum::<f64>();
                check_distribution(total)?;

                let mut expected = 0.0;
                for &position in &positions {
                    for &(outcome, probability) in outcomes {
                        let child = game.place(state, position, outcome);
                        let value = self.search(&child, phase.next(), remaining - 1)?;
                        if self.budget.is_stopped() {
                            return Ok(expected);
                        }
                        expected += probability * share * value;
                    }
                }
                Ok(expected)
            }
        }
    }
}

#[cfg(test)]
#[path = "expectimax_tests.rs"]
mod expectimax_tests;
