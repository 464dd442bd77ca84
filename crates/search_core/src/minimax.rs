//! Minimax with optional alpha-beta pruning for turn-taking games.
//!
//! Agent 0 maximizes. Every other agent either minimizes or, under the
//! uniform adversary model, is a chance node averaging over its legal
//! actions. Pruning only ever happens at MAX/MIN nodes.

use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::classifier::{AdversarialClassifier, AdversaryModel, Node, Turn};
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::game::{AdversarialGame, Evaluator, MAX_AGENT};
use crate::limits::{Budget, SearchLimits};
use crate::selection::seeded_rng;
use crate::{check_distribution, SearchResult, SearchStats};

/// Depth-limited search over an [`AdversarialGame`].
pub struct AdversarialSearch<E> {
    evaluator: E,
    config: SearchConfig,
    rng: StdRng,
    stats: SearchStats,
}

impl<E> AdversarialSearch<E> {
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

    /// Statistics from the last call to [`Self::choose_action`] or [`Self::value`].
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Backed-up value of `state` with agent 0 to move, using the generic
    /// recursion from the root. Ignores time and node budgets.
    pub fn value<G>(&mut self, game: &G, state: &G::State) -> Result<f64>
    where
        G: AdversarialGame,
        E: Evaluator<G::State>,
    {
        self.config.validate()?;
        let classifier = AdversarialClassifier::new(game.num_agents(state), self.config.adversary)?;
        let mut searcher = Searcher::new(
            game,
            &self.evaluator,
            classifier,
            &self.config,
            SearchLimits::unlimited(),
        );
        let value = searcher.search(state, Turn::root(), f64::NEG_INFINITY, f64::INFINITY);
        self.stats = searcher.stats();
        value
    }

    /// Searches every root action explicitly and picks the best one.
    ///
    /// `best_action` is `None` when the root is already won or lost.
    pub fn choose_action<G>(&mut self, game: &G, state: &G::State) -> Result<SearchResult<G::Action>>
    where
        G: AdversarialGame,
        E: Evaluator<G::State>,
    {
        self.config.validate()?;
        let classifier = AdversarialClassifier::new(game.num_agents(state), self.config.adversary)?;
        let mut searcher = Searcher::new(
            game,
            &self.evaluator,
            classifier,
            &self.config,
            self.config.limits(),
        );

        let root = Turn::root();
        searcher.budget.tick();
        if game.is_win(state) || game.is_lose(state) {
            let value = searcher.evaluate(state);
            self.stats = searcher.stats();
            return Ok(SearchResult::terminal(value, self.config.depth, self.stats));
        }

        let actions = searcher.actions(state, root)?;
        let (next, _) = classifier.advance(root);

        // Root children always get the full window; root values stay exact.
        let mut root_values = Vec::with_capacity(actions.len());
        let mut stopped = false;
        for &action in &actions {
            let child = game.successor(state, MAX_AGENT, action);
            let value = searcher.search(&child, next, f64::NEG_INFINITY, f64::INFINITY)?;
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
            self.config.depth,
            self.stats,
            stopped,
        );
        debug!(
            action = ?result.best_action,
            value = result.value,
            depth = self.config.depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            stopped,
            "adversarial search finished"
        );
        Ok(result)
    }
}

/// State of one search call: the recursion and its bookkeeping.
struct Searcher<'a, G, E> {
    game: &'a G,
    evaluator: &'a E,
    classifier: AdversarialClassifier,
    max_ply: u32,
    prune: bool,
    exclude_stationary: bool,
    budget: Budget,
    evaluations: u64,
    cutoffs: u64,
}

impl<'a, G, E> Searcher<'a, G, E>
where
    G: AdversarialGame,
    E: Evaluator<G::State>,
{
    fn new(
        game: &'a G,
        evaluator: &'a E,
        classifier: AdversarialClassifier,
        config: &SearchConfig,
        limits: SearchLimits,
    ) -> Self {
        Self {
            game,
            evaluator,
            classifier,
            max_ply: config.depth,
            prune: config.pruning && config.adversary == AdversaryModel::Minimizing,
            exclude_stationary: config.exclude_stationary,
            budget: limits.start(),
            evaluations: 0,
            cutoffs: 0,
        }
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            nodes: self.budget.nodes(),
            evaluations: self.evaluations,
            cutoffs: self.cutoffs,
        }
    }

    fn evaluate(&mut self, state: &G::State) -> f64 {
        self.evaluations += 1;
        self.evaluator.evaluate(state)
    }

    /// Legal actions after the stationary filter. The filter never empties
    /// an action list on its own.
    fn actions(&self, state: &G::State, turn: Turn) -> Result<Vec<G::Action>> {
        let mut actions = self.game.legal_actions(state, turn.agent);
        if self.exclude_stationary {
            let moving: Vec<G::Action> = actions
                .iter()
                .copied()
                .filter(|a| !self.game.is_stationary(a))
                .collect();
            if !moving.is_empty() {
                actions = moving;
            }
        }
        if actions.is_empty() {
            return Err(SearchError::IllegalState {
                agent: turn.agent,
                ply: turn.ply,
            });
        }
        Ok(actions)
    }

    /// Value of `state` at `turn`. Once the budget is exhausted the returned
    /// value is meaningless and the caller must discard it.
    fn search(&mut self, state: &G::State, turn: Turn, mut alpha: f64, mut beta: f64) -> Result<f64> {
        if self.budget.tick() {
            return Ok(0.0);
        }

        if self.game.is_win(state)
            || self.game.is_lose(state)
            || self.classifier.is_cutoff(turn, self.max_ply)
        {
            return Ok(self.evaluate(state));
        }

        let actions = self.actions(state, turn)?;
        let (next, _) = self.classifier.advance(turn);

        match self.classifier.classify(turn) {
            Node::Max => {
                let mut best = f64::NEG_INFINITY;
                for action in actions {
                    let child = self.game.successor(state, turn.agent, action);
                    let value = self.search(&child, next, alpha, beta)?;
                    if self.budget.is_stopped() {
                        return Ok(best);
                    }
                    best = best.max(value);
                    if self.prune && best >= beta {
                        self.cutoffs += 1;
                        return Ok(best);
                    }
                    alpha = alpha.max(best);
                }
                Ok(best)
            }
            Node::Min => {
                let mut best = f64::INFINITY;
                for action in actions {
                    let child = self.game.successor(state, turn.agent, action);
                    let value = self.search(&child, next, alpha, beta)?;
                    if self.budget.is_stopped() {
                        return Ok(best);
                    }
                    best = best.min(value);
                    if self.prune && best <= alpha {
                        self.cutoffs += 1;
                        return Ok(best);
                    }
                    beta = beta.min(best);
                }
                Ok(best)
            }
            Node::Chance => {
                let probability = 1.0 / actions.len() as f64;
                check_distribution(probability * actions.len() as f64)?;
                let mut expected = 0.0;
                for action in actions {
                    let child = self.game.successor(state, turn.agent, action);
                    let value = self.search(&child, next, f64::NEG_INFINITY, f64::INFINITY)?;
                    if self.budget.is_stopped() {
                        return Ok(expected);
                    }
                    expected += probability * value;
                }
                Ok(expected)
            }
        }
    }
}

#[cfg(test)]
#[path = "minimax_tests.rs"]
mod minimax_tests;
