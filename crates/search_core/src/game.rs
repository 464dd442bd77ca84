//! Contracts between the search engine and the game it explores.
//!
//! The engine never mutates a state. Every successor is a fresh value owned
//! by the caller of `successor`/`place`, so sibling branches cannot observe
//! each other and there is nothing to undo on early returns.

use std::fmt::Debug;

/// Index of the agent whose turn a node represents. Agent 0 maximizes.
pub type AgentIndex = usize;

/// The agent the search plays for.
pub const MAX_AGENT: AgentIndex = 0;

/// Rules of a game where agents take turns in a fixed rotation.
pub trait AdversarialGame {
    type State: Clone;
    type Action: Copy + PartialEq + Debug;

    /// Number of agents taking turns, including the maximizing agent.
    fn num_agents(&self, state: &Self::State) -> usize;

    /// Legal actions for `agent`, in the order the search should try them.
    fn legal_actions(&self, state: &Self::State, agent: AgentIndex) -> Vec<Self::Action>;

    /// State after `agent` plays `action`.
    fn successor(&self, state: &Self::State, agent: AgentIndex, action: Self::Action)
        -> Self::State;

    fn is_win(&self, state: &Self::State) -> bool;

    fn is_lose(&self, state: &Self::State) -> bool;

    /// Whether `action` is the "stand still" move that the stationary filter
    /// removes from consideration.
    fn is_stationary(&self, _action: &Self::Action) -> bool {
        false
    }
}

/// Rules of a game where the maximizing agent alternates with a random
/// environment event drawn from a known distribution.
pub trait StochasticGame {
    type State: Clone;
    type Action: Copy + PartialEq + Debug;
    type Position: Copy + Debug;
    type Outcome: Copy + Debug;

    /// Actions available to the maximizing agent.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn successor(&self, state: &Self::State, action: Self::Action) -> Self::State;

    fn is_win(&self, state: &Self::State) -> bool;

    fn is_lose(&self, state: &Self::State) -> bool;

    /// Positions where the environment may act next.
    fn eligible_positions(&self, state: &Self::State) -> Vec<Self::Position>;

    /// Distribution of outcomes at any single eligible position.
    fn outcomes(&self) -> &[(Self::Outcome, f64)];

    /// State after the environment realizes `outcome` at `position`.
    fn place(
        &self,
        state: &Self::State,
        position: Self::Position,
        outcome: Self::Outcome,
    ) -> Self::State;
}

/// Maps a state to a scalar utility. Must be pure and finite.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S) -> f64,
{
    fn evaluate(&self, state: &S) -> f64 {
        self(state)
    }
}
