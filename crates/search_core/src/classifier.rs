//! Node classification and ply bookkeeping.
//!
//! This is the single place that decides whether a node maximizes,
//! minimizes or averages, and which turn follows it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::game::{AgentIndex, MAX_AGENT};

/// How a node backs up the values of its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Node {
    Max,
    Min,
    Chance,
}

/// How agents other than the maximizing one are modelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdversaryModel {
    /// Adversaries pick the action that is worst for agent 0.
    #[default]
    Minimizing,
    /// Adversaries pick uniformly at random among their legal actions.
    Uniform,
}

/// Position in the agent rotation. One ply is a full rotation through all agents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    pub agent: AgentIndex,
    pub ply: u32,
}

impl Turn {
    /// The maximizing agent's turn at the first ply.
    pub fn root() -> Self {
        Self {
            agent: MAX_AGENT,
            ply: 1,
        }
    }
}

/// Classifier for the turn-taking (adversarial) mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdversarialClassifier {
    num_agents: usize,
    adversary: AdversaryModel,
}

impl AdversarialClassifier {
    pub fn new(num_agents: usize, adversary: AdversaryModel) -> Result<Self> {
        if num_agents == 0 {
            return Err(SearchError::InvalidAgentCount { agents: num_agents });
        }
        Ok(Self {
            num_agents,
            adversary,
        })
    }

    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    pub fn classify(&self, turn: Turn) -> Node {
        if turn.agent == MAX_AGENT {
            return Node::Max;
        }
        match self.adversary {
            AdversaryModel::Minimizing => Node::Min,
            AdversaryModel::Uniform => Node::Chance,
        }
    }

    /// The turn after `turn` expands one action, and whether it opens a new ply.
    pub fn advance(&self, turn: Turn) -> (Turn, bool) {
        let agent = (turn.agent + 1) % self.num_agents;
        if agent == MAX_AGENT {
            (
                Turn {
                    agent,
                    ply: turn.ply + 1,
                },
                true,
            )
        } else {
            (
                Turn {
                    agent,
                    ply: turn.ply,
                },
                false,
            )
        }
    }

    /// The search stops expanding once the ply counter passes `max_ply`.
    #[inline]
    pub fn is_cutoff(&self, turn: Turn, max_ply: u32) -> bool {
        turn.ply > max_ply
    }
}

/// Phase of the stochastic mode: the agent moves, then the environment acts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Max,
    Chance,
}

impl Phase {
    pub fn node(self) -> Node {
        match self {
            Phase::Max => Node::Max,
            Phase::Chance => Node::Chance,
        }
    }

    pub fn next(self) -> Phase {
        match self {
            Phase::Max => Phase::Chance,
            Phase::Chance => Phase::Max,
        }
    }
}

/// Number of phase units spanned by `moves` full agent+environment moves.
#[inline]
pub fn phase_units(moves: u32) -> u32 {
    moves.saturating_mul(2)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod classifier_tests;
