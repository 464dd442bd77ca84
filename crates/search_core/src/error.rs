//! Error types for the search engine

use thiserror::Error;

/// Failures surfaced by a search. None of them are retried: the search is
/// deterministic given its inputs and seed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A node that is neither won nor lost reported no legal actions.
    #[error("illegal state: agent {agent} has no legal actions at ply {ply} in a non-terminal state")]
    IllegalState { agent: usize, ply: u32 },

    /// The outcomes enumerated at a chance node do not sum to one.
    #[error("malformed distribution: chance outcome probabilities sum to {total}, expected 1.0")]
    MalformedDistribution { total: f64 },

    /// A search was requested with a non-positive maximum depth.
    #[error("invalid search depth {depth}: depth must be at least 1")]
    DepthConfiguration { depth: u32 },

    /// The adapter reported a game without any agents.
    #[error("invalid agent count {agents}: at least one agent is required")]
    InvalidAgentCount { agents: usize },

    /// A depth schedule is not a monotone step function.
    #[error("invalid depth schedule: {0}")]
    InvalidDepthSchedule(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
