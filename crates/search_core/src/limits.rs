//! Search limits beyond the depth cutoff.
//!
//! Depth is the primary bound. A wall-clock or node budget can be layered on
//! top; when it runs out the search unwinds and the root keeps only the
//! actions it finished searching.

use std::time::{Duration, Instant};

/// How often to check the clock (in nodes). Checking every node is wasteful.
const CHECK_INTERVAL: u64 = 1024;

/// Optional wall-clock and node budgets for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum time allowed for this search (None = infinite)
    pub move_time: Option<Duration>,
    /// Maximum number of nodes to expand (None = infinite)
    pub node_limit: Option<u64>,
}

impl SearchLimits {
    /// No limit other than depth.
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn time(move_time: Duration) -> Self {
        Self {
            move_time: Some(move_time),
            node_limit: None,
        }
    }

    pub fn nodes(node_limit: u64) -> Self {
        Self {
            move_time: None,
            node_limit: Some(node_limit),
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.move_time.is_none() && self.node_limit.is_none()
    }

    /// Start a budget for one search call.
    pub fn start(&self) -> Budget {
        Budget {
            limits: *self,
            start: Instant::now(),
            nodes: 0,
            stopped: false,
        }
    }
}

/// Running node count and stop flag for one search call.
#[derive(Debug, Clone)]
pub struct Budget {
    limits: SearchLimits,
    start: Instant,
    nodes: u64,
    stopped: bool,
}

impl Budget {
    /// Count one expanded node. Returns true once the budget is exhausted.
    pub fn tick(&mut self) -> bool {
        self.nodes += 1;
        if self.stopped {
            return true;
        }

        if let Some(limit) = self.limits.node_limit {
            if self.nodes > limit {
                self.stopped = true;
                return true;
            }
        }

        if let Some(limit) = self.limits.move_time {
            if self.nodes % CHECK_INTERVAL == 0 && self.start.elapsed() >= limit {
                self.stopped = true;
                return true;
            }
        }

        false
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
