//! Root action selection and tie-breaking.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Policy for choosing among root actions that share the best value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Uniformly random among all maximal actions.
    #[default]
    UniformRandom,
    /// The first maximal action in enumeration order.
    FirstFound,
}

/// Picks the best `(action, value)` pair under `tie_break`.
///
/// Returns `None` for an empty slice. Values are compared exactly; NaN values
/// never win.
pub fn select_best<A: Copy>(
    values: &[(A, f64)],
    tie_break: TieBreak,
    rng: &mut StdRng,
) -> Option<(A, f64)> {
    let best = values
        .iter()
        .map(|&(_, v)| v)
        .fold(f64::NEG_INFINITY, f64::max);

    let mut maximal = values.iter().filter(|&&(_, v)| v == best);
    match tie_break {
        TieBreak::FirstFound => maximal.next().copied(),
        TieBreak::UniformRandom => {
            let candidates: Vec<(A, f64)> = maximal.copied().collect();
            candidates.choose(rng).copied()
        }
    }
}

/// RNG for tie-breaking: seeded when a seed is given, from entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
