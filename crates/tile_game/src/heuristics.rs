//! Static evaluation of boards.
//!
//! Every feature is a plain function of the board. A [`TileHeuristic`]
//! combines them linearly with [`HeuristicWeights`].

use search_core::Evaluator;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::Cell;

/// Weight decay along a snake path.
const SNAKE_RATIO: f64 = 0.25;

#[inline]
fn log2(v: u32) -> f64 {
    if v == 0 {
        0.0
    } else {
        v.ilog2() as f64
    }
}

/// Number of empty cells.
pub fn empty_tiles(board: &Board) -> f64 {
    board.count_empty() as f64
}

/// Penalty for rows and columns that are not sorted.
///
/// Along every line, consecutive tiles (skipping empty cells) are compared
/// in log2 space. Decreases and increases are summed separately per axis and
/// the axis keeps whichever ordering costs less. Perfectly monotone boards
/// score 0, anything else is negative.
pub fn monotonicity(board: &Board) -> f64 {
    let rows: Vec<Vec<Cell>> = (0..board.height())
        .map(|r| (0..board.width()).map(|c| Cell::new(r, c)).collect())
        .collect();
    let cols: Vec<Vec<Cell>> = (0..board.width())
        .map(|c| (0..board.height()).map(|r| Cell::new(r, c)).collect())
        .collect();
    axis_monotonicity(board, &rows) + axis_monotonicity(board, &cols)
}

fn axis_monotonicity(board: &Board, lines: &[Vec<Cell>]) -> f64 {
    let mut decreasing = 0.0;
    let mut increasing = 0.0;
    for line in lines {
        let tiles: Vec<f64> = line
            .iter()
            .map(|&cell| board.get(cell))
            .filter(|&v| v != 0)
            .map(log2)
            .collect();
        for pair in tiles.windows(2) {
            let (current, next) = (pair[0], pair[1]);
            if current > next {
                decreasing += next - current;
            } else if current < next {
                increasing += current - next;
            }
        }
    }
    f64::max(decreasing, increasing)
}

/// `1 / (1 + Σ |log2 a − log2 b|)` over every tile and its nearest
/// non-empty neighbour in each of the four directions. 1.0 means every
/// neighbouring pair is equal.
pub fn smoothness(board: &Board) -> f64 {
    let (w, h) = (board.width() as isize, board.height() as isize);
    let mut roughness = 0.0;
    for r in 0..h {
        for c in 0..w {
            let value = board.get(Cell::new(r as usize, c as usize));
            if value == 0 {
                continue;
            }
            for (dr, dc) in [(0, 1), (0, -1), (1, 0), (-1, 0)] {
                let (mut nr, mut nc) = (r + dr, c + dc);
                while (0..h).contains(&nr) && (0..w).contains(&nc) {
                    let other = board.get(Cell::new(nr as usize, nc as usize));
                    if other != 0 {
                        roughness += (log2(value) - log2(other)).abs();
                        break;
                    }
                    nr += dr;
                    nc += dc;
                }
            }
        }
    }
    1.0 / (1.0 + roughness)
}

/// The eight zig-zag paths that sweep the board from a corner, four
/// column-wise and four row-wise.
fn snake_paths(width: usize, height: usize) -> Vec<Vec<Cell>> {
    let mut paths = Vec::with_capacity(8);
    for reverse_outer in [false, true] {
        for reverse_first in [false, true] {
            let mut by_cols = Vec::with_capacity(width * height);
            for (i, c) in ordered(width, reverse_outer).into_iter().enumerate() {
                for r in ordered(height, reverse_first ^ (i % 2 == 1)) {
                    by_cols.push(Cell::new(r, c));
                }
            }
            paths.push(by_cols);

            let mut by_rows = Vec::with_capacity(width * height);
            for (i, r) in ordered(height, reverse_outer).into_iter().enumerate() {
                for c in ordered(width, reverse_first ^ (i % 2 == 1)) {
                    by_rows.push(Cell::new(r, c));
                }
            }
            paths.push(by_rows);
        }
    }
    paths
}

fn ordered(n: usize, reverse: bool) -> Vec<usize> {
    if reverse {
        (0..n).rev().collect()
    } else {
        (0..n).collect()
    }
}

/// Best weighted sum `Σ tile · 0.25^k` along any snake path, where `k` is
/// the position on the path. Rewards large tiles packed into a corner with
/// smaller tiles trailing behind them.
pub fn snake(board: &Board) -> f64 {
    snake_paths(board.width(), board.height())
        .iter()
        .map(|path| {
            let mut weight = 1.0;
            let mut sum = 0.0;
            for &cell in path {
                sum += board.get(cell) as f64 * weight;
                weight *= SNAKE_RATIO;
            }
            sum
        })
        .fold(0.0, f64::max)
}

/// Linear weights over the evaluation features. Zero-weight features are
/// not computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    pub empty_tiles: f64,
    pub monotonicity: f64,
    pub smoothness: f64,
    pub snake: f64,
    pub total: f64,
    pub max_tile: f64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        Self::snake()
    }
}

impl HeuristicWeights {
    fn zero() -> Self {
        Self {
            empty_tiles: 0.0,
            monotonicity: 0.0,
            smoothness: 0.0,
            snake: 0.0,
            total: 0.0,
            max_tile: 0.0,
        }
    }

    pub fn snake() -> Self {
        Self {
            snake: 1.0,
            ..Self::zero()
        }
    }

    pub fn smooth() -> Self {
        Self {
            smoothness: 1.0,
            ..Self::zero()
        }
    }

    pub fn empty() -> Self {
        Self {
            empty_tiles: 1.0,
            ..Self::zero()
        }
    }

    pub fn balanced() -> Self {
        Self {
            empty_tiles: 2.7,
            monotonicity: 1.0,
            smoothness: 10.0,
            snake: 0.1,
            total: 0.0,
            max_tile: 0.0,
        }
    }

    /// Looks up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "snake" => Some(Self::snake()),
            "smooth" => Some(Self::smooth()),
            "empty" => Some(Self::empty()),
            "balanced" => Some(Self::balanced()),
            _ => None,
        }
    }

    pub const PRESETS: [&'static str; 4] = ["snake", "smooth", "empty", "balanced"];
}

/// Board evaluator built from [`HeuristicWeights`].
#[derive(Debug, Clone, Default)]
pub struct TileHeuristic {
    weights: HeuristicWeights,
}

impl TileHeuristic {
    pub fn new(weights: HeuristicWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &HeuristicWeights {
        &self.weights
    }
}

impl Evaluator<Board> for TileHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        let w = &self.weights;
        let mut score = 0.0;
        if w.empty_tiles != 0.0 {
            score += w.empty_tiles * empty_tiles(board);
        }
        if w.monotonicity != 0.0 {
            score += w.monotonicity * monotonicity(board);
        }
        if w.smoothness != 0.0 {
            score += w.smoothness * smoothness(board);
        }
        if w.snake != 0.0 {
            score += w.snake * snake(board);
        }
        if w.total != 0.0 {
            score += w.total * board.total() as f64;
        }
        if w.max_tile != 0.0 {
            score += w.max_tile * board.max_tile() as f64;
        }
        score
    }
}

#[cfg(test)]
#[path = "heuristics_tests.rs"]
mod heuristics_tests;
