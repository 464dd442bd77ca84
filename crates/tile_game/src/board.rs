//! Board representation and the slide/merge rules.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::error::TileError;
use crate::types::{Cell, Direction};

/// Spawned tile values and their probabilities.
pub const SPAWN_DISTRIBUTION: [(u32, f64); 2] = [(2, 0.9), (4, 0.1)];

/// A rectangular grid of tiles. Empty cells hold 0.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<u32>,
    score: u64,
}

impl Board {
    /// Empty board.
    pub fn new(width: usize, height: usize) -> Result<Self, TileError> {
        if width == 0 || height == 0 {
            return Err(TileError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![0; width * height],
            score: 0,
        })
    }

    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, TileError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut board = Self::new(width, height)?;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(TileError::RaggedRow {
                    row: r,
                    found: row.len(),
                    expected: width,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(TileError::InvalidTile(value));
                }
                board.cells[r * width + c] = value;
            }
        }
        Ok(board)
    }

    /// Parses a whitespace-separated grid, one row per line, `.` for empty.
    ///
    /// ```text
    /// 2 . . 4
    /// . 8 . .
    /// ```
    pub fn parse(text: &str) -> Result<Self, TileError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| match token {
                        "." => Ok(0),
                        _ => token
                            .parse::<u32>()
                            .map_err(|_| TileError::Parse(format!("bad token '{token}'"))),
                    })
                    .collect::<Result<Vec<u32>, TileError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            return Err(TileError::Parse("no rows".to_string()));
        }
        Self::from_rows(&rows)
    }

    /// Fresh board with two spawned tiles.
    pub fn new_game<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Self, TileError> {
        let mut board = Self::new(width, height)?;
        board.spawn_random(rng);
        board.spawn_random(rng);
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Points earned by merges so far.
    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> u32 {
        self.cells[cell.row * self.width + cell.col]
    }

    /// Tile values row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.cells.chunks(self.width)
    }

    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| Cell::new(i / self.width, i % self.width))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Sum of all tiles.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&v| v as u64).sum()
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Copy of the board with `value` placed at `cell`.
    ///
    /// # Panics
    /// If `cell` lies outside the board.
    pub fn with_tile(&self, cell: Cell, value: u32) -> Board {
        assert!(cell.row < self.height && cell.col < self.width, "cell {cell:?} off the board");
        let mut board = self.clone();
        board.cells[cell.row * self.width + cell.col] = value;
        board
    }

    /// Cell indices of every line in `direction`, each listed from the edge
    /// tiles slide toward.
    fn lines(&self, direction: Direction) -> Vec<Vec<usize>> {
        let (w, h) = (self.width, self.height);
        match direction {
            Direction::Left => (0..h).map(|r| (0..w).map(|c| r * w + c).collect()).collect(),
            Direction::Right => (0..h).map(|r| (0..w).rev().map(|c| r * w + c).collect()).collect(),
            Direction::Up => (0..w).map(|c| (0..h).map(|r| r * w + c).collect()).collect(),
            Direction::Down => (0..w).map(|c| (0..h).rev().map(|r| r * w + c).collect()).collect(),
        }
    }

    /// Board after sliding every tile toward `direction`. Each tile merges at
    /// most once per slide; merged values are added to the score.
    pub fn slide(&self, direction: Direction) -> Board {
        let mut board = self.clone();
        for line in self.lines(direction) {
            let values: Vec<u32> = line.iter().map(|&i| self.cells[i]).collect();
            let (merged, gained) = merge_line(&values);
            for (&i, v) in line.iter().zip(merged) {
                board.cells[i] = v;
            }
            board.score += gained;
        }
        board
    }

    /// The slid board, or `None` when the slide changes nothing.
    pub fn try_slide(&self, direction: Direction) -> Option<Board> {
        let next = self.slide(direction);
        (next.cells != self.cells).then_some(next)
    }

    /// Directions whose slide changes the board, in [`Direction::ALL`] order.
    pub fn legal_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.try_slide(d).is_some())
            .collect()
    }

    /// True when some slide changes the board: a tile sits next to an empty
    /// cell or next to an equal tile it can merge with.
    pub fn can_move(&self) -> bool {
        let (w, h) = (self.width, self.height);
        let movable = |a: u32, b: u32| (a == 0) != (b == 0) || merged_value(a, b).is_some();
        for r in 0..h {
            for c in 0..w {
                let v = self.cells[r * w + c];
                if c + 1 < w && movable(v, self.cells[r * w + c + 1]) {
                    return true;
                }
                if r + 1 < h && movable(v, self.cells[(r + 1) * w + c]) {
                    return true;
                }
            }
        }
        false
    }

    /// Places a 2 (p = 0.9) or 4 on a uniformly chosen empty cell. Returns
    /// the cell, or `None` if the board is full.
    pub fn spawn_random<R: Rng>(&mut self, rng: &mut R) -> Option<Cell> {
        let cell = *self.empty_cells().choose(rng)?;
        let value = if rng.gen_bool(SPAWN_DISTRIBUTION[0].1) {
            SPAWN_DISTRIBUTION[0].0
        } else {
            SPAWN_DISTRIBUTION[1].0
        };
        self.cells[cell.row * self.width + cell.col] = value;
        trace!(row = cell.row, col = cell.col, value, "tile spawned");
        Some(cell)
    }
}

/// Value of merging `a` into `b`, if they merge at all. The largest tile a
/// cell can hold (2^31) never merges.
fn merged_value(a: u32, b: u32) -> Option<u32> {
    if a != 0 && a == b {
        a.checked_mul(2)
    } else {
        None
    }
}

/// Compacts `values` toward index 0 and merges equal neighbours once.
fn merge_line(values: &[u32]) -> (Vec<u32>, u64) {
    let tiles: Vec<u32> = values.iter().copied().filter(|&v| v != 0).collect();
    let mut out = Vec::with_capacity(values.len());
    let mut gained = 0u64;
    let mut i = 0;
    while i < tiles.len() {
        match tiles.get(i + 1).and_then(|&next| merged_value(tiles[i], next)) {
            Some(merged) => {
                gained += merged as u64;
                out.push(merged);
                i += 2;
            }
            None => {
                out.push(tiles[i]);
                i += 1;
            }
        }
    }
    out.resize(values.len(), 0);
    (out, gained)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wall = "+------".repeat(self.width) + "+";
        writeln!(f, "{wall}")?;
        for row in self.rows() {
            for &v in row {
                if v == 0 {
                    write!(f, "|      ")?;
                } else {
                    write!(f, "|{v:^6}")?;
                }
            }
            writeln!(f, "|")?;
            writeln!(f, "{wall}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
