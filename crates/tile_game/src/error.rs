//! Error types for board construction and play

use search_core::SearchError;
use thiserror::Error;

use crate::types::Direction;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TileError {
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("invalid tile value {0}: tiles are powers of two from 2 upwards")]
    InvalidTile(u32),

    #[error("cannot parse board: {0}")]
    Parse(String),

    #[error("slide {0} does not change the board")]
    IllegalMove(Direction),

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}
