//! Row/column addressing for board cells.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on an N x N board, addressed by zero-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Position {
    /// Converts to a row-major board index, or `None` if off the board.
    #[instrument]
    pub fn to_index(self, size: usize) -> Option<usize> {
        if self.row < size && self.col < size {
            self.row.checked_mul(size)?.checked_add(self.col)
        } else {
            None
        }
    }

    /// Creates a position from a row-major board index.
    #[instrument]
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if size == 0 || index >= size.checked_mul(size)? {
            return None;
        }
        Some(Self::new(index / size, index % size))
    }

    /// Parses user input: either a 1-based cell number (`5`) or a 1-based
    /// `row,col` pair (`2,3`).
    #[instrument]
    pub fn parse(input: &str, size: usize) -> Option<Self> {
        let input = input.trim();
        if let Some((row, col)) = input.split_once(',') {
            let row: usize = row.trim().parse().ok()?;
            let col: usize = col.trim().parse().ok()?;
            let pos = Self::new(row.checked_sub(1)?, col.checked_sub(1)?);
            return pos.to_index(size).map(|_| pos);
        }

        let number: usize = input.parse().ok()?;
        Self::from_index(number.checked_sub(1)?, size)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
