//! Core domain types for tic-tac-toe.

use super::action::{BoardError, ParseBoardError, Placement};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Smallest board on which a three-in-a-row can exist.
pub const MIN_BOARD_SIZE: usize = 3;

/// The symbol occupying a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cross (X).
    Cross,
    /// Nought (O).
    Nought,
}

impl Mark {
    /// Returns true for [`Mark::Empty`].
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Cross => Some(Player::Cross),
            Mark::Nought => Some(Player::Nought),
        }
    }

    /// Single-character glyph used by the text board form.
    pub fn glyph(self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }

    /// Parses a glyph. Both `O` and `0` are accepted for noughts.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '.' | '_' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::Cross),
            'O' | 'o' | '0' => Some(Mark::Nought),
            _ => None,
        }
    }
}

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Crosses (moves first).
    Cross,
    /// Noughts.
    Nought,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// The mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::Cross => Mark::Cross,
            Player::Nought => Mark::Nought,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Cross => write!(f, "Crosses"),
            Player::Nought => write!(f, "Noughts"),
        }
    }
}

/// N x N tic-tac-toe board.
///
/// Cells are stored row-major, so the cell at `(row, col)` lives at
/// `row * size + col`. A cell only ever goes from [`Mark::Empty`] to a
/// player's mark; the only way back is [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub(super) size: usize,
    pub(super) cells: Vec<Mark>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize { size });
        }
        let len = size
            .checked_mul(size)
            .ok_or(BoardError::TooLarge { size })?;
        Ok(Self {
            size,
            cells: vec![Mark::Empty; len],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size * size`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a board has at least nine cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Mark] {
        &self.cells
    }

    /// Gets the mark at the given index.
    pub fn cell_at(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Gets the mark at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cell_at(row * self.size + col)
    }

    /// Places `mark` at `index`.
    ///
    /// An occupied cell is not an error: the move is reported as
    /// [`Placement::Rejected`] and the board is left untouched.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place_mark(&mut self, index: usize, mark: Mark) -> Result<Placement, BoardError> {
        if mark.is_empty() {
            return Err(BoardError::EmptyMark { index });
        }
        let size = self.size;
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfBounds { index, size })?;

        if !cell.is_empty() {
            debug!(occupant = ?*cell, "Cell already occupied");
            return Ok(Placement::Rejected { occupant: *cell });
        }

        *cell = mark;
        Ok(Placement::Placed)
    }

    /// Clears every cell. The size is unchanged.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Mark::Empty);
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Mark]> {
        self.cells.chunks(self.size)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for mark in row {
                write!(f, "{}", mark.glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses the text form `XOX/XXO/OXO`; rows may also be separated by
    /// newlines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let size = rows.len();
        let mut board = Board::new(size).map_err(|_| ParseBoardError::TooSmall { rows: size })?;

        for (r, row) in rows.iter().enumerate() {
            let glyphs: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != size {
                return Err(ParseBoardError::RaggedRow {
                    row: r,
                    expected: size,
                    found: glyphs.len(),
                });
            }
            for (c, glyph) in glyphs.into_iter().enumerate() {
                let mark = Mark::from_glyph(glyph).ok_or(ParseBoardError::UnknownGlyph { glyph })?;
                board.cells[r * size + c] = mark;
            }
        }

        Ok(board)
    }
}
