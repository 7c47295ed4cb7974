//! Move results and error types for tic-tac-toe.
//!
//! Rejections that the UI can race into (tapping a cell that was just
//! taken) are values, not errors. Errors are reserved for calls that the
//! caller should never make: bad sizes, bad indices, or moves outside a
//! running round.

use super::phases::Outcome;
use super::Mark;
use super::Player;
use serde::{Deserialize, Serialize};

/// Result of asking the board to place a mark.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// The mark was written.
    Placed,
    /// The cell was already occupied; nothing changed.
    Rejected {
        /// What was already in the cell.
        occupant: Mark,
    },
}

impl Placement {
    /// True if the mark was written.
    pub fn is_placed(&self) -> bool {
        matches!(self, Placement::Placed)
    }
}

/// What happened after a move was submitted to a running round.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// Target cell was occupied. No state changed.
    Rejected {
        /// The index that was asked for.
        index: usize,
    },
    /// Mark placed, round goes on with `next` to move.
    Continue {
        /// Player whose turn it is now.
        next: Player,
    },
    /// Mark placed and the round ended.
    Finished(Outcome),
}

/// What happened on one countdown tick.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickResult {
    /// Still the same player's turn.
    Counting {
        /// Seconds remaining after this tick.
        seconds_left: u32,
    },
    /// Time ran out and the turn passed without a mark.
    Passed {
        /// Player whose turn it is now.
        to: Player,
    },
}

/// Error raised by board construction or placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Board smaller than 3x3.
    #[display("Board size {} is too small (minimum 3)", size)]
    InvalidSize {
        /// Requested size.
        size: usize,
    },

    /// Board whose cell count does not fit in `usize`.
    #[display("Board size {} is too large", size)]
    TooLarge {
        /// Requested size.
        size: usize,
    },

    /// Index past the last cell.
    #[display("Cell {} is out of bounds for a {}x{} board", index, size, size)]
    OutOfBounds {
        /// Requested index.
        index: usize,
        /// Board side length.
        size: usize,
    },

    /// Tried to "place" an empty mark.
    #[display("Cannot place an empty mark at cell {}", index)]
    EmptyMark {
        /// Requested index.
        index: usize,
    },
}

/// Error raised when parsing the text board form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Fewer than three rows.
    #[display("Board needs at least 3 rows, found {}", rows)]
    TooSmall {
        /// Number of rows found.
        rows: usize,
    },

    /// A row whose length differs from the row count.
    #[display("Row {} has {} cells, expected {}", row, found, expected)]
    RaggedRow {
        /// Zero-based row number.
        row: usize,
        /// Expected cell count.
        expected: usize,
        /// Actual cell count.
        found: usize,
    },

    /// Character that is not a mark.
    #[display("Unknown cell glyph {:?}", glyph)]
    UnknownGlyph {
        /// The offending character.
        glyph: char,
    },
}

/// Error raised by the turn controller or game session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// The round is over; only a reset can leave this state.
    #[display("Round already finished: {}", _0)]
    InvalidState(Outcome),

    /// No board size has been chosen yet.
    #[display("No active game; choose a board size first")]
    NoActiveGame,

    /// A game is already running; leave it before choosing a new size.
    #[display("A {}x{} game is already active", _0, _0)]
    GameActive(usize),

    /// The configured size list does not contain this size.
    #[display("Board size {} is not allowed (allowed: {:?})", size, allowed)]
    SizeNotAllowed {
        /// Requested size.
        size: usize,
        /// Sizes the configuration allows.
        allowed: Vec<usize>,
    },

    /// Underlying board error.
    #[display("{}", _0)]
    #[from]
    Board(BoardError),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(e) => Some(e),
            _ => None,
        }
    }
}
