//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Length of a winning run.
const RUN: usize = 3;

/// Direction of a line of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum LineFamily {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    AntiDiagonal,
}

impl LineFamily {
    /// Start cells for a run of three in this family, in scan order.
    fn starts(self, size: usize) -> Vec<(usize, usize)> {
        let last = size - RUN;
        match self {
            LineFamily::Horizontal => (0..size)
                .flat_map(|r| (0..=last).map(move |c| (r, c)))
                .collect(),
            LineFamily::Vertical => (0..size)
                .flat_map(|c| (0..=last).map(move |r| (r, c)))
                .collect(),
            LineFamily::Diagonal => (0..=last)
                .flat_map(|r| (0..=last).map(move |c| (r, c)))
                .collect(),
            LineFamily::AntiDiagonal => (0..=last)
                .flat_map(|r| (RUN - 1..size).map(move |c| (r, c)))
                .collect(),
        }
    }

    /// The `step`th cell from `(r, c)`.
    fn step(self, (r, c): (usize, usize), step: usize) -> (usize, usize) {
        match self {
            LineFamily::Horizontal => (r, c + step),
            LineFamily::Vertical => (r + step, c),
            LineFamily::Diagonal => (r + step, c + step),
            LineFamily::AntiDiagonal => (r + step, c - step),
        }
    }
}

/// The first run of three found on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Owner of the run.
    pub player: Player,
    /// Direction of the run.
    pub family: LineFamily,
    /// Row-major indices of the three cells.
    pub cells: [usize; RUN],
}

/// Finds the first run of three identical non-empty marks.
///
/// Families are scanned horizontal, vertical, diagonal, anti-diagonal;
/// each in the order the starts are listed by [`LineFamily::starts`].
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();
    if size < RUN {
        return None;
    }

    for family in <LineFamily as strum::IntoEnumIterator>::iter() {
        for start in family.starts(size) {
            let cells: [usize; RUN] = std::array::from_fn(|i| {
                let (r, c) = family.step(start, i);
                r * size + c
            });
            let first = board.cells()[cells[0]];
            if first == Mark::Empty {
                continue;
            }
            if cells.iter().all(|&i| board.cells()[i] == first)
                && let Some(player) = first.player()
            {
                return Some(WinningLine {
                    player,
                    family,
                    cells,
                });
            }
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row anywhere,
/// `None` otherwise.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}
