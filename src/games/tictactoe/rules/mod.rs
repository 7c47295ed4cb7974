//! Game rules for tic-tac-toe.
//!
//! Any three consecutive identical marks along a row, a column or either
//! diagonal direction win, whatever the board size. A 5x5 board is won by
//! three in a row, not five.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{LineFamily, WinningLine, check_winner, winning_line};

use super::phases::Outcome;
use super::{Board, Player};
use tracing::{debug, instrument};

/// Classifies the board.
///
/// Pure: the same cells always produce the same outcome. When several
/// lines exist at once, the first one found in scan order decides.
#[instrument(skip(board), fields(size = board.size()))]
pub fn classify(board: &Board) -> Outcome {
    let outcome = match check_winner(board) {
        Some(Player::Cross) => Outcome::CrossWins,
        Some(Player::Nought) => Outcome::NoughtWins,
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    };
    debug!(?outcome, "Board classified");
    outcome
}
