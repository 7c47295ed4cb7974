//! Round outcome classification.

use super::Player;
use serde::{Deserialize, Serialize};

/// Classification of a board.
///
/// Derived from the board after every move; never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No line yet and at least one empty cell.
    #[default]
    InProgress,
    /// Crosses have three in a row.
    CrossWins,
    /// Noughts have three in a row.
    NoughtWins,
    /// Board full, no line.
    Draw,
}

impl Outcome {
    /// The winning outcome for `player`.
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Cross => Outcome::CrossWins,
            Player::Nought => Outcome::NoughtWins,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::CrossWins => Some(Player::Cross),
            Outcome::NoughtWins => Some(Player::Nought),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// True once the round is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::CrossWins => write!(f, "Crosses win"),
            Outcome::NoughtWins => write!(f, "Noughts win"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
