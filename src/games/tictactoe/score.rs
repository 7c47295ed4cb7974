//! Per-game win tally.

use super::Player;
use serde::{Deserialize, Serialize};

/// Rounds won by each player within one game. Draws are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tally {
    cross: u32,
    nought: u32,
}

impl Tally {
    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::Cross => self.cross,
            Player::Nought => self.nought,
        }
    }

    /// Records a round won by `player`.
    pub fn record(&mut self, player: Player) {
        match player {
            Player::Cross => self.cross += 1,
            Player::Nought => self.nought += 1,
        }
    }

    /// Rounds won by either player.
    pub fn total(&self) -> u32 {
        self.cross + self.nought
    }

    /// Back to zero.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Crosses {} : {} Noughts", self.cross, self.nought)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_clear() {
        let mut tally = Tally::default();
        tally.record(Player::Cross);
        tally.record(Player::Cross);
        tally.record(Player::Nought);
        assert_eq!(tally.wins(Player::Cross), 2);
        assert_eq!(tally.wins(Player::Nought), 1);
        assert_eq!(tally.total(), 3);
        assert_eq!(tally.to_string(), "Crosses 2 : 1 Noughts");

        tally.clear();
        assert_eq!(tally, Tally::default());
    }
}
