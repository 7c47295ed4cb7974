//! Countdown invariant: a running turn always has time on the clock.

use super::super::{TurnController, TurnState};
use super::Invariant;

/// Invariant: while in progress, `1 <= seconds_left <= turn_seconds`.
pub struct CountdownRangeInvariant;

impl Invariant<TurnController> for CountdownRangeInvariant {
    fn holds(controller: &TurnController) -> bool {
        match controller.state() {
            TurnState::InProgress { seconds_left, .. } => {
                (1..=controller.turn_seconds()).contains(&seconds_left)
            }
            TurnState::Finished(_) => true,
        }
    }

    fn description() -> &'static str {
        "Running turn has between 1 and turn_seconds seconds left"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player};

    #[test]
    fn test_holds_through_a_full_countdown() {
        let mut c = TurnController::new(Board::new(3).unwrap(), 4);
        for _ in 0..12 {
            let _ = c.tick().unwrap();
            assert!(CountdownRangeInvariant::holds(&c));
        }
    }

    #[test]
    fn test_zero_seconds_violates() {
        let mut c = TurnController::new(Board::new(3).unwrap(), 4);
        c.state = TurnState::InProgress {
            active: Player::Nought,
            seconds_left: 0,
        };
        assert!(!CountdownRangeInvariant::holds(&c));
    }
}
