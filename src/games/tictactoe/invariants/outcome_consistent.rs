//! Outcome invariant: the stored state agrees with the board.

use super::super::rules::classify;
use super::super::TurnController;
use super::Invariant;

/// Invariant: classifying the board gives the controller's current outcome.
///
/// A finished round's board still shows the line (or full grid) that ended
/// it; a running round's board shows neither.
pub struct OutcomeConsistentInvariant;

impl Invariant<TurnController> for OutcomeConsistentInvariant {
    fn holds(controller: &TurnController) -> bool {
        classify(controller.board()) == controller.outcome()
    }

    fn description() -> &'static str {
        "Round state matches the board classification"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Outcome, TurnState};

    #[test]
    fn test_holds_after_win() {
        let mut c = TurnController::new(Board::new(3).unwrap(), 10);
        for index in [0, 3, 1, 4, 2] {
            let _ = c.submit_move(index).unwrap();
        }
        assert_eq!(c.outcome(), Outcome::CrossWins);
        assert!(OutcomeConsistentInvariant::holds(&c));
    }

    #[test]
    fn test_claimed_draw_on_empty_board_violates() {
        let mut c = TurnController::new(Board::new(3).unwrap(), 10);
        c.state = TurnState::Finished(Outcome::Draw);
        assert!(!OutcomeConsistentInvariant::holds(&c));
    }
}
