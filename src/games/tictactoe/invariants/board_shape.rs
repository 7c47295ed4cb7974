//! Board shape invariant: the cell vector always covers the whole grid.

use super::super::TurnController;
use super::Invariant;

/// Invariant: `cells.len() == size * size`.
pub struct BoardShapeInvariant;

impl Invariant<TurnController> for BoardShapeInvariant {
    fn holds(controller: &TurnController) -> bool {
        let board = controller.board();
        board.len() == board.size() * board.size()
    }

    fn description() -> &'static str {
        "Board has exactly size * size cells"
    }
}
