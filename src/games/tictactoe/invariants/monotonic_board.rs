//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Mark};

/// Checks that `after` only differs from `before` by filling empty cells.
///
/// Once a cell holds a mark, it keeps that mark until the board is reset.
pub fn monotonic_board(before: &Board, after: &Board) -> bool {
    before.size() == after.size()
        && before
            .cells()
            .iter()
            .zip(after.cells())
            .all(|(was, now)| *was == Mark::Empty || was == now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filling_cells_holds() {
        let before = Board::new(3).unwrap();
        let mut after = before.clone();
        let _ = after.place_mark(4, Mark::Cross).unwrap();
        let _ = after.place_mark(0, Mark::Nought).unwrap();
        assert!(monotonic_board(&before, &after));
    }

    #[test]
    fn test_rejected_placement_holds() {
        let mut before = Board::new(3).unwrap();
        let _ = before.place_mark(4, Mark::Cross).unwrap();
        let mut after = before.clone();
        let _ = after.place_mark(4, Mark::Nought).unwrap();
        assert!(monotonic_board(&before, &after));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut before = Board::new(3).unwrap();
        let _ = before.place_mark(4, Mark::Cross).unwrap();
        let mut after = before.clone();
        after.cells[4] = Mark::Nought;
        assert!(!monotonic_board(&before, &after));
    }

    #[test]
    fn test_size_change_violates() {
        let before = Board::new(3).unwrap();
        let after = Board::new(4).unwrap();
        assert!(!monotonic_board(&before, &after));
    }
}
