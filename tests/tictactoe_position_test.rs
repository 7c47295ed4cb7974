//! Tests for row/column addressing.

use lesson_tictactoe::{Board, Mark, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::new(0, 0).to_index(3), Some(0));
    assert_eq!(Position::new(1, 1).to_index(3), Some(4));
    assert_eq!(Position::new(2, 2).to_index(3), Some(8));
    assert_eq!(Position::new(4, 4).to_index(5), Some(24));
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0, 3), Some(Position::new(0, 0)));
    assert_eq!(Position::from_index(4, 3), Some(Position::new(1, 1)));
    assert_eq!(Position::from_index(8, 3), Some(Position::new(2, 2)));
    assert_eq!(Position::from_index(9, 3), None);
}

#[test]
fn test_position_agrees_with_board_get() {
    let mut board = Board::new(4).unwrap();
    let pos = Position::new(2, 1);
    let index = pos.to_index(board.size()).unwrap();
    let _ = board.place_mark(index, Mark::Nought).unwrap();
    assert_eq!(board.get(pos.row, pos.col), Some(Mark::Nought));
}
