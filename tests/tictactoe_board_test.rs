//! Tests for board placement and reset.

use lesson_tictactoe::{Board, BoardError, Mark, Placement};

#[test]
fn test_place_then_read_back_on_every_cell() {
    for size in 3..=6 {
        for index in 0..size * size {
            for (first, second) in [(Mark::Cross, Mark::Nought), (Mark::Nought, Mark::Cross)] {
                let mut board = Board::new(size).unwrap();
                assert_eq!(board.place_mark(index, first), Ok(Placement::Placed));
                assert_eq!(board.cell_at(index), Some(first));

                assert_eq!(
                    board.place_mark(index, second),
                    Ok(Placement::Rejected { occupant: first })
                );
                assert_eq!(board.cell_at(index), Some(first));
            }
        }
    }
}

#[test]
fn test_same_mark_twice_is_rejected() {
    let mut board = Board::new(3).unwrap();
    let _ = board.place_mark(0, Mark::Cross).unwrap();
    assert!(!board.place_mark(0, Mark::Cross).unwrap().is_placed());
}

#[test]
fn test_sizes_below_three_fail() {
    for size in 0..3 {
        assert_eq!(Board::new(size), Err(BoardError::InvalidSize { size }));
    }
    assert!(Board::new(3).is_ok());
    assert!(Board::new(7).is_ok());
}

#[test]
fn test_full_and_reset() {
    let mut board = Board::new(3).unwrap();
    for index in 0..9 {
        let mark = if index % 2 == 0 { Mark::Cross } else { Mark::Nought };
        let _ = board.place_mark(index, mark).unwrap();
    }
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());

    board.reset();
    assert!(!board.is_full());
    assert_eq!(board.size(), 3);
    assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
}

#[test]
fn test_cell_at_out_of_range() {
    let board = Board::new(3).unwrap();
    assert_eq!(board.cell_at(9), None);
}
