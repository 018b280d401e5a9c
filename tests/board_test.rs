//! Tests for the board value type.

use tictac::{Board, Cell, Mark};

#[test]
fn test_new_board_has_nine_empty_cells() {
    let board = Board::new();
    assert_eq!(board.cells().len(), 9);
    assert!(board.cells().iter().all(|&c| c == Cell::Empty));
}

#[test]
fn test_new_boards_are_independent() {
    let a = Board::new();
    let b = a.with_move(0, Mark::X).unwrap();
    assert!(a.is_empty(0), "original board must stay untouched");
    assert!(!b.is_empty(0));
}

#[test]
fn test_with_move_places_mark() {
    let board = Board::new().with_move(4, Mark::X).unwrap();
    assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
    // Every other cell is unchanged.
    for pos in (0..9).filter(|&p| p != 4) {
        assert_eq!(board.get(pos), Some(Cell::Empty));
    }
}

#[test]
fn test_with_move_on_occupied_cell_is_a_no_op() {
    let board = Board::new().with_move(4, Mark::X).unwrap();
    let after = board.with_move(4, Mark::O).unwrap();
    assert_eq!(after, board, "occupied cell must leave the board unchanged");
    assert_eq!(after.get(4), Some(Cell::Occupied(Mark::X)));
}

#[test]
fn test_with_move_out_of_range_is_an_error() {
    let board = Board::new();
    let err = board.with_move(9, Mark::X).unwrap_err();
    assert_eq!(err.index, 9);
    let err = board.with_move(42, Mark::O).unwrap_err();
    assert_eq!(err.index, 42);
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    assert!(!board.is_full());
    for pos in 0..9 {
        board = board.with_move(pos, Mark::X).unwrap();
    }
    assert!(board.is_full());
}

#[test]
fn test_switching_marks_is_an_involution() {
    assert_eq!(Mark::X.other(), Mark::O);
    assert_eq!(Mark::O.other(), Mark::X);
    for mark in <Mark as strum::IntoEnumIterator>::iter() {
        assert_eq!(mark.other().other(), mark);
    }
}

#[test]
fn test_render_shows_digits_and_marks() {
    let board = Board::new().with_move(0, Mark::X).unwrap();
    let text = board.render();
    assert!(text.starts_with("X|2|3"));
    assert!(text.contains("4|5|6"));
    assert!(text.ends_with("7|8|9"));
}
