//! Tests for terminal-state evaluation, including the fixed line priority.

use tictac::{Board, Cell, Mark, Outcome, WINNING_LINES, evaluate};

const X: Cell = Cell::Occupied(Mark::X);
const O: Cell = Cell::Occupied(Mark::O);
const E: Cell = Cell::Empty;

#[test]
fn test_empty_board_is_not_terminal() {
    assert_eq!(evaluate(&Board::new()), None);
}

#[test]
fn test_partial_board_with_no_line_is_not_terminal() {
    let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
    assert_eq!(evaluate(&board), None);
}

#[test]
fn test_detects_row_win() {
    let board = Board::from_cells([X, X, X, E, O, O, E, E, E]);
    assert_eq!(evaluate(&board), Some(Outcome::Won(Mark::X)));
}

#[test]
fn test_detects_column_win() {
    let board = Board::from_cells([O, X, E, O, X, E, O, E, E]);
    assert_eq!(evaluate(&board), Some(Outcome::Won(Mark::O)));
}

#[test]
fn test_detects_diagonal_win() {
    let board = Board::from_cells([X, O, O, E, X, E, O, E, X]);
    assert_eq!(evaluate(&board), Some(Outcome::Won(Mark::X)));
}

#[test]
fn test_detects_anti_diagonal_win() {
    let board = Board::from_cells([O, E, X, E, X, O, X, E, O]);
    assert_eq!(evaluate(&board), Some(Outcome::Won(Mark::X)));
}

#[test]
fn test_detects_draw_on_full_board() {
    let board = Board::from_cells([X, O, X, X, O, X, O, X, O]);
    assert_eq!(evaluate(&board), Some(Outcome::Draw));
}

#[test]
fn test_win_on_full_board_beats_draw() {
    // Full board that also contains a complete top row.
    let board = Board::from_cells([X, X, X, O, O, X, O, X, O]);
    assert_eq!(evaluate(&board), Some(Outcome::Won(Mark::X)));
}

#[test]
fn test_two_complete_lines_resolve_in_priority_order() {
    // Unreachable under legal play, but the tie-break on hand-built boards
    // must stay deterministic: the earlier line in the table wins.
    let top_row_first = Board::from_cells([X, X, X, O, O, O, E, E, E]);
    assert_eq!(evaluate(&top_row_first), Some(Outcome::Won(Mark::X)));

    let marks_swapped = Board::from_cells([O, O, O, X, X, X, E, E, E]);
    assert_eq!(evaluate(&marks_swapped), Some(Outcome::Won(Mark::O)));

    // Columns resolve left to right once no row is complete.
    let two_columns = Board::from_cells([X, O, E, X, O, E, X, O, E]);
    assert_eq!(evaluate(&two_columns), Some(Outcome::Won(Mark::X)));
}

#[test]
fn test_line_table_order_is_rows_columns_diagonals() {
    assert_eq!(
        WINNING_LINES,
        [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ]
    );
}
