//! Terminal-state evaluation.

use super::types::{Board, Cell, Outcome};
use tracing::instrument;

/// The eight winning lines in evaluation priority order: rows top to bottom,
/// then columns left to right, then the two diagonals.
///
/// [`evaluate`] returns the first complete line in this literal order. Under
/// legal sequential play only one mark can ever complete a line, but
/// hand-built fixtures can complete two lines for different marks at once;
/// the fixed order makes that tie-break deterministic.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Evaluates a board for a terminal state.
///
/// Returns `Some(Outcome::Won)` for the first complete same-mark line in
/// [`WINNING_LINES`] order, `Some(Outcome::Draw)` for a full board with no
/// complete line, and `None` while the round is still in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    for [a, b, c] in WINNING_LINES {
        if let Some(Cell::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Occupied(mark))
            && board.get(c) == Some(Cell::Occupied(mark))
        {
            return Some(Outcome::Won(mark));
        }
    }

    if board.is_full() {
        return Some(Outcome::Draw);
    }

    None
}
