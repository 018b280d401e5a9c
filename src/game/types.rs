//! Core domain types for tic-tac-toe.

use crate::error::IndexError;
use serde::{Deserialize, Serialize};

/// A player's mark, doubling as the player's identity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The X mark (opens the very first round).
    X,
    /// The O mark.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

/// How a finished round ended.
///
/// A terminal evaluation yields `Option<Outcome>`: `None` while the round is
/// still in progress. Board cells never hold an `Outcome`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a row, column, or diagonal.
    Won(Mark),
    /// All nine cells occupied with no complete line.
    Draw,
}

/// 3x3 board with cells in row-major order (index = row * 3 + col).
///
/// Boards are immutable value data: [`Board::with_move`] returns a new board
/// and leaves the receiver untouched, so earlier snapshots stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from explicit cell contents.
    ///
    /// Intended for tests and fixtures; legal play only ever reaches boards
    /// produced by successive [`Board::with_move`] calls.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, pos: usize) -> Option<Cell> {
        self.cells.get(pos).copied()
    }

    /// Checks whether the cell at `pos` is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Cell::Empty))
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a new board with `mark` placed at `pos`.
    ///
    /// Placing on an occupied cell is a silent no-op: the returned board
    /// equals the receiver cell for cell. An index outside 0-8 is an
    /// [`IndexError`], distinguishing a caller bug from the occupied-cell
    /// case (a normal UI race such as a rapid double-tap).
    pub fn with_move(&self, pos: usize, mark: Mark) -> Result<Self, IndexError> {
        if pos >= 9 {
            return Err(IndexError::new(pos));
        }
        if !self.is_empty(pos) {
            return Ok(self.clone());
        }
        let mut cells = self.cells;
        cells[pos] = Cell::Occupied(mark);
        Ok(Self { cells })
    }

    /// Formats the board as a human-readable 3x3 grid.
    ///
    /// Empty cells show their 1-based key-binding digit.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.cells[pos] {
                    Cell::Empty => out.push_str(&(pos + 1).to_string()),
                    Cell::Occupied(mark) => out.push_str(&mark.to_string()),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete state of one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Whose turn is next. Meaningless once the round is over: it is still
    /// switched on the round-ending move, and nothing reads it again until
    /// the next round starts.
    current_player: Mark,
    /// Terminal result, `None` while the round is in progress.
    outcome: Option<Outcome>,
}

impl GameState {
    pub(crate) fn with_parts(board: Board, current_player: Mark, outcome: Option<Outcome>) -> Self {
        Self {
            board,
            current_player,
            outcome,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn is next.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the terminal result, if the round has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Checks whether the round is over.
    pub fn game_over(&self) -> bool {
        self.outcome.is_some()
    }
}
