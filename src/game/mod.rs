//! Board and rules engine: pure, stateless, no I/O.

mod rules;
mod types;

pub use rules::{WINNING_LINES, evaluate};
pub use types::{Board, Cell, GameState, Mark, Outcome};
