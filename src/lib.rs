//! Tic-tac-toe session engine with a terminal front-end.
//!
//! # Architecture
//!
//! - **Engine** ([`game`]): pure board and rules logic. Boards are immutable
//!   value data; moves return new boards and terminal evaluation is a pure
//!   function with a fixed winning-line priority order.
//! - **Session** ([`Session`]): the mutable aggregate spanning rounds:
//!   current game state, cumulative score tally, and the alternating
//!   round-opener.
//! - **Front-end** ([`tui`]): a ratatui terminal UI that drives the session
//!   one operation at a time and owns all cosmetic state (theme, status
//!   text).
//!
//! # Example
//!
//! ```
//! use tictac::{Mark, Outcome, Session};
//!
//! let mut session = Session::new();
//! // X takes the top row while O answers in the middle row.
//! for pos in [0, 3, 1, 4, 2] {
//!     session.select_cell(pos)?;
//! }
//! assert_eq!(session.state().outcome(), Some(Outcome::Won(Mark::X)));
//! assert_eq!(session.scores().wins(Mark::X), 1);
//!
//! // Scores carry over; the opener alternates to O.
//! session.reset_round();
//! assert_eq!(session.state().current_player(), Mark::O);
//! assert_eq!(session.scores().wins(Mark::X), 1);
//! # Ok::<(), tictac::IndexError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod error;
mod game;
mod session;
pub mod tui;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - errors
pub use error::IndexError;

// Crate-level exports - engine types
pub use game::{Board, Cell, GameState, Mark, Outcome, WINNING_LINES, evaluate};

// Crate-level exports - session management
pub use session::{ScoreTally, Session};
