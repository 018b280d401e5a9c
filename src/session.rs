//! Session management: round lifecycle, score accrual, opener alternation.

use crate::error::IndexError;
use crate::game::{Board, GameState, Mark, Outcome, evaluate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Cumulative win and draw counts across the rounds of one session.
///
/// Monotone: each counter is incremented exactly once per round-ending event
/// and never reset while the session lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Rounds won by the given mark.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Rounds that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Mark::X) => self.x_wins += 1,
            Outcome::Won(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// A single-device play session spanning multiple rounds.
///
/// Owns the current round's [`GameState`], the cumulative [`ScoreTally`],
/// and the mark that opened the current round, from which the next round's
/// opener is derived. Never persisted: a session lives and dies with the
/// process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: GameState,
    scores: ScoreTally,
    last_opener: Mark,
}

impl Session {
    /// Creates a session with an empty board and X opening the first round.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::with_parts(Board::new(), Mark::X, None),
            scores: ScoreTally::default(),
            // Seeded to the first opener so the first reset flips to O,
            // keeping the X, O, X, ... alternation from round 1 onward.
            last_opener: Mark::X,
        }
    }

    /// Returns the current round's state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the cumulative scores.
    pub fn scores(&self) -> &ScoreTally {
        &self.scores
    }

    /// Returns the mark that opened the current round.
    pub fn last_opener(&self) -> Mark {
        self.last_opener
    }

    /// Handles a cell selection for whichever mark is on turn.
    ///
    /// Selecting after the round has ended, or selecting an occupied cell,
    /// is a silent no-op: `Ok(())` with no state change. An index outside
    /// 0-8 is an [`IndexError`] and also leaves the session untouched.
    ///
    /// On the round-ending move the tally is recorded exactly once and
    /// `current_player` is still switched; the post-game value is
    /// meaningless and nothing reads it before the next reset.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, pos: usize) -> Result<(), IndexError> {
        if self.state.game_over() {
            debug!(pos, "selection ignored, round already over");
            return Ok(());
        }
        if pos >= 9 {
            return Err(IndexError::new(pos));
        }
        if !self.state.board().is_empty(pos) {
            debug!(pos, "selection ignored, cell occupied");
            return Ok(());
        }

        let mover = self.state.current_player();
        let board = self.state.board().with_move(pos, mover)?;
        let outcome = evaluate(&board);

        if let Some(outcome) = outcome {
            self.scores.record(outcome);
            info!(pos, mover = %mover, ?outcome, "round over");
        } else {
            debug!(pos, mover = %mover, "mark placed");
        }

        self.state = GameState::with_parts(board, mover.other(), outcome);
        Ok(())
    }

    /// Starts a fresh round with the opener alternated.
    ///
    /// Whichever mark opened the previous round yields the first move of the
    /// next one. Scores are untouched: tallies persist across rounds within
    /// a session.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        let opener = self.last_opener.other();
        self.last_opener = opener;
        self.state = GameState::with_parts(Board::new(), opener, None);
        info!(opener = %opener, "new round");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
