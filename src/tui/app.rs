//! Application state for the terminal front-end.

use crate::game::Outcome;
use crate::session::Session;
use crate::tui::theme::Theme;
use tracing::debug;

/// Front-end state: the session plus cosmetic concerns (theme, status text).
pub struct App {
    session: Session,
    theme: Theme,
    status: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new(theme: Theme) -> Self {
        let session = Session::new();
        let status = turn_message(&session);
        Self {
            session,
            theme,
            status,
            should_quit: false,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the current status message.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Checks whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Requests shutdown at the top of the next loop iteration.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Selects a cell for the mark on turn.
    ///
    /// Ignored selections (occupied cell, finished round) leave the board as
    /// is; the 1-9 key range guarantees the index is in bounds.
    pub fn select_cell(&mut self, pos: usize) {
        debug!(pos, "cell key pressed");
        if self.session.select_cell(pos).is_ok() {
            self.status = match self.session.state().outcome() {
                None => turn_message(&self.session),
                Some(Outcome::Won(mark)) => {
                    format!("Player {mark} wins the round! Press 'r' for a new round.")
                }
                Some(Outcome::Draw) => "Round drawn! Press 'r' for a new round.".to_string(),
            };
        }
    }

    /// Starts the next round, alternating the opener.
    pub fn reset_round(&mut self) {
        self.session.reset_round();
        self.status = turn_message(&self.session);
    }

    /// Toggles between the light and dark themes.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        debug!(theme = self.theme.label(), "theme toggled");
    }
}

fn turn_message(session: &Session) -> String {
    format!(
        "Player {}'s turn. Press 1-9 to place a mark.",
        session.state().current_player()
    )
}
