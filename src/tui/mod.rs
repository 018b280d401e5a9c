//! Terminal front-end built on ratatui and crossterm.
//!
//! Strictly a consumer of the session contract: it maps key presses to
//! session operations and re-renders after each one. The loop is synchronous
//! and runs operations one at a time, so the session never sees interleaved
//! calls.

mod app;
mod theme;
mod ui;

pub use app::App;
pub use theme::{Palette, Theme};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::info;

/// Runs the interactive terminal UI until the user quits.
pub fn run(theme: Theme, tick: Duration) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(theme);
    let res = run_loop(&mut terminal, app, tick);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit() {
            info!("quit requested");
            return Ok(());
        }

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => app.quit(),
                    KeyCode::Char('r') => app.reset_round(),
                    KeyCode::Char('t') => app.toggle_theme(),
                    KeyCode::Char(c @ '1'..='9') => {
                        // Keys 1-9 map to cells 0-8, matching the digits
                        // shown in empty cells.
                        app.select_cell(c as usize - '1' as usize);
                    }
                    _ => {}
                }
            }
        }
    }
}
