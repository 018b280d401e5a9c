//! Command-line interface.

use crate::tui::Theme;
use clap::Parser;

/// Two-player tic-tac-toe on one keyboard, with round scoring.
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe with round scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color theme to start in (toggle with 't' while playing).
    #[arg(long, value_enum, default_value = "dark")]
    pub theme: Theme,

    /// Input poll interval in milliseconds.
    #[arg(long, default_value_t = 100)]
    pub tick_ms: u64,
}
