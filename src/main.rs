//! Terminal tic-tac-toe entry point.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tictac::{Cli, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; keep them off by default so they don't fight the
    // alternate screen. Enable with RUST_LOG.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(?cli, "starting tictac");

    tui::run(cli.theme, Duration::from_millis(cli.tick_ms))
}
