//! Terminal front end
//!
//! Plays a game between a human on stdin/stdout and the minimax engine.
//!
//! ```bash
//! cargo run -p play -- --engine-side black --depth 2
//! cargo run -p play -- --config play.toml
//! ```

mod cli;
mod config;
mod session;

use std::io;

use anyhow::Result;
use clap::Parser;
use minimax_engine::MinimaxEngine;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::PlayConfig;
use crate::session::Session;

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PlayConfig::load(path)?,
        None => PlayConfig::default(),
    };
    cli.apply(&mut config);

    init_tracing(&config.log_level);

    let board = config.start_board()?;
    let engine = MinimaxEngine::new(config.engine_depth());
    info!(
        engine_side = %config.engine_side,
        depth = engine.depth(),
        "starting game"
    );

    let mut session = Session::new(Box::new(engine), &config, board);
    let stdin = io::stdin();
    let outcome = session.run(stdin.lock(), io::stdout())?;
    info!(?outcome, "session ended");

    Ok(())
}
