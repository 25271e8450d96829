//! Terminal snake runner (default binary).
//!
//! No flags: the game starts immediately and runs until the snake crashes or
//! the player quits. See [`tui_snake::config`] for environment overrides.

use std::fs::File;

use anyhow::{Context, Result};
use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_snake::config::GameConfig;
use tui_snake::driver::{Driver, Exit};
use tui_snake::input::{CrosstermEvents, InputListener};
use tui_snake::term::{Surface, TerminalRenderer};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.restore();
        return Err(err.context("failed to acquire the terminal"));
    }

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.restore();

    match &result {
        Ok(Exit::Quit { score }) => info!("quit with score {}", score),
        Ok(Exit::GameOver { score, reason }) => {
            info!("finished ({}) with score {}", reason.as_str(), score)
        }
        Err(err) => error!("{:#}", err),
    }
    result.map(|_| ())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<Exit> {
    // The listener thread blocks in its read for the rest of the process.
    let (_listener, input) = InputListener::spawn(CrosstermEvents)?;
    Driver::new(term, input, config).run()
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file)
        .context("installing logger")?;
    Ok(())
}
