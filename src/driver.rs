//! Driver loop: input, update and render on a fixed tick.
//!
//! The driver owns the game state and is the only thing that mutates it.
//! Phases run `Running -> Over -> Terminated`; a quit request jumps straight
//! from `Running` to `Terminated`.

use std::thread;
use std::time::Instant;

use anyhow::Result;
use log::{debug, info, warn};

use crate::config::GameConfig;
use crate::core::{EndReason, GameState, StepResult};
use crate::input::InputQueue;
use crate::term::{GameView, PaintedCells, Surface};
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Over,
    Terminated,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The player quit; no summary was shown.
    Quit { score: u32 },
    /// The game ended and the summary was held on screen.
    GameOver { score: u32, reason: EndReason },
}

pub struct Driver<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    input: InputQueue,
    game: GameState,
    view: GameView,
    painted: PaintedCells,
    config: GameConfig,
    phase: Phase,
    input_lost: bool,
}

impl<'a, S: Surface + ?Sized> Driver<'a, S> {
    /// A driver for a fresh game seeded from `config`.
    pub fn new(surface: &'a mut S, input: InputQueue, config: GameConfig) -> Self {
        let game = GameState::new(config.seed);
        Self::with_game(surface, input, game, config)
    }

    pub fn with_game(
        surface: &'a mut S,
        input: InputQueue,
        game: GameState,
        config: GameConfig,
    ) -> Self {
        let view = GameView::new(game.field());
        Self {
            surface,
            input,
            game,
            view,
            painted: PaintedCells::new(),
            config,
            phase: Phase::Running,
            input_lost: false,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn painted(&self) -> &PaintedCells {
        &self.painted
    }

    /// True once the input source has gone away.
    pub fn input_lost(&self) -> bool {
        self.input_lost
    }

    /// One iteration of the running phase: poll input, step, draw.
    ///
    /// Does not sleep. Returns the phase the driver is in afterwards.
    pub fn tick(&mut self) -> Result<Phase> {
        if self.phase != Phase::Running {
            return Ok(self.phase);
        }

        if self.surface.sync_size()? {
            debug!("surface resized to {:?}", self.surface.size());
            self.painted.clear();
        }

        let command = self.input.try_next();
        if !self.input_lost && self.input.is_disconnected() {
            warn!("input listener stopped; the game keeps running without input");
            self.input_lost = true;
        }
        if command == Some(GameAction::Quit) {
            info!("quit requested at score {}", self.game.score());
            self.phase = Phase::Terminated;
            return Ok(self.phase);
        }

        match self.game.step(command) {
            StepResult::Ate => debug!("food eaten, score {}", self.game.score()),
            StepResult::Ended(reason) => {
                info!("game over: {} with score {}", reason.as_str(), self.game.score())
            }
            StepResult::Paused if command == Some(GameAction::TogglePause) => info!("paused"),
            _ => {}
        }

        let previous = std::mem::take(&mut self.painted);
        self.painted = self.view.render(&self.game, &mut *self.surface, previous);
        if !self.game.paused() {
            self.surface.present()?;
        }

        if self.game.game_over() {
            self.phase = Phase::Over;
        }
        Ok(self.phase)
    }

    /// Play until the game ends or the player quits.
    ///
    /// After a game over the summary is shown and held for
    /// `config.game_over_hold`. Restoring the display is left to the caller.
    pub fn run(mut self) -> Result<Exit> {
        info!("starting game with seed {}", self.config.seed);

        loop {
            let started = Instant::now();
            if self.tick()? != Phase::Running {
                break;
            }
            thread::sleep(self.config.tick.saturating_sub(started.elapsed()));
        }

        let score = self.game.score();
        match (self.phase, self.game.end_reason()) {
            (Phase::Over, Some(reason)) => {
                self.show_summary()?;
                Ok(Exit::GameOver { score, reason })
            }
            _ => Ok(Exit::Quit { score }),
        }
    }

    fn show_summary(&mut self) -> Result<()> {
        self.painted = self
            .view
            .render_game_over(&mut *self.surface, self.game.score());
        self.surface.present()?;
        thread::sleep(self.config.game_over_hold);
        self.phase = Phase::Terminated;
        Ok(())
    }
}
