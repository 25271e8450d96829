//! Game state module - manages the complete game state
//!
//! This module ties together the snake, the food, and the RNG. It owns the
//! per-tick update and the game lifecycle: running, paused, over.

use crate::food::Food;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Field, GameAction, INITIAL_DIRECTION, INITIAL_FOOD, INITIAL_SNAKE};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The head left the play field.
    HitWall,
    /// The head ran into another segment.
    HitSelf,
    /// The snake covers every cell; there is nowhere left to put food.
    FieldFilled,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::HitWall => "hit wall",
            EndReason::HitSelf => "hit self",
            EndReason::FieldFilled => "field filled",
        }
    }
}

/// Outcome of a single [`GameState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The game had already ended; nothing changed.
    Finished,
    /// The game is paused; nothing moved.
    Paused,
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto the food and grew.
    Ate,
    /// This tick ended the game.
    Ended(EndReason),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    field: Field,
    snake: Snake,
    food: Food,
    score: u32,
    paused: bool,
    end: Option<EndReason>,
    rng: SimpleRng,
    /// Number of ticks in which the snake moved.
    ticks: u64,
}

impl GameState {
    /// Create a new game in the standard starting layout with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_layout(
            Field::default(),
            Snake::new(INITIAL_SNAKE, INITIAL_DIRECTION),
            Food::new(INITIAL_FOOD),
            seed,
        )
    }

    /// Create a game from an explicit layout.
    ///
    /// Food placed on the snake is relocated right away. If the snake already
    /// covers the whole field the game starts over with
    /// [`EndReason::FieldFilled`] and the food is left where it was, possibly
    /// on the snake.
    pub fn with_layout(field: Field, snake: Snake, food: Food, seed: u32) -> Self {
        let mut state = Self {
            field,
            snake,
            food,
            score: 0,
            paused: false,
            end: None,
            rng: SimpleRng::new(seed),
            ticks: 0,
        };
        state.place_food();
        state
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.end.is_some()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance the game by one tick.
    ///
    /// `command` is the single input consumed this tick, if any. `Quit` is
    /// not the engine's concern and is ignored here.
    pub fn step(&mut self, command: Option<GameAction>) -> StepResult {
        if self.end.is_some() {
            return StepResult::Finished;
        }

        match command {
            Some(GameAction::TogglePause) => {
                self.paused = !self.paused;
                if self.paused {
                    return StepResult::Paused;
                }
            }
            _ if self.paused => return StepResult::Paused,
            Some(action) => {
                if let Some(direction) = action.direction() {
                    self.snake.turn(direction);
                }
            }
            None => {}
        }

        self.ticks += 1;

        let head = self.snake.push_head();
        let ate = head == self.food.position();
        if ate {
            self.score += 1;
        } else {
            self.snake.pop_tail();
        }

        if !self.field.contains(head) {
            return self.finish(EndReason::HitWall);
        }
        if self.snake.body_contains(head) {
            return self.finish(EndReason::HitSelf);
        }

        if !self.place_food() {
            return StepResult::Ended(EndReason::FieldFilled);
        }

        if ate {
            StepResult::Ate
        } else {
            StepResult::Moved
        }
    }

    /// Relocate food off the snake. Ends the game if no cell is free.
    fn place_food(&mut self) -> bool {
        if self.food.relocate(&self.snake, self.field, &mut self.rng) {
            return true;
        }
        self.end = Some(EndReason::FieldFilled);
        false
    }

    fn finish(&mut self, reason: EndReason) -> StepResult {
        self.end = Some(reason);
        StepResult::Ended(reason)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
