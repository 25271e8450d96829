//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is exercised without a terminal
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`snake`]: Segment queue, heading and the no-reversal rule
//! - [`food`]: Food position and uniform relocation off the snake
//! - [`game_state`]: The per-tick update: turn, move, eat, collide
//! - [`rng`]: Small seeded LCG used for food placement
//!
//! # Game Rules
//!
//! - The snake advances one cell per tick in its current heading.
//! - A turn onto the exact reverse heading is ignored.
//! - Landing on food grows the snake by one segment and scores one point.
//! - Leaving the field or running into its own body ends the game.
//! - Food is re-placed uniformly at random whenever the snake covers it.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameState, StepResult};
//! use tui_snake_types::{GameAction, Point};
//!
//! let mut game = GameState::new(12345);
//!
//! // No input: the snake keeps moving up.
//! assert_eq!(game.step(None), StepResult::Moved);
//! assert_eq!(game.snake().head(), Point::new(4, 3));
//!
//! // Turning right is accepted, reversing down is not.
//! game.step(Some(GameAction::MoveRight));
//! game.step(Some(GameAction::MoveLeft));
//! assert_eq!(game.snake().head(), Point::new(4, 5));
//! ```

pub mod food;
pub mod game_state;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::Food;
pub use game_state::{EndReason, GameState, StepResult};
pub use rng::SimpleRng;
pub use snake::Snake;
