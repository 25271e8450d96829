//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game state. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and moves them from
//! a blocking listener thread to the game loop through a bounded queue that the
//! loop polls without blocking.

pub mod listener;
pub mod map;

pub use tui_snake_types as types;

pub use listener::{CrosstermEvents, EventSource, InputListener, InputQueue, InputSender};
pub use map::{map_key_event, should_quit};
