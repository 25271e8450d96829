//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! The game view paints through the [`Surface`] trait, so the same code draws
//! into an in-memory [`FrameBuffer`] in tests and into the real terminal via
//! [`TerminalRenderer`].
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Repaint only what changed: the view blanks the cells it painted last
//!   frame, and the terminal renderer emits only the changed runs
//! - Tolerate terminals smaller than the play field by clipping

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod surface;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, PaintedCells, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use surface::Surface;
