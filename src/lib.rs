//! Terminal snake (workspace facade crate).
//!
//! The game itself lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_snake::{core, input, term, types}` and adds the
//! pieces that tie them together: the [`driver`] loop and its [`config`].

pub mod config;
pub mod driver;

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
