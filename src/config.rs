//! Runtime configuration.
//!
//! The board and glyphs are compile-time constants; only the seed, the tick
//! interval and logging can be changed, through environment variables:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `SNAKE_SEED` | RNG seed for food placement | derived from the clock |
//! | `SNAKE_TICK_MS` | tick interval in milliseconds | 75 |
//! | `SNAKE_LOG_PATH` | write a debug log to this file | no logging |

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{GAME_OVER_HOLD_MS, TICK_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub tick: Duration,
    pub game_over_hold: Duration,
    pub log_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            tick: Duration::from_millis(TICK_MS as u64),
            game_over_hold: Duration::from_millis(GAME_OVER_HOLD_MS as u64),
            log_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let tick = lookup("SNAKE_TICK_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);

        let log_path = lookup("SNAKE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            seed,
            tick,
            log_path,
            ..defaults
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
