//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, rendering, input mapping).
//!
//! # Play Field
//!
//! The snake lives on a fixed grid, addressed as `(row, col)`:
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 15 rows (indexed 0-14)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 75 | Fixed interval between game updates |
//! | `GAME_OVER_HOLD_MS` | 3000 | How long the final score stays on screen |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Field, GameAction, Point, FIELD_HEIGHT, FIELD_WIDTH};
//!
//! // Step a point one cell up
//! let p = Point::new(5, 3).step(Direction::Up);
//! assert_eq!(p, Point::new(4, 3));
//!
//! // Reversal detection
//! assert!(Direction::Up.is_opposite(Direction::Down));
//!
//! // Commands that steer carry a heading
//! assert_eq!(GameAction::MoveLeft.direction(), Some(Direction::Left));
//!
//! // Field bounds
//! let field = Field::default();
//! assert!(field.contains(Point::new(0, 0)));
//! assert!(!field.contains(Point::new(-1, 0)));
//! assert_eq!((FIELD_WIDTH, FIELD_HEIGHT), (30, 15));
//! ```

/// Play field width in cells (30 columns)
pub const FIELD_WIDTH: i32 = 30;

/// Play field height in cells (15 rows)
pub const FIELD_HEIGHT: i32 = 15;

/// Fixed interval between game updates in milliseconds
pub const TICK_MS: u32 = 75;

/// How long the game-over summary is held before teardown
pub const GAME_OVER_HOLD_MS: u32 = 3000;

/// Capacity of the queue between the input listener and the game loop.
pub const INPUT_QUEUE_DEPTH: usize = 16;

/// Snake body glyph (full block)
pub const SNAKE_GLYPH: char = '\u{2588}';

/// Food glyph (black circle)
pub const FOOD_GLYPH: char = '\u{25CF}';

/// Border glyph drawn around the play field
pub const BORDER_GLYPH: char = '‖';

/// Initial snake body, tail first.
pub const INITIAL_SNAKE: [Point; 5] = [
    Point::new(9, 3),
    Point::new(8, 3),
    Point::new(7, 3),
    Point::new(6, 3),
    Point::new(5, 3),
];

/// Initial snake heading
pub const INITIAL_DIRECTION: Direction = Direction::Up;

/// Initial food position
pub const INITIAL_FOOD: Point = Point::new(10, 10);

/// A cell coordinate on the play field.
///
/// Coordinates are signed: a head stepping past the top wall lands on row -1,
/// which is how wall collisions are detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring point one cell away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Movement direction of the snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Velocity as `(d_row, d_col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (-1, 0));
    /// assert_eq!(Direction::Right.delta(), (0, 1));
    /// ```
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Bounds of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Field {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if `p` lies within `[0, height) x [0, width)`.
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.row < self.height && p.col >= 0 && p.col < self.width
    }

    /// Number of cells on the field.
    pub fn area(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

/// Commands produced by the input source.
///
/// Direction commands and pause reach the game engine; `Quit` is handled by
/// the driver loop before the engine ever sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Turn the snake upwards
    MoveUp,
    /// Turn the snake left
    MoveLeft,
    /// Turn the snake downwards
    MoveDown,
    /// Turn the snake right
    MoveRight,
    /// Toggle pause state
    TogglePause,
    /// Leave the game immediately
    Quit,
}

impl GameAction {
    /// Convert to camelCase string (used in log lines)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveUp => "moveUp",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveDown => "moveDown",
            GameAction::MoveRight => "moveRight",
            GameAction::TogglePause => "togglePause",
            GameAction::Quit => "quit",
        }
    }

    /// The heading requested by a move command.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::TogglePause | GameAction::Quit => None,
        }
    }
}

impl From<Direction> for GameAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => GameAction::MoveUp,
            Direction::Down => GameAction::MoveDown,
            Direction::Left => GameAction::MoveLeft,
            Direction::Right => GameAction::MoveRight,
        }
    }
}
