//! GameView: paints a `core::GameState` onto a [`Surface`].
//!
//! This module is pure (no I/O). It can be unit-tested against a
//! [`crate::FrameBuffer`].

use crate::core::GameState;
use crate::fb::{CellStyle, Rgb};
use crate::surface::Surface;
use crate::types::{Field, BORDER_GLYPH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn of<S: Surface + ?Sized>(surface: &S) -> Self {
        let (width, height) = surface.size();
        Self { width, height }
    }
}

/// Surface cells painted by the previous frame.
///
/// Handed back by [`GameView::render`] and passed into the next call, which
/// blanks exactly these cells instead of clearing the whole surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintedCells {
    cells: Vec<(u16, u16)>,
}

impl PaintedCells {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.cells.contains(&(x, y))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.cells.iter().copied()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    fn push(&mut self, x: u16, y: u16) {
        self.cells.push((x, y));
    }
}

/// A lightweight terminal renderer for the snake game.
#[derive(Debug, Clone)]
pub struct GameView {
    field: Field,
    border: CellStyle,
    snake: CellStyle,
    food: CellStyle,
    text: CellStyle,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(Field::default())
    }
}

impl GameView {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            border: CellStyle::fg(Rgb::new(200, 200, 200)),
            snake: CellStyle::fg(Rgb::new(100, 220, 120)),
            food: CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
            text: CellStyle::default().bold(),
        }
    }

    /// Surface position `(row, col)` of field cell `(0, 0)`.
    ///
    /// Negative when the surface is smaller than the field.
    pub fn origin(&self, viewport: Viewport) -> (i32, i32) {
        (
            viewport.height as i32 / 2 - self.field.height / 2,
            viewport.width as i32 / 2 - self.field.width / 2,
        )
    }

    /// Paint one frame.
    ///
    /// Blanks the cells in `previous`, then paints the border, the snake, the
    /// food and the score line. Returns the cells painted this frame. While
    /// the game is paused nothing is touched and `previous` comes straight
    /// back.
    pub fn render<S: Surface + ?Sized>(
        &self,
        state: &GameState,
        surface: &mut S,
        previous: PaintedCells,
    ) -> PaintedCells {
        if state.paused() {
            return previous;
        }

        let blank = CellStyle::default();
        for (x, y) in previous.iter() {
            surface.set_cell(x, y, ' ', blank);
        }

        let mut painted = previous;
        painted.clear();

        let (top, left) = self.origin(Viewport::of(&*surface));
        let mut pen = Pen {
            surface,
            painted: &mut painted,
        };

        self.draw_border(&mut pen, top, left);

        let snake = state.snake();
        for segment in snake.segments() {
            // A head that crashed through the wall stays off the border.
            if self.field.contains(segment) {
                pen.put(top + segment.row, left + segment.col, snake.glyph(), self.snake);
            }
        }

        let food = state.food();
        let at = food.position();
        pen.put(top + at.row, left + at.col, food.glyph(), self.food);

        let status = format!("Score: {}", state.score());
        pen.put_str(top + self.field.height + 1, left - 1, &status, self.text);

        painted
    }

    /// Paint the end-of-game summary centered on the surface.
    ///
    /// Drawn over whatever is on screen; returns the cells it wrote.
    pub fn render_game_over<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        score: u32,
    ) -> PaintedCells {
        let Viewport { width, height } = Viewport::of(&*surface);
        let mid_row = height as i32 / 2;
        let mid_col = width as i32 / 2;

        let mut painted = PaintedCells::new();
        let mut pen = Pen {
            surface,
            painted: &mut painted,
        };

        let title = "Game over!";
        let summary = format!("Your score is {}", score);
        pen.put_str(mid_row - 1, mid_col - text_width(title) / 2, title, self.text);
        pen.put_str(mid_row, mid_col - text_width(&summary) / 2, &summary, self.text);

        painted
    }

    fn draw_border<S: Surface + ?Sized>(&self, pen: &mut Pen<'_, S>, top: i32, left: i32) {
        let bottom = top + self.field.height;
        let right = left + self.field.width;

        for col in left - 1..=right {
            pen.put(top - 1, col, BORDER_GLYPH, self.border);
            pen.put(bottom, col, BORDER_GLYPH, self.border);
        }
        for row in top..bottom {
            pen.put(row, left - 1, BORDER_GLYPH, self.border);
            pen.put(row, right, BORDER_GLYPH, self.border);
        }
    }
}

/// Clipping writer that records every cell it paints.
struct Pen<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    painted: &'a mut PaintedCells,
}

impl<S: Surface + ?Sized> Pen<'_, S> {
    fn put(&mut self, row: i32, col: i32, ch: char, style: CellStyle) {
        let (width, height) = self.surface.size();
        if row < 0 || col < 0 || row >= height as i32 || col >= width as i32 {
            return;
        }
        self.surface.set_cell(col as u16, row as u16, ch, style);
        self.painted.push(col as u16, row as u16);
    }

    fn put_str(&mut self, row: i32, col: i32, s: &str, style: CellStyle) {
        for (i, ch) in s.chars().enumerate() {
            self.put(row, col + i as i32, ch, style);
        }
    }
}

fn text_width(s: &str) -> i32 {
    s.chars().count() as i32
}
