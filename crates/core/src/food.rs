//! Food module - a single edible cell and its placement.

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Field, Point, FOOD_GLYPH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    position: Point,
    glyph: char,
}

impl Food {
    pub fn new(position: Point) -> Self {
        Self {
            position,
            glyph: FOOD_GLYPH,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Move the food off the snake, if it is on it.
    ///
    /// Samples uniformly over the whole field until the sample misses the
    /// snake. Returns `false` (leaving the food where it is) when the snake
    /// covers every cell of the field.
    pub fn relocate(&mut self, snake: &Snake, field: Field, rng: &mut SimpleRng) -> bool {
        if !snake.contains(self.position) {
            return true;
        }
        if !has_free_cell(snake, field) {
            return false;
        }

        loop {
            let candidate = rng.next_point(field);
            if !snake.contains(candidate) {
                self.position = candidate;
                return true;
            }
        }
    }
}

fn has_free_cell(snake: &Snake, field: Field) -> bool {
    // Fewer segments than cells always leaves a gap.
    if snake.len() < field.area() {
        return true;
    }
    (0..field.height).any(|row| (0..field.width).any(|col| !snake.contains(Point::new(row, col))))
}
