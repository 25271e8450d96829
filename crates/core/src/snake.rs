//! Snake module - body segments and heading
//!
//! Segments are kept in a `VecDeque`: the front is the tail and the back is the
//! head, so moving is a push at the back and a pop at the front.

use std::collections::VecDeque;

use crate::types::{Direction, Point, SNAKE_GLYPH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    segments: VecDeque<Point>,
    direction: Direction,
    glyph: char,
}

impl Snake {
    /// Build a snake from its body, tail first.
    ///
    /// # Panics
    ///
    /// Panics if `body` is empty.
    pub fn new(body: impl IntoIterator<Item = Point>, direction: Direction) -> Self {
        let segments: VecDeque<Point> = body.into_iter().collect();
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Self {
            segments,
            direction,
            glyph: SNAKE_GLYPH,
        }
    }

    pub fn head(&self) -> Point {
        // Never empty: enforced by `new`, and `pop_tail` keeps the head.
        self.segments[self.segments.len() - 1]
    }

    pub fn tail(&self) -> Point {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn glyph(&self) -> char {
        self.glyph
    }

    /// Segments from tail to head.
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().copied()
    }

    /// True if any segment, head included, occupies `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.segments.contains(&p)
    }

    /// True if any segment other than the head occupies `p`.
    pub fn body_contains(&self, p: Point) -> bool {
        let body_len = self.segments.len() - 1;
        self.segments.iter().take(body_len).any(|&s| s == p)
    }

    /// Change heading. A request for the exact reverse is ignored.
    ///
    /// Returns whether the heading was accepted.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Append a new head one cell ahead and return it.
    pub fn push_head(&mut self) -> Point {
        let head = self.head().step(self.direction);
        self.segments.push_back(head);
        head
    }

    /// Remove the tail segment. The last remaining segment is never removed.
    pub fn pop_tail(&mut self) -> Option<Point> {
        if self.segments.len() <= 1 {
            return None;
        }
        self.segments.pop_front()
    }
}
