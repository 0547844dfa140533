//! Axis-aligned rectangle type

use serde::{Deserialize, Serialize};
use super::{Point, Size};

/// Axis-aligned rectangle; `right()` and `bottom()` are exclusive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Zero rectangle at origin
    pub const ZERO: Rect = Rect {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Create a new rectangle
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create from position and size
    #[inline]
    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Get position (top-left corner)
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get size
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Get the bottom edge (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if the rectangle has no area
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    /// Expand rectangle by amount on all sides
    #[inline]
    pub fn expand(&self, amount: i32) -> Rect {
        Rect::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2,
            self.height + amount * 2,
        )
    }

    /// Shrink rectangle by amount on all sides, never below zero size
    pub fn shrink(&self, amount: i32) -> Rect {
        let width = (self.width - amount * 2).max(0);
        let height = (self.height - amount * 2).max(0);
        Rect::new(self.x + amount, self.y + amount, width, height)
    }

    /// Translate rectangle by offset
    #[inline]
    pub fn translate(&self, offset: Point) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}
