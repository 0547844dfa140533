//! 2D point type for positions and offsets

use serde::{Deserialize, Serialize};

/// 2D point for positions and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `|x| + |y|`
    #[inline]
    pub fn manhattan_length(self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    /// Manhattan distance to another point
    #[inline]
    pub fn manhattan_distance(self, other: Point) -> i32 {
        (self - other).manhattan_length()
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl std::ops::Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 5);

        assert_eq!(a + b, Point::new(4, 7));
        assert_eq!(b - a, Point::new(2, 3));
        assert_eq!(-a, Point::new(-1, -2));
    }

    #[test]
    fn test_manhattan_length() {
        assert_eq!(Point::new(3, -4).manhattan_length(), 7);
        assert_eq!(Point::ZERO.manhattan_length(), 0);
    }

    #[test]
    fn test_manhattan_distance_is_symmetric() {
        let a = Point::new(500, 50);
        let b = Point::new(497, 48);
        assert_eq!(a.manhattan_distance(b), 5);
        assert_eq!(b.manhattan_distance(a), 5);
    }
}
