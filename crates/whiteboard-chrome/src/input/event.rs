//! Pointer events delivered by the host

use serde::{Deserialize, Serialize};
use crate::math::Point;

/// Kind of pointer event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerKind {
    Press,
    Move,
    Release,
    DoubleClick,
}

/// Mouse button identity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    #[default]
    Left,
    Middle,
    Right,
    /// Move events with no button held
    None,
}

/// A pointer event in global (screen) coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub global: Point,
    #[serde(default)]
    pub button: MouseButton,
}

impl PointerEvent {
    /// Create a new event
    #[inline]
    pub const fn new(kind: PointerKind, global: Point, button: MouseButton) -> Self {
        Self { kind, global, button }
    }

    /// Left button press
    #[inline]
    pub const fn press(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Press, Point::new(x, y), MouseButton::Left)
    }

    /// Move with the left button held
    #[inline]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Move, Point::new(x, y), MouseButton::Left)
    }

    /// Left button release
    #[inline]
    pub const fn release(x: i32, y: i32) -> Self {
        Self::new(PointerKind::Release, Point::new(x, y), MouseButton::Left)
    }

    /// Left button double-click
    #[inline]
    pub const fn double_click(x: i32, y: i32) -> Self {
        Self::new(PointerKind::DoubleClick, Point::new(x, y), MouseButton::Left)
    }

    /// Position relative to a window origin
    #[inline]
    pub fn local(&self, window_origin: Point) -> Point {
        self.global - window_origin
    }
}
