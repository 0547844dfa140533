//! Soft drop-shadow companion surface
//!
//! A separate click-through top-level surface drawn behind the main window.
//! Its inner rectangle casts the shadow; the feather margin around it leaves
//! room for the blur.

use crate::math::{Rect, Size};
use crate::style::ShadowStyle;

/// Shadow decoration surface
#[derive(Clone, Debug)]
pub struct ShadowWindow {
    /// Outer bounds in screen coordinates
    bounds: Rect,
    visible: bool,
    style: ShadowStyle,
}

impl ShadowWindow {
    /// Create a hidden shadow surface
    pub fn new(style: ShadowStyle) -> Self {
        Self {
            bounds: Rect::ZERO,
            visible: false,
            style,
        }
    }

    /// Outer bounds
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Shadow-casting rectangle, `feather` inside the outer bounds
    #[inline]
    pub fn inner_rect(&self) -> Rect {
        self.bounds.shrink(self.style.feather)
    }

    #[inline]
    pub fn style(&self) -> &ShadowStyle {
        &self.style
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Resize the outer bounds; the inner rectangle keeps its feather inset
    pub fn resize(&mut self, size: Size) {
        self.bounds = Rect::from_pos_size(self.bounds.position(), size);
    }

    /// Place the surface so the inner rectangle matches a window's bounds
    pub fn track(&mut self, window: Rect) {
        self.bounds = window.expand(self.style.feather);
    }
}
