//! Snap preview overlay

use crate::math::{Point, Rect};
use crate::style::IndicatorStyle;

/// Click-through overlay previewing the rectangle a release would snap to
#[derive(Clone, Debug, Default)]
pub struct VisualIndicator {
    /// Window-local rectangle
    rect: Rect,
    /// Screen rectangle the overlay was last shown for
    screen_rect: Rect,
    visible: bool,
    style: IndicatorStyle,
}

impl VisualIndicator {
    /// Create a hidden indicator
    pub fn new(style: IndicatorStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Show over a screen rectangle, converted into window-local coordinates
    pub fn show_at(&mut self, screen_rect: Rect, window_origin: Point) {
        self.screen_rect = screen_rect;
        self.rect = screen_rect.translate(-window_origin);
        self.visible = true;
    }

    #[inline]
    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Window-local rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn screen_rect(&self) -> Rect {
        self.screen_rect
    }

    #[inline]
    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    /// Rectangle the border is drawn along, inset from the overlay bounds
    #[inline]
    pub fn frame_rect(&self) -> Rect {
        Rect::new(0, 0, self.rect.width, self.rect.height).shrink(self.style.inset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_converts_to_local() {
        let mut indicator = VisualIndicator::new(IndicatorStyle::default());
        assert!(!indicator.is_visible());

        indicator.show_at(Rect::new(0, 0, 960, 1080), Point::new(300, 200));
        assert!(indicator.is_visible());
        assert_eq!(indicator.rect(), Rect::new(-300, -200, 960, 1080));
        assert_eq!(indicator.screen_rect(), Rect::new(0, 0, 960, 1080));
    }

    #[test]
    fn test_show_overwrites_geometry() {
        let mut indicator = VisualIndicator::new(IndicatorStyle::default());
        indicator.show_at(Rect::new(0, 0, 960, 1080), Point::ZERO);
        indicator.show_at(Rect::new(960, 0, 960, 1080), Point::ZERO);
        assert_eq!(indicator.rect(), Rect::new(960, 0, 960, 1080));

        indicator.hide();
        assert!(!indicator.is_visible());
    }

    #[test]
    fn test_frame_rect_is_inset() {
        let mut indicator = VisualIndicator::new(IndicatorStyle::default());
        indicator.show_at(Rect::new(0, 0, 100, 50), Point::ZERO);
        assert_eq!(indicator.frame_rect(), Rect::new(1, 1, 98, 48));
    }
}
