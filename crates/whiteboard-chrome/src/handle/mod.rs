//! Edge and corner resize handles
//!
//! Eight thin regions along the window border. Each handle resizes the
//! window on its own, straight through the host; none of them touch the
//! controller's drag state.

#[allow(clippy::module_inception)]
mod handle;
mod position;
mod resize;

pub use handle::ResizeHandle;
pub use position::HandlePosition;
pub use resize::calculate_resize;

use crate::math::{Rect, Size};

/// Window-local rectangle of a handle for the given window size
pub fn handle_rect(position: HandlePosition, window: Size, thickness: i32, corner: i32) -> Rect {
    let (w, h) = (window.width, window.height);
    match position {
        HandlePosition::Top => Rect::new(0, 0, w, thickness),
        HandlePosition::Bottom => Rect::new(0, h - thickness, w, thickness),
        HandlePosition::Left => Rect::new(0, 0, thickness, h),
        HandlePosition::Right => Rect::new(w - thickness, 0, thickness, h),
        HandlePosition::TopLeft => Rect::new(0, 0, corner, corner),
        HandlePosition::TopRight => Rect::new(w - corner, 0, corner, corner),
        HandlePosition::BottomLeft => Rect::new(0, h - corner, corner, corner),
        HandlePosition::BottomRight => Rect::new(w - corner, h - corner, corner, corner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_handles_span_window() {
        let size = Size::new(800, 600);
        assert_eq!(handle_rect(HandlePosition::Top, size, 6, 10), Rect::new(0, 0, 800, 6));
        assert_eq!(handle_rect(HandlePosition::Bottom, size, 6, 10), Rect::new(0, 594, 800, 6));
        assert_eq!(handle_rect(HandlePosition::Left, size, 6, 10), Rect::new(0, 0, 6, 600));
        assert_eq!(handle_rect(HandlePosition::Right, size, 6, 10), Rect::new(794, 0, 6, 600));
    }

    #[test]
    fn test_corner_handles_are_squares() {
        let size = Size::new(800, 600);
        assert_eq!(handle_rect(HandlePosition::TopLeft, size, 6, 10), Rect::new(0, 0, 10, 10));
        assert_eq!(handle_rect(HandlePosition::TopRight, size, 6, 10), Rect::new(790, 0, 10, 10));
        assert_eq!(handle_rect(HandlePosition::BottomLeft, size, 6, 10), Rect::new(0, 590, 10, 10));
        assert_eq!(
            handle_rect(HandlePosition::BottomRight, size, 6, 10),
            Rect::new(790, 590, 10, 10)
        );
    }
}
