//! Resize geometry for a handle drag

use crate::math::{Point, Rect, Size};
use super::HandlePosition;

/// Calculate the window rectangle after dragging a handle by `delta`
///
/// Right and bottom edges grow or shrink with a floor at `min`. Left and top
/// edges follow the pointer while the window is above the minimum or growing;
/// once a shrink hits the minimum the opposite edge stays where it was at
/// press time.
pub fn calculate_resize(position: HandlePosition, start: Rect, delta: Point, min: Size) -> Rect {
    let (x, width) = resize_axis(
        start.x,
        start.width,
        delta.x,
        min.width,
        position.moves_left_edge(),
        position.moves_right_edge(),
    );
    let (y, height) = resize_axis(
        start.y,
        start.height,
        delta.y,
        min.height,
        position.moves_top_edge(),
        position.moves_bottom_edge(),
    );

    Rect::new(x, y, width, height)
}

/// One axis of [`calculate_resize`]: returns the new origin and extent
fn resize_axis(
    origin: i32,
    extent: i32,
    delta: i32,
    min: i32,
    moves_near_edge: bool,
    moves_far_edge: bool,
) -> (i32, i32) {
    if moves_far_edge {
        return (origin, (extent + delta).max(min));
    }

    if moves_near_edge {
        let proposed = (extent - delta).max(min);
        if proposed > min || delta <= 0 {
            return (origin + delta, proposed);
        }
        // Pinned: keep the far edge where it was at press time
        return (origin + extent - min, min);
    }

    (origin, extent)
}
