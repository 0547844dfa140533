//! Edge snapping geometry

use serde::{Deserialize, Serialize};
use crate::host::CursorIcon;
use crate::math::{Point, Rect};

/// Screen edge zone a dragged window can snap to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapZone {
    /// Top edge: maximize
    Top,
    /// Left edge: left half of the screen
    Left,
    /// Right edge: right half of the screen
    Right,
}

impl SnapZone {
    /// Pointer icon shown while hovering the zone during a drag
    pub fn cursor(&self) -> CursorIcon {
        match self {
            SnapZone::Top => CursorIcon::SizeAll,
            SnapZone::Left | SnapZone::Right => CursorIcon::SizeHor,
        }
    }
}

/// Zone under the pointer, checked top, then left, then right
pub fn detect_zone(pointer: Point, screen: Rect, zone: i32) -> Option<SnapZone> {
    if pointer.y <= screen.y + zone {
        Some(SnapZone::Top)
    } else if pointer.x <= screen.x + zone {
        Some(SnapZone::Left)
    } else if pointer.x >= screen.right() - zone {
        Some(SnapZone::Right)
    } else {
        None
    }
}

/// Left half of `area`, floor split
pub fn snap_left_half(area: Rect) -> Rect {
    Rect::new(area.x, area.y, area.width / 2, area.height)
}

/// Right half of `area`; starts at the floor split and runs to the right edge
pub fn snap_right_half(area: Rect) -> Rect {
    let half = area.width / 2;
    Rect::new(area.x + half, area.y, area.width - half, area.height)
}

/// Preview rectangle for a zone on the full screen geometry
pub fn indicator_rect(zone: SnapZone, screen: Rect) -> Rect {
    match zone {
        SnapZone::Top => screen,
        SnapZone::Left => snap_left_half(screen),
        SnapZone::Right => snap_right_half(screen),
    }
}

/// Keep a dragged pointer on screen and above `fraction` of the screen height
pub fn clamp_pointer(pointer: Point, screen: Rect, fraction: f64) -> Point {
    let max_x = screen.right() - 1;
    let max_y = screen.y + (f64::from(screen.height) * fraction) as i32;
    Point::new(
        pointer.x.clamp(screen.x, max_x.max(screen.x)),
        pointer.y.clamp(screen.y, max_y.max(screen.y)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);

    #[test]
    fn test_zone_priority() {
        assert_eq!(detect_zone(Point::new(5, 5), SCREEN, 20), Some(SnapZone::Top));
        assert_eq!(detect_zone(Point::new(1915, 20), SCREEN, 20), Some(SnapZone::Top));
        assert_eq!(detect_zone(Point::new(20, 500), SCREEN, 20), Some(SnapZone::Left));
        assert_eq!(detect_zone(Point::new(1900, 500), SCREEN, 20), Some(SnapZone::Right));
        assert_eq!(detect_zone(Point::new(21, 21), SCREEN, 20), None);
        assert_eq!(detect_zone(Point::new(1899, 500), SCREEN, 20), None);
    }

    #[test]
    fn test_half_partition() {
        for area in [
            Rect::new(0, 0, 1920, 1040),
            Rect::new(0, 40, 1921, 1040),
            Rect::new(-1280, 0, 1279, 1024),
            Rect::new(7, 3, 1, 10),
        ] {
            let left = snap_left_half(area);
            let right = snap_right_half(area);
            assert_eq!(left.width + right.width, area.width);
            assert_eq!(left.x, area.x);
            assert_eq!(right.x, area.x + area.width / 2);
            assert_eq!(right.right(), area.right());
            assert_eq!((left.y, left.height), (area.y, area.height));
            assert_eq!((right.y, right.height), (area.y, area.height));
        }
    }

    #[test]
    fn test_indicator_rects() {
        assert_eq!(indicator_rect(SnapZone::Top, SCREEN), SCREEN);
        assert_eq!(indicator_rect(SnapZone::Left, SCREEN), Rect::new(0, 0, 960, 1080));
        assert_eq!(indicator_rect(SnapZone::Right, SCREEN), Rect::new(960, 0, 960, 1080));
    }

    #[test]
    fn test_clamp_pointer() {
        assert_eq!(clamp_pointer(Point::new(500, 500), SCREEN, 0.925), Point::new(500, 500));
        assert_eq!(clamp_pointer(Point::new(-30, -5), SCREEN, 0.925), Point::new(0, 0));
        assert_eq!(clamp_pointer(Point::new(2500, 1070), SCREEN, 0.925), Point::new(1919, 999));
    }

    #[test]
    fn test_zone_cursors() {
        assert_eq!(SnapZone::Top.cursor(), CursorIcon::SizeAll);
        assert_eq!(SnapZone::Left.cursor(), CursorIcon::SizeHor);
    }
}
