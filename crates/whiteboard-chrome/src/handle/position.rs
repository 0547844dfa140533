//! Handle positions

use serde::{Deserialize, Serialize};
use crate::host::CursorIcon;

/// Edge or corner a resize handle is bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandlePosition {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl HandlePosition {
    /// All positions in stacking order; later entries sit above earlier ones
    pub const ALL: [HandlePosition; 8] = [
        HandlePosition::Top,
        HandlePosition::Bottom,
        HandlePosition::Left,
        HandlePosition::Right,
        HandlePosition::TopLeft,
        HandlePosition::TopRight,
        HandlePosition::BottomLeft,
        HandlePosition::BottomRight,
    ];

    /// Check if dragging this handle moves the left edge
    #[inline]
    pub fn moves_left_edge(&self) -> bool {
        matches!(
            self,
            HandlePosition::Left | HandlePosition::TopLeft | HandlePosition::BottomLeft
        )
    }

    /// Check if dragging this handle moves the right edge
    #[inline]
    pub fn moves_right_edge(&self) -> bool {
        matches!(
            self,
            HandlePosition::Right | HandlePosition::TopRight | HandlePosition::BottomRight
        )
    }

    /// Check if dragging this handle moves the top edge
    #[inline]
    pub fn moves_top_edge(&self) -> bool {
        matches!(
            self,
            HandlePosition::Top | HandlePosition::TopLeft | HandlePosition::TopRight
        )
    }

    /// Check if dragging this handle moves the bottom edge
    #[inline]
    pub fn moves_bottom_edge(&self) -> bool {
        matches!(
            self,
            HandlePosition::Bottom | HandlePosition::BottomLeft | HandlePosition::BottomRight
        )
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            HandlePosition::TopLeft
                | HandlePosition::TopRight
                | HandlePosition::BottomLeft
                | HandlePosition::BottomRight
        )
    }

    /// Pointer icon shown over this handle
    pub fn cursor(&self) -> CursorIcon {
        match self {
            HandlePosition::Top | HandlePosition::Bottom => CursorIcon::SizeVer,
            HandlePosition::Left | HandlePosition::Right => CursorIcon::SizeHor,
            HandlePosition::TopLeft | HandlePosition::BottomRight => CursorIcon::SizeFDiag,
            HandlePosition::TopRight | HandlePosition::BottomLeft => CursorIcon::SizeBDiag,
        }
    }

    /// Lowercase name, as used by stylesheets and views
    pub fn name(&self) -> &'static str {
        match self {
            HandlePosition::Top => "top",
            HandlePosition::Bottom => "bottom",
            HandlePosition::Left => "left",
            HandlePosition::Right => "right",
            HandlePosition::TopLeft => "topleft",
            HandlePosition::TopRight => "topright",
            HandlePosition::BottomLeft => "bottomleft",
            HandlePosition::BottomRight => "bottomright",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_combine_edges() {
        for pos in HandlePosition::ALL {
            let horizontal = pos.moves_left_edge() || pos.moves_right_edge();
            let vertical = pos.moves_top_edge() || pos.moves_bottom_edge();
            assert_eq!(pos.is_corner(), horizontal && vertical, "{}", pos.name());
        }
    }

    #[test]
    fn test_cursor_icons() {
        assert_eq!(HandlePosition::Top.cursor(), CursorIcon::SizeVer);
        assert_eq!(HandlePosition::Right.cursor(), CursorIcon::SizeHor);
        assert_eq!(HandlePosition::TopLeft.cursor(), CursorIcon::SizeFDiag);
        assert_eq!(HandlePosition::BottomLeft.cursor(), CursorIcon::SizeBDiag);
    }

    #[test]
    fn test_serde_name_matches() {
        for pos in HandlePosition::ALL {
            let json = serde_json::to_string(&pos).unwrap();
            assert_eq!(json, format!("\"{}\"", pos.name()));
        }
    }
}
