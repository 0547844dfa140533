//! Visual style values for the chrome decorations
//!
//! Renderers read these; the interaction logic only cares about positions
//! and sizes.

use serde::{Deserialize, Serialize};

/// RGBA color, 0-255 per channel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new color
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Snap preview overlay style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndicatorStyle {
    pub border: Rgba,
    pub border_width: i32,
    pub fill: Rgba,
    /// Inset of the drawn rectangle from the overlay bounds
    pub inset: i32,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            border: Rgba::new(255, 255, 255, 100),
            border_width: 3,
            fill: Rgba::new(255, 255, 255, 15),
            inset: 1,
        }
    }
}

/// Drop-shadow companion surface style
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShadowStyle {
    /// Margin between the shadow surface bounds and the shadow-casting rect
    pub feather: i32,
    pub blur_radius: i32,
    pub color: Rgba,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            feather: 40,
            blur_radius: 40,
            color: Rgba::new(0, 0, 0, 180),
        }
    }
}

/// Glyph shown on the maximize button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaximizeGlyph {
    /// Window is normal; clicking maximizes
    #[default]
    Maximize,
    /// Window is maximized; clicking restores
    Restore,
}

impl MaximizeGlyph {
    /// Glyph for the given maximized flag
    #[inline]
    pub fn for_maximized(maximized: bool) -> Self {
        if maximized {
            MaximizeGlyph::Restore
        } else {
            MaximizeGlyph::Maximize
        }
    }

    /// Button label
    pub fn text(&self) -> &'static str {
        match self {
            MaximizeGlyph::Maximize => "□",
            MaximizeGlyph::Restore => "❐",
        }
    }
}

/// Minimize button label
pub const MINIMIZE_GLYPH: &str = "–";

/// Close button label
pub const CLOSE_GLYPH: &str = "✕";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_for_state() {
        assert_eq!(MaximizeGlyph::for_maximized(true), MaximizeGlyph::Restore);
        assert_eq!(MaximizeGlyph::for_maximized(false).text(), "□");
        assert_eq!(MaximizeGlyph::Restore.text(), "❐");
    }

    #[test]
    fn test_style_partial_json_keeps_defaults() {
        let style: ShadowStyle = serde_json::from_str(r#"{ "feather": 12 }"#).unwrap();
        assert_eq!(style.feather, 12);
        assert_eq!(style.blur_radius, 40);
        assert_eq!(style.color, Rgba::new(0, 0, 0, 180));
    }
}
