//! Custom title bar geometry and hit testing

use serde::{Deserialize, Serialize};
use crate::config::ChromeConfig;
use crate::math::{Point, Rect};
use crate::style::{MaximizeGlyph, CLOSE_GLYPH, MINIMIZE_GLYPH};

/// Title bar buttons, left to right
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChromeButton {
    Minimize,
    Maximize,
    Close,
}

impl ChromeButton {
    /// All buttons in layout order
    pub const ALL: [ChromeButton; 3] = [
        ChromeButton::Minimize,
        ChromeButton::Maximize,
        ChromeButton::Close,
    ];

    #[inline]
    fn index(&self) -> i32 {
        match self {
            ChromeButton::Minimize => 0,
            ChromeButton::Maximize => 1,
            ChromeButton::Close => 2,
        }
    }
}

/// What a title bar point hit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleBarHit {
    Button(ChromeButton),
    /// Spacing between buttons; neither a button nor draggable
    ClusterGap,
    /// Anywhere else in the strip; starts drags
    Caption,
}

/// Height-bounded strip at the top of the window
#[derive(Clone, Debug)]
pub struct TitleBar {
    title: String,
    width: i32,
    height: i32,
    margin: i32,
    button_size: i32,
    button_spacing: i32,
    glyph: MaximizeGlyph,
}

impl TitleBar {
    /// Create a title bar for a window of the given width
    pub fn new(config: &ChromeConfig, width: i32) -> Self {
        Self {
            title: config.title.clone(),
            width,
            height: config.title_bar_height,
            margin: config.title_bar_margin,
            button_size: config.button_size,
            button_spacing: config.button_spacing,
            glyph: MaximizeGlyph::Maximize,
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    #[inline]
    pub fn glyph(&self) -> MaximizeGlyph {
        self.glyph
    }

    #[inline]
    pub fn set_glyph(&mut self, glyph: MaximizeGlyph) {
        self.glyph = glyph;
    }

    /// Window-local rectangle of the whole strip
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Window-local rectangle holding the three buttons
    pub fn button_cluster_rect(&self) -> Rect {
        let width = self.button_size * 3 + self.button_spacing * 2;
        let x = self.width - self.margin - width;
        let y = (self.height - self.button_size) / 2;
        Rect::new(x, y, width, self.button_size)
    }

    /// Window-local rectangle of one button
    pub fn button_rect(&self, button: ChromeButton) -> Rect {
        let cluster = self.button_cluster_rect();
        let x = cluster.x + button.index() * (self.button_size + self.button_spacing);
        Rect::new(x, cluster.y, self.button_size, self.button_size)
    }

    /// Label drawn on a button
    pub fn label(&self, button: ChromeButton) -> &'static str {
        match button {
            ChromeButton::Minimize => MINIMIZE_GLYPH,
            ChromeButton::Maximize => self.glyph.text(),
            ChromeButton::Close => CLOSE_GLYPH,
        }
    }

    /// Hit test a window-local point
    pub fn hit_test(&self, local: Point) -> Option<TitleBarHit> {
        if !self.rect().contains(local) {
            return None;
        }
        if self.button_cluster_rect().contains(local) {
            let hit = ChromeButton::ALL
                .iter()
                .copied()
                .find(|b| self.button_rect(*b).contains(local))
                .map_or(TitleBarHit::ClusterGap, TitleBarHit::Button);
            return Some(hit);
        }
        Some(TitleBarHit::Caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_bar() -> TitleBar {
        TitleBar::new(&ChromeConfig::default(), 800)
    }

    #[test]
    fn test_button_layout() {
        let bar = title_bar();
        assert_eq!(bar.button_cluster_rect(), Rect::new(701, 0, 94, 30));
        assert_eq!(bar.button_rect(ChromeButton::Minimize), Rect::new(701, 0, 30, 30));
        assert_eq!(bar.button_rect(ChromeButton::Maximize), Rect::new(733, 0, 30, 30));
        assert_eq!(bar.button_rect(ChromeButton::Close), Rect::new(765, 0, 30, 30));
    }

    #[test]
    fn test_hit_test() {
        let bar = title_bar();
        assert_eq!(bar.hit_test(Point::new(400, 10)), Some(TitleBarHit::Caption));
        assert_eq!(bar.hit_test(Point::new(796, 10)), Some(TitleBarHit::Caption));
        assert_eq!(
            bar.hit_test(Point::new(770, 15)),
            Some(TitleBarHit::Button(ChromeButton::Close))
        );
        assert_eq!(
            bar.hit_test(Point::new(701, 0)),
            Some(TitleBarHit::Button(ChromeButton::Minimize))
        );
        assert_eq!(bar.hit_test(Point::new(400, 30)), None);
    }

    #[test]
    fn test_gap_between_buttons_is_not_caption() {
        let bar = title_bar();
        assert_eq!(bar.hit_test(Point::new(731, 10)), Some(TitleBarHit::ClusterGap));
    }

    #[test]
    fn test_labels_follow_glyph() {
        let mut bar = title_bar();
        assert_eq!(bar.title(), "Whiteboard App");
        assert_eq!(bar.label(ChromeButton::Maximize), "□");
        bar.set_glyph(MaximizeGlyph::Restore);
        assert_eq!(bar.label(ChromeButton::Maximize), "❐");
        assert_eq!(bar.label(ChromeButton::Close), "✕");
    }
}
