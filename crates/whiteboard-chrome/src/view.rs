//! Render snapshot
//!
//! Everything a renderer needs to draw the chrome for one frame, in one
//! serializable value. Window-local rectangles unless noted.

use serde::{Deserialize, Serialize};
use crate::chrome::{ChromeButton, ChromeController};
use crate::host::{CursorIcon, HostWindowState, WindowHost};
use crate::math::Rect;
use crate::style::{IndicatorStyle, MaximizeGlyph, ShadowStyle};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonView {
    pub button: ChromeButton,
    pub rect: Rect,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleView {
    pub name: String,
    pub rect: Rect,
    pub visible: bool,
    pub cursor: CursorIcon,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorView {
    pub visible: bool,
    pub rect: Rect,
    /// Rectangle inset by the border
    pub frame: Rect,
    pub style: IndicatorStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowView {
    pub visible: bool,
    /// Screen coordinates
    pub outer: Rect,
    /// Screen coordinates
    pub inner: Rect,
    pub style: ShadowStyle,
}

/// Chrome state for one frame
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChromeView {
    pub title: String,
    pub state: HostWindowState,
    /// Screen coordinates
    pub geometry: Rect,
    pub glyph: MaximizeGlyph,
    pub title_bar: Rect,
    pub buttons: Vec<ButtonView>,
    pub content: Rect,
    pub handles: Vec<HandleView>,
    pub indicator: IndicatorView,
    pub shadow: ShadowView,
    pub cursor: CursorIcon,
    pub dragging: bool,
    pub closed: bool,
}

impl<H: WindowHost> ChromeController<H> {
    /// Snapshot the chrome for rendering
    pub fn view(&self) -> ChromeView {
        let title_bar = self.title_bar();
        let buttons = ChromeButton::ALL
            .iter()
            .map(|&button| ButtonView {
                button,
                rect: title_bar.button_rect(button),
                label: title_bar.label(button).to_string(),
            })
            .collect();

        let handles = self
            .handles()
            .iter()
            .map(|h| HandleView {
                name: h.position().name().to_string(),
                rect: h.rect(),
                visible: h.is_visible(),
                cursor: h.cursor(),
            })
            .collect();

        let indicator = self.indicator();
        let shadow = self.shadow();

        ChromeView {
            title: self.title().to_string(),
            state: self.host().state(),
            geometry: self.host().geometry(),
            glyph: self.maximize_glyph(),
            title_bar: title_bar.rect(),
            buttons,
            content: self.content_rect(),
            handles,
            indicator: IndicatorView {
                visible: indicator.is_visible(),
                rect: indicator.rect(),
                frame: indicator.frame_rect(),
                style: *indicator.style(),
            },
            shadow: ShadowView {
                visible: shadow.is_visible(),
                outer: shadow.bounds(),
                inner: shadow.inner_rect(),
                style: *shadow.style(),
            },
            cursor: self.cursor(),
            dragging: self.is_dragging(),
            closed: self.is_closed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChromeConfig;
    use crate::host::{ScreenInfo, SimulatedHost};

    fn chrome() -> ChromeController<SimulatedHost> {
        let screen = ScreenInfo::new(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040));
        let host = SimulatedHost::with_geometry(screen, Rect::new(100, 30, 800, 600));
        let config = ChromeConfig {
            start_maximized: false,
            ..ChromeConfig::default()
        };
        let mut chrome = ChromeController::new(host, config).unwrap();
        chrome.host_mut().set_geometry(Rect::new(100, 30, 800, 600));
        chrome.pump();
        chrome
    }

    #[test]
    fn test_view_layout() {
        let view = chrome().view();

        assert_eq!(view.title, "Whiteboard App");
        assert_eq!(view.state, HostWindowState::Normal);
        assert_eq!(view.title_bar, Rect::new(0, 0, 800, 30));
        assert_eq!(view.content, Rect::new(0, 30, 800, 570));
        assert_eq!(view.buttons.len(), 3);
        assert_eq!(view.buttons[1].label, "□");
        assert_eq!(view.handles.len(), 8);
        assert!(view.handles.iter().all(|h| h.visible));
        assert!(!view.indicator.visible);
        assert!(view.shadow.visible);
        assert_eq!(view.shadow.inner, Rect::new(100, 30, 800, 600));
    }

    #[test]
    fn test_view_json_is_camel_case() {
        let json = serde_json::to_value(chrome().view()).unwrap();
        assert!(json.get("titleBar").is_some());
        assert_eq!(json["state"], "normal");
        assert_eq!(json["glyph"], "maximize");
        assert_eq!(json["handles"][7]["name"], "bottomright");
    }
}
