//! Window state actions

use tracing::debug;
use crate::host::WindowHost;
use crate::math::Rect;
use crate::snap::{snap_left_half, snap_right_half};
use crate::style::MaximizeGlyph;
use super::{ChromeButton, ChromeController, MinimizeIntent};

impl<H: WindowHost> ChromeController<H> {
    /// Maximize to the available screen area
    pub fn maximize_window(&mut self) {
        if !self.host.is_maximized() {
            self.last_normal_geometry = self.host.geometry();
        }
        self.host.show_maximized();
        self.title_bar.set_glyph(MaximizeGlyph::Restore);
        debug!(last_normal = ?self.last_normal_geometry, "maximize");
    }

    /// Return to the normal state and the last normal rectangle
    pub fn restore_window(&mut self) {
        self.host.show_normal();
        // The host's own normal rectangle may be stale after a snap
        if !self.last_normal_geometry.is_empty() {
            self.host.set_geometry(self.last_normal_geometry);
        }
        self.title_bar.set_glyph(MaximizeGlyph::Maximize);
        debug!(geometry = ?self.last_normal_geometry, "restore");
    }

    /// Maximize button and caption double-click
    pub fn toggle_maximize(&mut self) {
        if self.host.is_maximized() {
            self.restore_window();
        } else {
            self.maximize_window();
        }
        self.refresh_handle_visibility();
    }

    pub fn minimize_window(&mut self) {
        self.minimize_intent = MinimizeIntent::Minimizing {
            restore_maximized: self.host.is_maximized(),
        };
        debug!(intent = ?self.minimize_intent, "minimize");
        self.host.show_minimized();
    }

    /// Close the window and drop every transient surface
    pub fn close_window(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if self.input.end().is_some() {
            self.host.release_pointer();
        }
        for handle in &mut self.handles {
            handle.set_visible(false);
        }
        self.indicator.hide();
        self.shadow.set_visible(false);
        self.deferred.clear();
        debug!(title = self.title_bar.title(), "window closed");
        self.host.close();
    }

    /// Occupy the left half of the available screen area
    pub fn snap_to_left_half(&mut self) {
        let rect = snap_left_half(self.host.primary_screen().available);
        self.apply_snap(rect);
    }

    /// Occupy the right half of the available screen area
    pub fn snap_to_right_half(&mut self) {
        let rect = snap_right_half(self.host.primary_screen().available);
        self.apply_snap(rect);
    }

    fn apply_snap(&mut self, rect: Rect) {
        if self.host.is_maximized() {
            self.host.show_normal();
            self.title_bar.set_glyph(MaximizeGlyph::Maximize);
        }
        self.host.set_geometry(rect);
        self.last_normal_geometry = rect;
        debug!(?rect, "snap");
    }

    /// Run the action bound to a title bar button
    pub fn activate(&mut self, button: ChromeButton) {
        match button {
            ChromeButton::Minimize => self.minimize_window(),
            ChromeButton::Maximize => self.toggle_maximize(),
            ChromeButton::Close => self.close_window(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chrome::{ChromeButton, ChromeController, MinimizeIntent};
    use crate::config::ChromeConfig;
    use crate::host::{HostWindowState, ScreenInfo, SimulatedHost, WindowHost};
    use crate::math::Rect;
    use crate::style::MaximizeGlyph;

    fn chrome() -> ChromeController<SimulatedHost> {
        let screen = ScreenInfo::new(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040));
        let host = SimulatedHost::with_geometry(screen, Rect::new(100, 100, 800, 600));
        let config = ChromeConfig {
            start_maximized: false,
            ..ChromeConfig::default()
        };
        let mut chrome = ChromeController::new(host, config).unwrap();
        chrome.host_mut().set_geometry(Rect::new(100, 100, 800, 600));
        chrome.pump();
        chrome
    }

    #[test]
    fn test_maximize_then_restore() {
        let mut chrome = chrome();

        chrome.maximize_window();
        assert_eq!(chrome.host().geometry(), Rect::new(0, 0, 1920, 1040));
        assert_eq!(chrome.last_normal_geometry(), Rect::new(100, 100, 800, 600));
        assert_eq!(chrome.maximize_glyph(), MaximizeGlyph::Restore);

        chrome.restore_window();
        assert_eq!(chrome.host().geometry(), Rect::new(100, 100, 800, 600));
        assert_eq!(chrome.maximize_glyph(), MaximizeGlyph::Maximize);
    }

    #[test]
    fn test_maximize_twice_keeps_normal_geometry() {
        let mut chrome = chrome();
        chrome.maximize_window();
        chrome.maximize_window();
        assert_eq!(chrome.last_normal_geometry(), Rect::new(100, 100, 800, 600));
    }

    #[test]
    fn test_toggle_updates_handle_visibility() {
        let mut chrome = chrome();
        assert!(chrome.handles().iter().all(|h| h.is_visible()));

        chrome.toggle_maximize();
        assert!(chrome.handles().iter().all(|h| !h.is_visible()));

        chrome.toggle_maximize();
        assert!(chrome.handles().iter().all(|h| h.is_visible()));
    }

    #[test]
    fn test_snap_halves_record_last_normal() {
        let mut chrome = chrome();

        chrome.snap_to_left_half();
        assert_eq!(chrome.host().geometry(), Rect::new(0, 0, 960, 1040));
        assert_eq!(chrome.last_normal_geometry(), Rect::new(0, 0, 960, 1040));

        chrome.snap_to_right_half();
        assert_eq!(chrome.host().geometry(), Rect::new(960, 0, 960, 1040));
        assert_eq!(chrome.last_normal_geometry(), Rect::new(960, 0, 960, 1040));
    }

    #[test]
    fn test_minimize_records_intent() {
        let mut chrome = chrome();
        chrome.activate(ChromeButton::Minimize);
        assert_eq!(
            chrome.minimize_intent(),
            MinimizeIntent::Minimizing { restore_maximized: false }
        );
        assert_eq!(chrome.host().state(), HostWindowState::Minimized);
    }

    #[test]
    fn test_close_hides_surfaces() {
        let mut chrome = chrome();
        chrome.activate(ChromeButton::Close);

        assert!(chrome.is_closed());
        assert!(chrome.host().is_closed());
        assert!(!chrome.shadow().is_visible());
        assert!(!chrome.indicator().is_visible());
        assert!(chrome.handles().iter().all(|h| !h.is_visible()));
    }
}
