//! Host notification handling, handle layout and shadow tracking

use tracing::{debug, trace};
use crate::handle::handle_rect;
use crate::host::{HostNotification, HostWindowState, WindowHost};
use crate::style::MaximizeGlyph;
use super::{ChromeController, StateChangeAction};

impl<H: WindowHost> ChromeController<H> {
    /// Deliver every queued host notification
    pub fn process_notifications(&mut self) {
        while let Some(notification) = self.host.poll_notification() {
            trace!(?notification, "host notification");
            match notification {
                HostNotification::StateChanged => self.handle_window_state_changed(),
                HostNotification::Resized => self.handle_resized(),
                HostNotification::Moved => self.handle_moved(),
            }
        }
    }

    /// Normal / maximized / minimized classification changed
    pub fn handle_window_state_changed(&mut self) {
        let minimized = self.host.is_minimized();
        match self.minimize_intent.on_state_changed(minimized) {
            StateChangeAction::Remaximize => {
                debug!("re-entering maximized after minimize");
                self.host.show_maximized();
                self.title_bar.set_glyph(MaximizeGlyph::Restore);
            }
            StateChangeAction::SuppressGlyph => {}
            StateChangeAction::UpdateGlyph => {
                let glyph = MaximizeGlyph::for_maximized(self.host.is_maximized());
                self.title_bar.set_glyph(glyph);
            }
        }
        self.refresh_handle_visibility();
        self.sync_shadow();
    }

    /// Window size changed
    pub fn handle_resized(&mut self) {
        let geometry = self.host.geometry();
        self.title_bar.set_width(geometry.width);
        self.layout_handles();
        if !self.host.is_maximized() && !self.host.is_minimized() {
            self.last_normal_geometry = geometry;
        }
        self.sync_shadow();
    }

    /// Window origin changed
    pub fn handle_moved(&mut self) {
        self.sync_shadow();
    }

    /// Recompute every handle rectangle for the current window size
    pub(crate) fn layout_handles(&mut self) {
        let size = self.host.geometry().size();
        let thickness = self.config.edge_handle_thickness;
        let corner = self.config.corner_handle_size;
        for handle in &mut self.handles {
            handle.set_rect(handle_rect(handle.position(), size, thickness, corner));
        }
    }

    /// Handles are hidden while maximized or closed
    pub(crate) fn refresh_handle_visibility(&mut self) {
        let visible = !self.closed && !self.host.is_maximized();
        for handle in &mut self.handles {
            handle.set_visible(visible);
        }
    }

    /// Keep the shadow around the window; only shown in the normal state
    pub(crate) fn sync_shadow(&mut self) {
        self.shadow.track(self.host.geometry());
        let visible = !self.closed && self.host.state() == HostWindowState::Normal;
        self.shadow.set_visible(visible);
    }
}

#[cfg(test)]
mod tests {
    use crate::chrome::{ChromeController, MinimizeIntent};
    use crate::config::ChromeConfig;
    use crate::handle::HandlePosition;
    use crate::host::{HostWindowState, ScreenInfo, SimulatedHost, WindowHost};
    use crate::math::{Point, Rect};
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
    fn test_resize_relayouts_handles() {
        let mut chrome = chrome();
        chrome.host_mut().set_geometry(Rect::new(100, 100, 1000, 700));
        chrome.pump();

        let right = chrome.handle(HandlePosition::Right).unwrap();
        assert_eq!(right.rect(), Rect::new(994, 0, 6, 700));
        let corner = chrome.handle(HandlePosition::BottomRight).unwrap();
        assert_eq!(corner.rect(), Rect::new(990, 690, 10, 10));
        assert_eq!(chrome.title_bar().rect().width, 1000);
        assert_eq!(chrome.last_normal_geometry(), Rect::new(100, 100, 1000, 700));
    }

    #[test]
    fn test_maximized_resize_keeps_last_normal() {
        let mut chrome = chrome();
        chrome.host_mut().show_maximized();
        chrome.pump();

        assert_eq!(chrome.last_normal_geometry(), Rect::new(100, 100, 800, 600));
        assert_eq!(chrome.maximize_glyph(), MaximizeGlyph::Restore);
        assert!(chrome.handles().iter().all(|h| !h.is_visible()));
    }

    #[test]
    fn test_maximized_minimize_round_trip() {
        let mut chrome = chrome();
        chrome.maximize_window();
        chrome.pump();

        chrome.minimize_window();
        chrome.pump();
        assert_eq!(chrome.minimize_intent(), MinimizeIntent::PendingRestoreToMaximized);
        assert_eq!(chrome.maximize_glyph(), MaximizeGlyph::Restore);

        chrome.host_mut().restore_from_minimized();
        chrome.pump();
        assert_eq!(chrome.host().state(), HostWindowState::Maximized);
        assert_eq!(chrome.host().geometry(), Rect::new(0, 0, 1920, 1040));
        assert_eq!(chrome.maximize_glyph(), MaximizeGlyph::Restore);
        assert_eq!(chrome.minimize_intent(), MinimizeIntent::None);
        assert_eq!(chrome.last_normal_geometry(), Rect::new(100, 100, 800, 600));
    }

    #[test]
    fn test_shadow_follows_window() {
        let mut chrome = chrome();
        assert!(chrome.shadow().is_visible());
        assert_eq!(chrome.shadow().bounds(), Rect::new(60, 60, 880, 680));

        chrome.host_mut().move_to(Point::new(200, 150));
        chrome.pump();
        assert_eq!(chrome.shadow().bounds(), Rect::new(160, 110, 880, 680));
        assert_eq!(chrome.shadow().inner_rect(), Rect::new(200, 150, 800, 600));

        chrome.host_mut().show_maximized();
        chrome.pump();
        assert!(!chrome.shadow().is_visible());
    }
}
