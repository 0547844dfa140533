//! In-memory window manager
//!
//! Behaves like a typical desktop window manager for a single top-level
//! window, without any OS involved. Used by the test suite, the wasm binding
//! and the replay tool.

use std::collections::VecDeque;
use tracing::trace;
use crate::math::{Point, Rect, Size};
use super::{CursorIcon, HostNotification, HostWindowState, ScreenInfo, WindowHost};

/// Simulated host for a single frameless window
#[derive(Clone, Debug)]
pub struct SimulatedHost {
    /// Current window rectangle
    geometry: Rect,
    /// Host-side normal rectangle, used by `show_normal`
    normal_rect: Rect,
    /// Minimum size constraint
    min_size: Size,
    /// Current classification
    state: HostWindowState,
    /// Classification before the last minimize
    prev_state: Option<HostWindowState>,
    /// Primary display
    screen: ScreenInfo,
    /// Displayed pointer icon
    cursor: CursorIcon,
    /// Every pointer warp, oldest first
    warps: Vec<Point>,
    /// Whether this window holds pointer capture
    pointer_captured: bool,
    /// Number of deferred callbacks requested
    deferred_requests: usize,
    /// Notifications not yet delivered
    notifications: VecDeque<HostNotification>,
    /// Whether the window was closed
    closed: bool,
}

impl SimulatedHost {
    /// Create a host with a window at the origin of the available area
    pub fn new(screen: ScreenInfo) -> Self {
        let geometry = Rect::new(screen.available.x, screen.available.y, 640, 480);
        Self::with_geometry(screen, geometry)
    }

    /// Create a host with a specific starting window rectangle
    pub fn with_geometry(screen: ScreenInfo, geometry: Rect) -> Self {
        Self {
            geometry,
            normal_rect: geometry,
            min_size: Size::new(1, 1),
            state: HostWindowState::Normal,
            prev_state: None,
            screen,
            cursor: CursorIcon::Arrow,
            warps: Vec::new(),
            pointer_captured: false,
            deferred_requests: 0,
            notifications: VecDeque::new(),
            closed: false,
        }
    }

    /// Simulate the user re-activating a minimized window from the task bar
    ///
    /// The window comes back in the normal state; re-entering maximized is
    /// left to the chrome.
    pub fn restore_from_minimized(&mut self) {
        if self.state != HostWindowState::Minimized {
            return;
        }
        self.prev_state = None;
        self.state = HostWindowState::Normal;
        self.notifications.push_back(HostNotification::StateChanged);
        let normal = self.normal_rect;
        self.apply_geometry(normal);
    }

    /// Displayed pointer icon
    #[inline]
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// Every pointer warp so far, oldest first
    #[inline]
    pub fn warps(&self) -> &[Point] {
        &self.warps
    }

    /// Whether this window currently holds pointer capture
    #[inline]
    pub fn is_pointer_captured(&self) -> bool {
        self.pointer_captured
    }

    /// Number of deferred callbacks requested so far
    #[inline]
    pub fn deferred_requests(&self) -> usize {
        self.deferred_requests
    }

    /// Number of notifications waiting to be delivered
    #[inline]
    pub fn pending_notifications(&self) -> usize {
        self.notifications.len()
    }

    /// Classification the window had before the last minimize
    #[inline]
    pub fn state_before_minimize(&self) -> Option<HostWindowState> {
        self.prev_state
    }

    /// Whether the window was closed
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Change geometry and queue the matching notifications
    fn apply_geometry(&mut self, rect: Rect) {
        let old = self.geometry;
        self.geometry = rect;
        if self.state == HostWindowState::Normal {
            self.normal_rect = rect;
        }

        if old.size() != rect.size() {
            self.notifications.push_back(HostNotification::Resized);
        } else if old.position() != rect.position() {
            self.notifications.push_back(HostNotification::Moved);
        }
    }
}

impl WindowHost for SimulatedHost {
    fn geometry(&self) -> Rect {
        self.geometry
    }

    fn set_geometry(&mut self, rect: Rect) {
        let size = rect.size().max(self.min_size);
        trace!(?rect, ?size, "host set_geometry");
        self.apply_geometry(Rect::from_pos_size(rect.position(), size));
    }

    fn move_to(&mut self, position: Point) {
        let rect = Rect::from_pos_size(position, self.geometry.size());
        self.apply_geometry(rect);
    }

    fn min_size(&self) -> Size {
        self.min_size
    }

    fn set_min_size(&mut self, size: Size) {
        self.min_size = size;
        let grown = self.geometry.size().max(size);
        if grown != self.geometry.size() {
            self.apply_geometry(Rect::from_pos_size(self.geometry.position(), grown));
        }
    }

    fn state(&self) -> HostWindowState {
        self.state
    }

    fn show_normal(&mut self) {
        if self.state == HostWindowState::Normal {
            return;
        }
        self.state = HostWindowState::Normal;
        self.prev_state = None;
        self.notifications.push_back(HostNotification::StateChanged);
        let normal = self.normal_rect;
        self.apply_geometry(normal);
    }

    fn show_maximized(&mut self) {
        if self.state == HostWindowState::Maximized {
            return;
        }
        if self.state == HostWindowState::Normal {
            self.normal_rect = self.geometry;
        }
        self.state = HostWindowState::Maximized;
        self.prev_state = None;
        self.notifications.push_back(HostNotification::StateChanged);
        let available = self.screen.available;
        self.apply_geometry(available);
    }

    fn show_minimized(&mut self) {
        if self.state == HostWindowState::Minimized {
            return;
        }
        self.prev_state = Some(self.state);
        self.state = HostWindowState::Minimized;
        self.notifications.push_back(HostNotification::StateChanged);
    }

    fn close(&mut self) {
        self.closed = true;
        self.pointer_captured = false;
    }

    fn primary_screen(&self) -> ScreenInfo {
        self.screen
    }

    fn set_cursor(&mut self, icon: CursorIcon) {
        self.cursor = icon;
    }

    fn warp_pointer(&mut self, position: Point) {
        self.warps.push(position);
    }

    fn capture_pointer(&mut self) {
        self.pointer_captured = true;
    }

    fn release_pointer(&mut self) {
        self.pointer_captured = false;
    }

    fn request_deferred(&mut self) {
        self.deferred_requests += 1;
    }

    fn poll_notification(&mut self) -> Option<HostNotification> {
        self.notifications.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenInfo {
        ScreenInfo::new(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040))
    }

    fn drain(host: &mut SimulatedHost) -> Vec<HostNotification> {
        std::iter::from_fn(|| host.poll_notification()).collect()
    }

    #[test]
    fn test_set_geometry_enforces_min_size() {
        let mut host = SimulatedHost::new(screen());
        host.set_min_size(Size::new(400, 300));
        host.set_geometry(Rect::new(10, 10, 100, 100));
        assert_eq!(host.geometry(), Rect::new(10, 10, 400, 300));
    }

    #[test]
    fn test_maximize_and_show_normal_round_trip() {
        let mut host = SimulatedHost::with_geometry(screen(), Rect::new(100, 100, 800, 600));

        host.show_maximized();
        assert!(host.is_maximized());
        assert_eq!(host.geometry(), Rect::new(0, 0, 1920, 1040));

        host.show_normal();
        assert_eq!(host.state(), HostWindowState::Normal);
        assert_eq!(host.geometry(), Rect::new(100, 100, 800, 600));
    }

    #[test]
    fn test_restore_from_minimized_does_not_remaximize() {
        let mut host = SimulatedHost::with_geometry(screen(), Rect::new(100, 100, 800, 600));
        host.show_maximized();
        host.show_minimized();
        assert_eq!(host.state_before_minimize(), Some(HostWindowState::Maximized));

        host.restore_from_minimized();
        assert_eq!(host.state(), HostWindowState::Normal);
        assert_eq!(host.geometry(), Rect::new(100, 100, 800, 600));
    }

    #[test]
    fn test_notifications_are_queued_in_order() {
        let mut host = SimulatedHost::with_geometry(screen(), Rect::new(100, 100, 800, 600));
        host.move_to(Point::new(120, 100));
        host.show_maximized();

        assert_eq!(
            drain(&mut host),
            vec![
                HostNotification::Moved,
                HostNotification::StateChanged,
                HostNotification::Resized,
            ]
        );
        assert_eq!(host.pending_notifications(), 0);
    }

    #[test]
    fn test_close_drops_pointer_capture() {
        let mut host = SimulatedHost::new(screen());
        host.capture_pointer();
        assert!(host.is_pointer_captured());

        host.close();
        assert!(host.is_closed());
        assert!(!host.is_pointer_captured());
    }

    #[test]
    fn test_move_to_same_position_is_silent() {
        let mut host = SimulatedHost::with_geometry(screen(), Rect::new(100, 100, 800, 600));
        host.move_to(Point::new(100, 100));
        assert!(host.poll_notification().is_none());
    }
}
