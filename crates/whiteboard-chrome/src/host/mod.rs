//! Window manager abstraction
//!
//! The chrome controller never talks to an OS directly. Everything it needs
//! from the windowing system goes through [`WindowHost`], which lets the
//! whole state machine run against [`SimulatedHost`] in tests.
//!
//! # Implementations
//!
//! - **SimulatedHost**: in-memory window manager (tests, wasm, replay tool)
//! - **Native hosts**: provided by the embedding application

mod sim;

pub use sim::SimulatedHost;

use serde::{Deserialize, Serialize};
use crate::math::{Point, Rect, Size};

/// Window classification as reported by the host
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostWindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

/// Pointer icons the chrome asks the host to display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CursorIcon {
    #[default]
    Arrow,
    /// Four-way move arrow
    SizeAll,
    /// Horizontal resize
    SizeHor,
    /// Vertical resize
    SizeVer,
    /// Diagonal resize, top-left to bottom-right
    SizeFDiag,
    /// Diagonal resize, top-right to bottom-left
    SizeBDiag,
}

/// Primary display geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenInfo {
    /// Full display rectangle
    pub geometry: Rect,
    /// Display rectangle minus OS-reserved areas such as the task bar
    pub available: Rect,
}

impl ScreenInfo {
    /// Create screen info from full and available rectangles
    #[inline]
    pub const fn new(geometry: Rect, available: Rect) -> Self {
        Self { geometry, available }
    }
}

/// Notifications the host queues for the chrome controller
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HostNotification {
    /// Normal / maximized / minimized classification changed
    StateChanged,
    /// Window size changed
    Resized,
    /// Window origin changed without a size change
    Moved,
}

/// Window manager primitives consumed by the chrome
///
/// Commands are assumed to always succeed; none of them report errors.
/// Notifications caused by a command are queued and delivered through
/// [`WindowHost::poll_notification`] on the next event loop iteration.
pub trait WindowHost {
    // === Geometry ===

    /// Current window rectangle in screen coordinates
    fn geometry(&self) -> Rect;

    /// Move and resize the window; the host enforces the minimum size
    fn set_geometry(&mut self, rect: Rect);

    /// Move the window without resizing it
    fn move_to(&mut self, position: Point);

    /// Minimum size constraint
    fn min_size(&self) -> Size;

    /// Set the minimum size constraint
    fn set_min_size(&mut self, size: Size);

    // === State ===

    /// Current classification
    fn state(&self) -> HostWindowState;

    /// Show the window in its normal (non-maximized) state
    fn show_normal(&mut self);

    /// Maximize the window to the available screen area
    fn show_maximized(&mut self);

    /// Minimize the window
    fn show_minimized(&mut self);

    /// Close the window
    fn close(&mut self);

    // === Display and pointer ===

    /// Primary display geometry
    fn primary_screen(&self) -> ScreenInfo;

    /// Set the displayed pointer icon
    fn set_cursor(&mut self, icon: CursorIcon);

    /// Move the physical pointer to a screen coordinate
    fn warp_pointer(&mut self, position: Point);

    /// Route all pointer input to this window until released
    fn capture_pointer(&mut self);

    /// Stop routing pointer input exclusively to this window
    fn release_pointer(&mut self);

    // === Event loop ===

    /// Ask for one "layout settled" callback on the next loop iteration
    fn request_deferred(&mut self);

    /// Next queued notification, if any
    fn poll_notification(&mut self) -> Option<HostNotification>;

    /// Check if the window is maximized
    #[inline]
    fn is_maximized(&self) -> bool {
        self.state() == HostWindowState::Maximized
    }

    /// Check if the window is minimized
    #[inline]
    fn is_minimized(&self) -> bool {
        self.state() == HostWindowState::Minimized
    }
}
