//! Window chrome controller
//!
//! This module is split into focused submodules:
//! - `pointer`: Pointer event dispatch, title bar drag and edge snapping
//! - `actions`: Maximize, restore, minimize, close and snap actions
//! - `notify`: Host notifications, handle layout and shadow tracking
//! - `title_bar`: Title bar geometry and hit testing
//! - `intent`: Minimize bookkeeping

mod actions;
mod intent;
mod notify;
mod pointer;
mod title_bar;

pub use intent::{MinimizeIntent, StateChangeAction};
pub use title_bar::{ChromeButton, TitleBar, TitleBarHit};

use std::collections::VecDeque;
use tracing::debug;
use crate::config::ChromeConfig;
use crate::error::Result;
use crate::handle::{HandlePosition, ResizeHandle};
use crate::host::{CursorIcon, WindowHost};
use crate::indicator::VisualIndicator;
use crate::input::InputRouter;
use crate::math::{Point, Rect};
use crate::shadow::ShadowWindow;
use crate::style::MaximizeGlyph;

/// Work scheduled for the next "layout settled" signal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeferredAction {
    /// Initial maximize after the first layout
    ShowMaximized,
    /// Anchor the pointer after dragging out of maximized
    StartPendingDrag,
}

/// Frameless window chrome driving a host window
///
/// Owns the title bar, the eight resize handles, the snap indicator and the
/// shadow surface, and turns pointer and window-state events into window
/// geometry changes:
/// - Title bar drag with a click/drag threshold
/// - Edge snapping (maximize, left half, right half) with a live preview
/// - Maximize / restore / minimize, including maximized-minimize round trips
/// - Resize handle routing and layout
pub struct ChromeController<H: WindowHost> {
    pub(crate) host: H,
    pub(crate) config: ChromeConfig,
    pub(crate) title_bar: TitleBar,
    /// In `HandlePosition::ALL` order; later handles sit on top
    pub(crate) handles: Vec<ResizeHandle>,
    pub(crate) indicator: VisualIndicator,
    pub(crate) shadow: ShadowWindow,
    /// Where to return to when leaving maximized or a snap
    pub(crate) last_normal_geometry: Rect,
    pub(crate) minimize_intent: MinimizeIntent,
    pub(crate) input: InputRouter,
    pub(crate) deferred: VecDeque<DeferredAction>,
    pub(crate) closed: bool,
    /// Last pointer icon requested from the host
    pub(crate) cursor: CursorIcon,
}

impl<H: WindowHost> ChromeController<H> {
    /// Take over a host window and lay out the chrome
    ///
    /// The window is sized to the configured fraction of the available
    /// screen area and shown normal. With `start_maximized` the maximize is
    /// deferred until the first layout has settled (see [`pump`](Self::pump)).
    pub fn new(mut host: H, config: ChromeConfig) -> Result<Self> {
        config.validate()?;

        host.set_min_size(config.min_size);
        let available = host.primary_screen().available;
        let size = config.default_size(available.size());
        let origin = host.geometry().position();
        host.set_geometry(Rect::from_pos_size(origin, size));
        host.show_normal();

        let geometry = host.geometry();
        let mut chrome = Self {
            title_bar: TitleBar::new(&config, geometry.width),
            handles: HandlePosition::ALL.iter().map(|p| ResizeHandle::new(*p)).collect(),
            indicator: VisualIndicator::new(config.indicator),
            shadow: ShadowWindow::new(config.shadow),
            last_normal_geometry: geometry,
            minimize_intent: MinimizeIntent::None,
            input: InputRouter::new(),
            deferred: VecDeque::new(),
            closed: false,
            cursor: CursorIcon::Arrow,
            host,
            config,
        };

        chrome.layout_handles();
        chrome.refresh_handle_visibility();
        chrome.sync_shadow();

        if chrome.config.start_maximized {
            chrome.schedule(DeferredAction::ShowMaximized);
            chrome.title_bar.set_glyph(MaximizeGlyph::Restore);
        }

        debug!(?geometry, title = chrome.title_bar.title(), "chrome created");
        Ok(chrome)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable host access, for embedders simulating OS-side changes
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[inline]
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    #[inline]
    pub fn title(&self) -> &str {
        self.title_bar.title()
    }

    #[inline]
    pub fn title_bar(&self) -> &TitleBar {
        &self.title_bar
    }

    #[inline]
    pub fn maximize_glyph(&self) -> MaximizeGlyph {
        self.title_bar.glyph()
    }

    /// Handles in stacking order
    #[inline]
    pub fn handles(&self) -> &[ResizeHandle] {
        &self.handles
    }

    pub fn handle(&self, position: HandlePosition) -> Option<&ResizeHandle> {
        self.handles.iter().find(|h| h.position() == position)
    }

    #[inline]
    pub fn indicator(&self) -> &VisualIndicator {
        &self.indicator
    }

    #[inline]
    pub fn shadow(&self) -> &ShadowWindow {
        &self.shadow
    }

    #[inline]
    pub fn last_normal_geometry(&self) -> Rect {
        self.last_normal_geometry
    }

    #[inline]
    pub fn minimize_intent(&self) -> MinimizeIntent {
        self.minimize_intent
    }

    /// Input router (active gesture)
    #[inline]
    pub fn input(&self) -> &InputRouter {
        &self.input
    }

    /// Check if a title bar press has turned into a drag
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    #[inline]
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Deferred actions waiting for the next layout-settled signal
    pub fn pending_deferred(&self) -> impl Iterator<Item = &DeferredAction> {
        self.deferred.iter()
    }

    /// Window-local rectangle left for the canvas, below the title bar
    pub fn content_rect(&self) -> Rect {
        let size = self.host.geometry().size();
        let top = self.title_bar.height();
        Rect::new(0, top, size.width, (size.height - top).max(0))
    }

    // =========================================================================
    // Event loop
    // =========================================================================

    /// Run one event loop iteration
    ///
    /// Delivers queued host notifications, then runs deferred actions (the
    /// restore they wait for has been applied by then), then delivers the
    /// notifications those actions caused.
    pub fn pump(&mut self) {
        self.process_notifications();
        self.run_deferred();
        self.process_notifications();
    }

    /// Layout-settled signal: run every deferred action queued so far
    pub fn run_deferred(&mut self) {
        let actions: Vec<DeferredAction> = self.deferred.drain(..).collect();
        for action in actions {
            match action {
                DeferredAction::ShowMaximized => {
                    if !self.closed {
                        debug!("deferred maximize");
                        self.host.show_maximized();
                    }
                }
                DeferredAction::StartPendingDrag => self.start_pending_drag(),
            }
        }
    }

    /// Queue a deferred action and ask the host for a wake-up
    pub(crate) fn schedule(&mut self, action: DeferredAction) {
        self.deferred.push_back(action);
        self.host.request_deferred();
    }

    /// Second step of dragging out of maximized: put the pointer at the
    /// horizontal center of the restored window, near its top
    fn start_pending_drag(&mut self) {
        let geometry = self.host.geometry();
        let offset = Point::new(geometry.width / 2, self.config.restore_grab_offset_y);

        let session = match self.input.drag_mut() {
            Some(session) => session,
            None => return,
        };
        let pointer = match session.take_pending() {
            Some(pointer) => pointer,
            None => return,
        };

        session.anchor(offset);
        debug!(?pointer, ?offset, "drag anchored after restore");
        self.host.move_to(pointer - offset);
    }
}
