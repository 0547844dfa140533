//! A single resize handle

use tracing::trace;
use crate::host::{CursorIcon, WindowHost};
use crate::input::{InputResult, MouseButton, PointerEvent, PointerKind};
use crate::math::{Point, Rect};
use super::{calculate_resize, HandlePosition};

/// Captured at press, dropped at release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ResizeSession {
    /// Pointer position at press (global)
    anchor: Point,
    /// Window rectangle at press
    start: Rect,
}

/// Invisible strip or corner that resizes the owning window
#[derive(Clone, Debug)]
pub struct ResizeHandle {
    position: HandlePosition,
    /// Window-local rectangle
    rect: Rect,
    visible: bool,
    session: Option<ResizeSession>,
}

impl ResizeHandle {
    /// Create a hidden handle with an empty rectangle
    pub fn new(position: HandlePosition) -> Self {
        Self {
            position,
            rect: Rect::ZERO,
            visible: false,
            session: None,
        }
    }

    #[inline]
    pub fn position(&self) -> HandlePosition {
        self.position
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Check if a press is in progress
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.session.is_some()
    }

    /// Drop the press without a release, leaving the window where it is
    #[inline]
    pub fn cancel(&mut self) {
        self.session = None;
    }

    #[inline]
    pub fn cursor(&self) -> CursorIcon {
        self.position.cursor()
    }

    /// Check if a window-local point hits this handle
    #[inline]
    pub fn hit(&self, local: Point) -> bool {
        self.visible && self.rect.contains(local)
    }

    /// Handle a pointer event routed to this handle
    pub fn handle_pointer_event<H: WindowHost>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
    ) -> InputResult {
        match event.kind {
            PointerKind::Press => {
                if event.button != MouseButton::Left {
                    return InputResult::Unhandled;
                }
                self.session = Some(ResizeSession {
                    anchor: event.global,
                    start: host.geometry(),
                });
                InputResult::Handled
            }
            PointerKind::Move => {
                let session = match self.session {
                    Some(session) => session,
                    None => return InputResult::Unhandled,
                };
                let delta = event.global - session.anchor;
                let rect = calculate_resize(self.position, session.start, delta, host.min_size());
                trace!(handle = self.position.name(), ?rect, "resize");
                host.set_geometry(rect);
                InputResult::Handled
            }
            PointerKind::Release => {
                self.session = None;
                InputResult::Handled
            }
            PointerKind::DoubleClick => InputResult::Unhandled,
        }
    }
}
