//! Input router state machine

use crate::chrome::ChromeButton;
use crate::handle::HandlePosition;
use crate::math::Point;
use super::DragSession;

/// The one gesture that currently owns the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveGesture {
    /// Title bar press or drag
    Drag(DragSession),
    /// Resize handle press
    Resize(HandlePosition),
    /// Title bar button press, fires on release over the same button
    Button(ChromeButton),
}

/// Input router holding at most one active gesture
#[derive(Clone, Debug, Default)]
pub struct InputRouter {
    active: Option<ActiveGesture>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Current gesture
    #[inline]
    pub fn active(&self) -> Option<&ActiveGesture> {
        self.active.as_ref()
    }

    /// Check if any gesture owns the pointer
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current drag session, if the active gesture is a title bar drag
    pub fn drag(&self) -> Option<&DragSession> {
        match &self.active {
            Some(ActiveGesture::Drag(session)) => Some(session),
            _ => None,
        }
    }

    /// Mutable drag session
    pub fn drag_mut(&mut self) -> Option<&mut DragSession> {
        match &mut self.active {
            Some(ActiveGesture::Drag(session)) => Some(session),
            _ => None,
        }
    }

    /// Check if a title bar press has turned into a drag
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag().is_some_and(DragSession::is_dragging)
    }

    /// Start a title bar drag candidate
    pub fn start_drag(&mut self, start_global: Point) {
        self.active = Some(ActiveGesture::Drag(DragSession::new(start_global)));
    }

    /// Start a handle resize
    pub fn start_resize(&mut self, position: HandlePosition) {
        self.active = Some(ActiveGesture::Resize(position));
    }

    /// Arm a title bar button
    pub fn start_button(&mut self, button: ChromeButton) {
        self.active = Some(ActiveGesture::Button(button));
    }

    /// End the current gesture, returning it
    pub fn end(&mut self) -> Option<ActiveGesture> {
        self.active.take()
    }
}
