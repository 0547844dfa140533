//! Pointer event dispatch
//!
//! Press routing priority: visible resize handles (corners before edges),
//! title bar buttons, caption, content. Everything after the press goes to
//! the gesture the press started.

use tracing::{debug, trace};
use crate::handle::HandlePosition;
use crate::host::{CursorIcon, WindowHost};
use crate::input::{ActiveGesture, DragPhase, InputResult, MouseButton, PointerEvent, PointerKind};
use crate::math::Point;
use crate::snap::{clamp_pointer, detect_zone, indicator_rect, SnapZone};
use super::{ChromeController, DeferredAction, TitleBarHit};

impl<H: WindowHost> ChromeController<H> {
    /// Handle a pointer event in global coordinates
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> InputResult {
        if self.closed {
            return InputResult::Unhandled;
        }
        match event.kind {
            PointerKind::Press => self.on_press(&event),
            PointerKind::Move => self.on_move(&event),
            PointerKind::Release => self.on_release(&event),
            PointerKind::DoubleClick => self.on_double_click(&event),
        }
    }

    /// Index of the topmost visible handle under a window-local point
    fn handle_at(&self, local: Point) -> Option<usize> {
        let hit = |corners: bool| {
            self.handles
                .iter()
                .rposition(|h| h.position().is_corner() == corners && h.hit(local))
        };
        hit(true).or_else(|| hit(false))
    }

    fn handle_index(&self, position: HandlePosition) -> Option<usize> {
        self.handles.iter().position(|h| h.position() == position)
    }

    fn local(&self, event: &PointerEvent) -> Point {
        event.local(self.host.geometry().position())
    }

    // =========================================================================
    // Press
    // =========================================================================

    fn on_press(&mut self, event: &PointerEvent) -> InputResult {
        // A press while a gesture is live means its release was lost
        if self.input.is_active() {
            self.abandon_gesture();
        }

        let local = self.local(event);
        if event.button != MouseButton::Left {
            return self.forward_if_content(local);
        }

        if let Some(index) = self.handle_at(local) {
            let position = self.handles[index].position();
            let result = self.handles[index].handle_pointer_event(event, &mut self.host);
            if result.is_handled() {
                self.input.start_resize(position);
                self.host.capture_pointer();
                self.cursor = position.cursor();
                self.host.set_cursor(self.cursor);
                trace!(handle = position.name(), "resize started");
            }
            return result;
        }

        match self.title_bar.hit_test(local) {
            Some(TitleBarHit::Button(button)) => {
                self.input.start_button(button);
                self.host.capture_pointer();
                InputResult::Handled
            }
            Some(TitleBarHit::ClusterGap) => InputResult::Handled,
            Some(TitleBarHit::Caption) => {
                self.input.start_drag(event.global);
                self.host.capture_pointer();
                trace!(start = ?event.global, "drag candidate");
                InputResult::Handled
            }
            None => InputResult::Forward { local },
        }
    }

    /// End the live gesture without committing it
    ///
    /// The window keeps whatever geometry the gesture produced so far; no
    /// snap is applied and no button fires.
    fn abandon_gesture(&mut self) {
        let gesture = match self.input.end() {
            Some(gesture) => gesture,
            None => return,
        };
        if let ActiveGesture::Resize(position) = gesture {
            if let Some(index) = self.handle_index(position) {
                self.handles[index].cancel();
            }
        }
        self.indicator.hide();
        self.cursor = CursorIcon::Arrow;
        self.host.set_cursor(CursorIcon::Arrow);
        self.host.release_pointer();
        debug!(?gesture, "gesture abandoned without release");
    }

    fn forward_if_content(&self, local: Point) -> InputResult {
        if self.content_rect().contains(local) {
            InputResult::Forward { local }
        } else {
            InputResult::Unhandled
        }
    }

    // =========================================================================
    // Move
    // =========================================================================

    fn on_move(&mut self, event: &PointerEvent) -> InputResult {
        match self.input.active().copied() {
            Some(ActiveGesture::Drag(_)) => self.drag_move(event.global),
            Some(ActiveGesture::Resize(position)) => match self.handle_index(position) {
                Some(index) => self.handles[index].handle_pointer_event(event, &mut self.host),
                None => InputResult::Unhandled,
            },
            Some(ActiveGesture::Button(_)) => InputResult::Handled,
            None => {
                let local = self.local(event);
                self.update_hover_cursor(local);
                InputResult::Forward { local }
            }
        }
    }

    fn update_hover_cursor(&mut self, local: Point) {
        let cursor = self
            .handle_at(local)
            .map_or(CursorIcon::Arrow, |index| self.handles[index].cursor());
        if self.cursor != cursor {
            self.cursor = cursor;
            self.host.set_cursor(cursor);
        }
    }

    fn drag_move(&mut self, pointer: Point) -> InputResult {
        let threshold = self.config.drag_threshold;
        let maximized = self.host.is_maximized();
        let origin = self.host.geometry().position();

        let session = match self.input.drag_mut() {
            Some(session) => session,
            None => return InputResult::Unhandled,
        };

        let phase = session.phase;
        match phase {
            DragPhase::PressCandidate => {
                if !session.exceeds_threshold(pointer, threshold) {
                    return InputResult::Handled;
                }
                if maximized {
                    session.begin_after_restore(pointer);
                    debug!(?pointer, "drag out of maximized");
                    self.restore_window();
                    self.refresh_handle_visibility();
                    self.schedule(DeferredAction::StartPendingDrag);
                    self.update_snap_feedback(pointer);
                    return InputResult::Handled;
                }
                session.begin(pointer, origin);
                debug!(?pointer, "drag started");
            }
            DragPhase::RestorePending => {
                self.update_snap_feedback(pointer);
                return InputResult::Handled;
            }
            DragPhase::Dragging => {}
        }

        let screen = self.host.primary_screen().geometry;
        let clamped = clamp_pointer(pointer, screen, self.config.vertical_clamp_fraction);
        if clamped != pointer {
            self.host.warp_pointer(clamped);
        }
        if let Some(target) = self.input.drag().and_then(|s| s.window_origin_for(clamped)) {
            self.host.move_to(target);
        }

        self.update_snap_feedback(pointer);
        InputResult::Handled
    }

    /// Cursor and indicator preview for the zone under the raw pointer
    fn update_snap_feedback(&mut self, pointer: Point) {
        let screen = self.host.primary_screen().geometry;
        let cursor = match detect_zone(pointer, screen, self.config.snap_zone) {
            Some(zone) => {
                let origin = self.host.geometry().position();
                self.indicator.show_at(indicator_rect(zone, screen), origin);
                zone.cursor()
            }
            None => {
                self.indicator.hide();
                CursorIcon::Arrow
            }
        };
        self.cursor = cursor;
        self.host.set_cursor(cursor);
    }

    // =========================================================================
    // Release and double-click
    // =========================================================================

    fn on_release(&mut self, event: &PointerEvent) -> InputResult {
        let gesture = self.input.end();
        if gesture.is_some() {
            self.host.release_pointer();
        }
        match gesture {
            Some(ActiveGesture::Drag(session)) => {
                if session.is_dragging() {
                    self.finish_drag(event.global);
                }
                InputResult::Handled
            }
            Some(ActiveGesture::Resize(position)) => match self.handle_index(position) {
                Some(index) => self.handles[index].handle_pointer_event(event, &mut self.host),
                None => InputResult::Handled,
            },
            Some(ActiveGesture::Button(button)) => {
                let local = self.local(event);
                if self.title_bar.hit_test(local) == Some(TitleBarHit::Button(button)) {
                    debug!(?button, "button activated");
                    self.activate(button);
                }
                InputResult::Handled
            }
            None => {
                let local = self.local(event);
                self.forward_if_content(local)
            }
        }
    }

    fn finish_drag(&mut self, pointer: Point) {
        self.indicator.hide();
        self.cursor = CursorIcon::Arrow;
        self.host.set_cursor(CursorIcon::Arrow);

        let screen = self.host.primary_screen().geometry;
        match detect_zone(pointer, screen, self.config.snap_zone) {
            Some(SnapZone::Top) => {
                self.maximize_window();
                self.refresh_handle_visibility();
            }
            Some(SnapZone::Left) => self.snap_to_left_half(),
            Some(SnapZone::Right) => self.snap_to_right_half(),
            None => {}
        }
        debug!(?pointer, "drag finished");
    }

    fn on_double_click(&mut self, event: &PointerEvent) -> InputResult {
        if self.input.is_active() {
            return InputResult::Handled;
        }
        let local = self.local(event);
        if self.handle_at(local).is_some() {
            return InputResult::Unhandled;
        }
        match self.title_bar.hit_test(local) {
            Some(TitleBarHit::Caption) => {
                if event.button == MouseButton::Left {
                    self.toggle_maximize();
                }
                InputResult::Handled
            }
            Some(_) => InputResult::Handled,
            None => InputResult::Forward { local },
        }
    }
}
