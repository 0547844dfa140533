//! Title bar drag session

use crate::math::Point;

/// Progress of a title bar drag
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    /// Pressed, but the pointer has not yet travelled past the threshold
    #[default]
    PressCandidate,
    /// Threshold crossed on a maximized window; waiting for the restore to
    /// settle before anchoring the pointer
    RestorePending,
    /// Window follows the pointer
    Dragging,
}

/// State kept between a qualifying title bar press and its release
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    /// Pointer position at press (global)
    pub start_global: Point,
    /// Current phase
    pub phase: DragPhase,
    /// Offset from window origin to pointer, fixed once dragging starts
    pub drag_position: Option<Point>,
    /// Pointer position recorded when dragging out of maximized
    pub pending_drag: Option<Point>,
}

impl DragSession {
    /// Start a new candidate session at the press position
    pub fn new(start_global: Point) -> Self {
        Self {
            start_global,
            phase: DragPhase::PressCandidate,
            drag_position: None,
            pending_drag: None,
        }
    }

    /// Check if the press has been classified as a drag
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase != DragPhase::PressCandidate
    }

    /// Check if the pointer travelled strictly further than `threshold`
    #[inline]
    pub fn exceeds_threshold(&self, pointer: Point, threshold: i32) -> bool {
        pointer.manhattan_distance(self.start_global) > threshold
    }

    /// Start dragging a normal window, anchoring the current pointer offset
    pub fn begin(&mut self, pointer: Point, window_origin: Point) {
        self.phase = DragPhase::Dragging;
        self.drag_position = Some(pointer - window_origin);
    }

    /// Start dragging a maximized window; anchoring waits for the restore
    pub fn begin_after_restore(&mut self, pointer: Point) {
        self.phase = DragPhase::RestorePending;
        self.pending_drag = Some(pointer);
    }

    /// Take the pointer recorded by [`begin_after_restore`](Self::begin_after_restore)
    #[inline]
    pub fn take_pending(&mut self) -> Option<Point> {
        self.pending_drag.take()
    }

    /// Finish the restore protocol with a fixed pointer offset
    pub fn anchor(&mut self, offset: Point) {
        self.phase = DragPhase::Dragging;
        self.drag_position = Some(offset);
    }

    /// Window origin that keeps the anchored offset under `pointer`
    #[inline]
    pub fn window_origin_for(&self, pointer: Point) -> Option<Point> {
        self.drag_position.map(|offset| pointer - offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_candidate() {
        let session = DragSession::new(Point::new(500, 50));
        assert_eq!(session.phase, DragPhase::PressCandidate);
        assert!(!session.is_dragging());
        assert!(session.drag_position.is_none());
        assert!(session.pending_drag.is_none());
    }

    #[test]
    fn test_threshold_is_strict() {
        let session = DragSession::new(Point::new(500, 50));
        assert!(!session.exceeds_threshold(Point::new(503, 52), 5));
        assert!(!session.exceeds_threshold(Point::new(495, 50), 5));
        assert!(session.exceeds_threshold(Point::new(503, 53), 5));
    }

    #[test]
    fn test_begin_anchors_offset() {
        let mut session = DragSession::new(Point::new(500, 50));
        session.begin(Point::new(506, 50), Point::new(100, 30));

        assert!(session.is_dragging());
        assert_eq!(session.drag_position, Some(Point::new(406, 20)));
        assert_eq!(
            session.window_origin_for(Point::new(700, 300)),
            Some(Point::new(294, 280))
        );
    }

    #[test]
    fn test_restore_protocol() {
        let mut session = DragSession::new(Point::new(900, 10));
        session.begin_after_restore(Point::new(910, 10));

        assert_eq!(session.phase, DragPhase::RestorePending);
        assert!(session.is_dragging());
        assert!(session.window_origin_for(Point::new(920, 10)).is_none());

        assert_eq!(session.take_pending(), Some(Point::new(910, 10)));
        assert_eq!(session.take_pending(), None);

        session.anchor(Point::new(400, 10));
        assert_eq!(session.phase, DragPhase::Dragging);
    }
}
