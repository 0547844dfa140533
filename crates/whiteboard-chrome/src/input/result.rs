//! Input result type

use serde::Serialize;
use crate::math::Point;

/// Result of input handling
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was consumed by the chrome
    Handled,
    /// Input was not handled (pass through to default handling)
    Unhandled,
    /// Input belongs to the content region
    Forward {
        /// Position in window-local coordinates
        local: Point,
    },
}

impl InputResult {
    /// Check if input was consumed by the chrome
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled)
    }

    /// Check if input should be forwarded to the content region
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_predicates() {
        assert!(InputResult::Handled.is_handled());
        assert!(!InputResult::Unhandled.is_handled());
        let fwd = InputResult::Forward { local: Point::new(3, 40) };
        assert!(fwd.is_forward());
        assert!(!fwd.is_handled());
    }

    #[test]
    fn test_result_serializes_tagged() {
        let result = InputResult::Forward { local: Point::new(3, 40) };
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"type":"forward","local":{"x":3,"y":40}}"#);
    }
}
