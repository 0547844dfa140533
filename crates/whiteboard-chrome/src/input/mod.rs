//! Input routing module
//!
//! Pointer event types and the gesture state the chrome controller tracks
//! between a press and its release.

mod drag;
mod event;
mod result;
mod router;

pub use drag::{DragPhase, DragSession};
pub use event::{MouseButton, PointerEvent, PointerKind};
pub use result::InputResult;
pub use router::{ActiveGesture, InputRouter};
