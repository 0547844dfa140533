//! Integer pixel geometry
//!
//! The host window manager works in whole pixels, and snap halves rely on
//! floor division, so every coordinate here is an `i32`.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
