//! Frameless Window Chrome for the Whiteboard App
//!
//! This crate provides the custom window decoration of the whiteboard:
//! - Title bar with minimize, maximize/restore and close buttons
//! - Drag-to-move with a click/drag threshold
//! - Edge snapping (maximize, left half, right half) with a live preview
//! - Edge and corner resize handles with minimum-size clamping
//! - A drop shadow surface that follows the window
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Integer geometry types (`Point`, `Size`, `Rect`)
//! - [`host`]: The window manager contract and an in-memory implementation
//! - [`chrome`]: The controller state machine and title bar
//! - [`handle`]: Resize handles and the resize calculation
//! - [`input`]: Pointer events and gesture state
//! - [`snap`]: Snap zones and half-screen geometry
//! - [`view`]: Render snapshot for front ends
//!
//! ## Example
//!
//! ```rust
//! use whiteboard_chrome::{
//!     ChromeConfig, ChromeController, PointerEvent, Rect, ScreenInfo, SimulatedHost,
//! };
//!
//! let screen = ScreenInfo::new(Rect::new(0, 0, 1920, 1080), Rect::new(0, 0, 1920, 1040));
//! let config = ChromeConfig { start_maximized: false, ..Default::default() };
//! let mut chrome = ChromeController::new(SimulatedHost::new(screen), config).unwrap();
//! chrome.pump();
//!
//! chrome.handle_pointer_event(PointerEvent::press(300, 15));
//! chrome.handle_pointer_event(PointerEvent::moved(10, 500));
//! chrome.handle_pointer_event(PointerEvent::release(10, 500));
//! chrome.pump();
//! ```
//!
//! ## Design Principles
//!
//! 1. **Host Abstraction**: All window manager access goes through [`WindowHost`]
//! 2. **Explicit Event Loop**: Deferred work runs on [`ChromeController::pump`], never on a timer
//! 3. **Integer Geometry**: Pixel math is exact, so tests compare rectangles directly

pub mod chrome;
pub mod config;
pub mod error;
pub mod handle;
pub mod host;
pub mod indicator;
pub mod input;
pub mod math;
pub mod shadow;
pub mod snap;
pub mod style;
pub mod view;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use chrome::{
    ChromeButton, ChromeController, DeferredAction, MinimizeIntent, TitleBar, TitleBarHit,
};
pub use config::ChromeConfig;
pub use error::{ChromeError, Result};
pub use handle::{calculate_resize, HandlePosition, ResizeHandle};
pub use host::{
    CursorIcon, HostNotification, HostWindowState, ScreenInfo, SimulatedHost, WindowHost,
};
pub use indicator::VisualIndicator;
pub use input::{DragPhase, InputResult, MouseButton, PointerEvent, PointerKind};
pub use math::{Point, Rect, Size};
pub use shadow::ShadowWindow;
pub use snap::SnapZone;
pub use style::MaximizeGlyph;
pub use view::ChromeView;
