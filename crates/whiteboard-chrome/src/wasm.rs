//! WASM exports for the window chrome
//!
//! Runs the chrome against the simulated host so a browser front end can
//! draw it from `view_json()` and feed pointer events back in.

use wasm_bindgen::prelude::*;

use crate::chrome::ChromeController;
use crate::config::ChromeConfig;
use crate::host::{ScreenInfo, SimulatedHost};
use crate::input::{InputResult, PointerEvent};
use crate::math::Rect;

/// Chrome session for WASM - wraps ChromeController with a JS-friendly API
#[wasm_bindgen]
pub struct ChromeSession {
    chrome: ChromeController<SimulatedHost>,
}

#[wasm_bindgen]
impl ChromeSession {
    /// Create a session for a screen; `config_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(
        screen_width: i32,
        screen_height: i32,
        available_width: i32,
        available_height: i32,
        config_json: &str,
    ) -> Result<ChromeSession, JsValue> {
        let config = if config_json.trim().is_empty() {
            ChromeConfig::default()
        } else {
            ChromeConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let screen = ScreenInfo::new(
            Rect::new(0, 0, screen_width, screen_height),
            Rect::new(0, 0, available_width, available_height),
        );
        let chrome = ChromeController::new(SimulatedHost::new(screen), config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { chrome })
    }

    // =========================================================================
    // Pointer input
    // =========================================================================

    /// Returns the input result as JSON
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: i32, y: i32) -> String {
        self.dispatch(PointerEvent::press(x, y))
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: i32, y: i32) -> String {
        self.dispatch(PointerEvent::moved(x, y))
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: i32, y: i32) -> String {
        self.dispatch(PointerEvent::release(x, y))
    }

    #[wasm_bindgen]
    pub fn double_click(&mut self, x: i32, y: i32) -> String {
        self.dispatch(PointerEvent::double_click(x, y))
    }

    // =========================================================================
    // Window actions
    // =========================================================================

    #[wasm_bindgen]
    pub fn minimize(&mut self) {
        self.chrome.minimize_window();
    }

    #[wasm_bindgen]
    pub fn toggle_maximize(&mut self) {
        self.chrome.toggle_maximize();
    }

    #[wasm_bindgen]
    pub fn close(&mut self) {
        self.chrome.close_window();
    }

    /// Simulate re-activating the window from the task bar
    #[wasm_bindgen]
    pub fn restore_from_minimized(&mut self) {
        self.chrome.host_mut().restore_from_minimized();
    }

    /// Run one event loop iteration; call once per animation frame
    #[wasm_bindgen]
    pub fn pump(&mut self) {
        self.chrome.pump();
    }

    /// Get the render snapshot as JSON
    #[wasm_bindgen]
    pub fn view_json(&self) -> String {
        serde_json::to_string(&self.chrome.view()).unwrap_or_else(|_| "{}".to_string())
    }
}

impl ChromeSession {
    fn dispatch(&mut self, event: PointerEvent) -> String {
        let result: InputResult = self.chrome.handle_pointer_event(event);
        serde_json::to_string(&result).unwrap_or_else(|_| "{}".to_string())
    }
}
