//! Replay scripts
//!
//! A script is a JSON document:
//!
//! ```json
//! {
//!   "screen": { "geometry": {...}, "available": {...} },
//!   "window": { "x": 100, "y": 30, "width": 800, "height": 600 },
//!   "config": { "startMaximized": false },
//!   "steps": [
//!     { "step": "press", "x": 500, "y": 50 },
//!     { "step": "move", "x": 10, "y": 500 },
//!     { "step": "release", "x": 10, "y": 500 }
//!   ]
//! }
//! ```

use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use whiteboard_chrome::{
    ChromeConfig, ChromeController, ChromeError, ChromeView, InputResult, PointerEvent, Rect,
    ScreenInfo, SimulatedHost, WindowHost,
};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed script: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Chrome(#[from] ChromeError),
}

/// One scripted input
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "camelCase")]
pub enum Step {
    Press { x: i32, y: i32 },
    Move { x: i32, y: i32 },
    Release { x: i32, y: i32 },
    DoubleClick { x: i32, y: i32 },
    Minimize,
    ToggleMaximize,
    Close,
    SnapLeft,
    SnapRight,
    /// The user re-activates the minimized window from the task bar
    RestoreFromMinimized,
    /// The OS moves or resizes the window on its own
    SetGeometry { rect: Rect },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub screen: ScreenInfo,
    /// Window rectangle before the chrome takes over
    #[serde(default)]
    pub window: Option<Rect>,
    #[serde(default)]
    pub config: Option<ChromeConfig>,
    pub steps: Vec<Step>,
}

/// Outcome of one step
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub index: usize,
    pub step: Step,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputResult>,
    pub view: ChromeView,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ReplayError> {
        let script: Script = serde_json::from_str(text)?;
        if let Some(config) = &script.config {
            config.validate()?;
        }
        Ok(script)
    }

    /// Run every step, pumping the event loop after each one
    pub fn run(&self) -> Result<Vec<StepReport>, ReplayError> {
        let host = match self.window {
            Some(rect) => SimulatedHost::with_geometry(self.screen, rect),
            None => SimulatedHost::new(self.screen),
        };
        let config = self.config.clone().unwrap_or_default();
        let mut chrome = ChromeController::new(host, config)?;
        chrome.pump();

        let mut reports = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            debug!(index, ?step, "replay step");
            let input = apply(&mut chrome, step);
            chrome.pump();
            reports.push(StepReport {
                index,
                step: step.clone(),
                input,
                view: chrome.view(),
            });
        }
        Ok(reports)
    }
}

fn apply(chrome: &mut ChromeController<SimulatedHost>, step: &Step) -> Option<InputResult> {
    let event = match *step {
        Step::Press { x, y } => PointerEvent::press(x, y),
        Step::Move { x, y } => PointerEvent::moved(x, y),
        Step::Release { x, y } => PointerEvent::release(x, y),
        Step::DoubleClick { x, y } => PointerEvent::double_click(x, y),
        _ => {
            apply_action(chrome, step);
            return None;
        }
    };
    Some(chrome.handle_pointer_event(event))
}

fn apply_action(chrome: &mut ChromeController<SimulatedHost>, step: &Step) {
    match *step {
        Step::Minimize => chrome.minimize_window(),
        Step::ToggleMaximize => chrome.toggle_maximize(),
        Step::Close => chrome.close_window(),
        Step::SnapLeft => chrome.snap_to_left_half(),
        Step::SnapRight => chrome.snap_to_right_half(),
        Step::RestoreFromMinimized => chrome.host_mut().restore_from_minimized(),
        Step::SetGeometry { rect } => chrome.host_mut().set_geometry(rect),
        Step::Press { .. }
        | Step::Move { .. }
        | Step::Release { .. }
        | Step::DoubleClick { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whiteboard_chrome::HostWindowState;

    const SNAP_LEFT: &str = include_str!("../scripts/snap-left.json");

    #[test]
    fn test_snap_left_script() {
        let reports = Script::parse(SNAP_LEFT).unwrap().run().unwrap();
        let last = reports.last().unwrap();

        assert_eq!(last.view.state, HostWindowState::Normal);
        assert_eq!(last.view.geometry, Rect::new(0, 0, 960, 1040));
        assert!(!last.view.indicator.visible);
        assert!(reports.iter().any(|r| r.view.indicator.visible));
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        let text = r#"{
            "screen": {
                "geometry": { "x": 0, "y": 0, "width": 1920, "height": 1080 },
                "available": { "x": 0, "y": 0, "width": 1920, "height": 1040 }
            },
            "steps": [{ "step": "teleport" }]
        }"#;
        assert!(matches!(Script::parse(text), Err(ReplayError::Json(_))));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let text = r#"{
            "screen": {
                "geometry": { "x": 0, "y": 0, "width": 1920, "height": 1080 },
                "available": { "x": 0, "y": 0, "width": 1920, "height": 1040 }
            },
            "config": { "verticalClampFraction": 1.5 },
            "steps": []
        }"#;
        assert!(matches!(Script::parse(text), Err(ReplayError::Chrome(_))));
    }
}
