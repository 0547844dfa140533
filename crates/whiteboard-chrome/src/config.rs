//! Chrome configuration
//!
//! Every pixel threshold the interaction logic uses lives here so tests can
//! exercise the boundaries exactly.

use serde::{Deserialize, Serialize};
use crate::error::{ChromeError, Result};
use crate::math::Size;
use crate::style::{IndicatorStyle, ShadowStyle};

/// Configuration for building a chrome controller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChromeConfig {
    /// Window and title label text
    pub title: String,
    /// Minimum window size enforced by the host and the resize handles
    pub min_size: Size,
    /// Initial size is the available screen size divided by these, floored
    pub default_size_divisors: (f64, f64),
    /// Maximize once the first layout has settled
    pub start_maximized: bool,
    /// Height of the caption strip
    pub title_bar_height: i32,
    /// Left/right content margin inside the title bar
    pub title_bar_margin: i32,
    /// Edge length of each square title bar button
    pub button_size: i32,
    /// Gap between title bar buttons
    pub button_spacing: i32,
    /// Manhattan distance a press must travel before it becomes a drag
    pub drag_threshold: i32,
    /// Width of the screen edge zones that trigger snapping
    pub snap_zone: i32,
    /// Fraction of the screen height the dragged pointer may reach
    pub vertical_clamp_fraction: f64,
    /// Thickness of the edge resize handles
    pub edge_handle_thickness: i32,
    /// Edge length of the square corner resize handles
    pub corner_handle_size: i32,
    /// Pointer distance from the window top after dragging out of maximized
    pub restore_grab_offset_y: i32,
    pub shadow: ShadowStyle,
    pub indicator: IndicatorStyle,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            title: "Whiteboard App".to_string(),
            min_size: Size::new(400, 300),
            default_size_divisors: (1.6, 1.35),
            start_maximized: true,
            title_bar_height: 30,
            title_bar_margin: 5,
            button_size: 30,
            button_spacing: 2,
            drag_threshold: 5,
            snap_zone: 20,
            vertical_clamp_fraction: 0.925,
            edge_handle_thickness: 6,
            corner_handle_size: 10,
            restore_grab_offset_y: 10,
            shadow: ShadowStyle::default(),
            indicator: IndicatorStyle::default(),
        }
    }
}

impl ChromeConfig {
    /// Parse and validate a JSON configuration; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ChromeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the state machine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.min_size.is_empty() {
            return Err(ChromeError::invalid_config("minSize must be positive on both axes"));
        }
        if self.title_bar_height <= 0 || self.button_size <= 0 {
            return Err(ChromeError::invalid_config(
                "titleBarHeight and buttonSize must be positive",
            ));
        }
        if self.edge_handle_thickness <= 0 || self.corner_handle_size <= 0 {
            return Err(ChromeError::invalid_config("resize handle sizes must be positive"));
        }
        if self.drag_threshold < 0 || self.snap_zone < 0 {
            return Err(ChromeError::invalid_config(
                "dragThreshold and snapZone must not be negative",
            ));
        }
        if self.title_bar_margin < 0 || self.button_spacing < 0 || self.shadow.feather < 0 {
            return Err(ChromeError::invalid_config("margins and spacing must not be negative"));
        }
        if !(self.vertical_clamp_fraction > 0.0 && self.vertical_clamp_fraction <= 1.0) {
            return Err(ChromeError::invalid_config(format!(
                "verticalClampFraction must be in (0, 1], got {}",
                self.vertical_clamp_fraction
            )));
        }
        let (dw, dh) = self.default_size_divisors;
        if !(dw >= 1.0 && dh >= 1.0) {
            return Err(ChromeError::invalid_config(format!(
                "defaultSizeDivisors must be >= 1, got ({}, {})",
                dw, dh
            )));
        }
        Ok(())
    }

    /// Initial window size for the given available screen size
    pub fn default_size(&self, available: Size) -> Size {
        let (dw, dh) = self.default_size_divisors;
        Size::new(
            (f64::from(available.width) / dw).floor() as i32,
            (f64::from(available.height) / dh).floor() as i32,
        )
    }
}
