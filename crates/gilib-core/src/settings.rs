use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::GuiError;

/// Library-wide drawing defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiSettings {
    /// Line width used when a widget strokes its border.
    pub border_line_width: f64,
    /// Background of newly created widgets.
    pub back_color: Rgba,
    /// Border of newly created widgets.
    pub border_color: Rgba,
    /// Zoom used for the first view.
    pub initial_zoom: f64,
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            border_line_width: 1.0,
            back_color: Rgba::rgb(200, 200, 200),
            border_color: Rgba::rgb(50, 50, 50),
            initial_zoom: 1.0,
        }
    }
}

impl GuiSettings {
    /// Parse settings from JSON. Missing keys fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, GuiError> {
        let settings: Self = serde_json::from_str(json)?;
        log::info!(
            "Loaded settings: border width {}, initial zoom {}",
            settings.border_line_width,
            settings.initial_zoom
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, GuiError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
