//! Plugin configuration.

use crate::shapes::FontName;
use serde::{Deserialize, Serialize};

/// Size of the plugin's UI panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            width: 500,
            height: 400,
        }
    }
}

/// Layout and typography for generated swatches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Font used by both swatch labels.
    pub font: FontName,
    pub font_size: f64,
    pub swatch_width: f64,
    pub swatch_height: f64,
    /// Padding on every side of a swatch.
    pub swatch_padding: f64,
    /// Weight of the black swatch border.
    pub stroke_weight: f64,
    /// Layer name of the container frame.
    pub container_name: String,
    pub ui: UiOptions,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            font: FontName::new("Plus Jakarta Sans", "SemiBold"),
            font_size: 14.0,
            swatch_width: 220.0,
            swatch_height: 100.0,
            swatch_padding: 15.0,
            stroke_weight: 1.0,
            container_name: "Color Palette Frames".to_string(),
            ui: UiOptions::default(),
        }
    }
}

impl PluginConfig {
    /// Parse a JSON config; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
