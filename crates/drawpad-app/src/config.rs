//! Host configuration.

use crate::error::{AppError, AppResult};
use drawpad_core::shapes::{SerializableColor, ShapeKind};
use drawpad_core::tools::ToolManager;
use kurbo::Size;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a replay session. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Viewport width in pixels.
    pub width: f64,
    /// Viewport height in pixels.
    pub height: f64,
    pub background_color: SerializableColor,
    pub selection_color: SerializableColor,
    /// Shape kind selected when the session starts.
    pub shape_kind: ShapeKind,
    /// Color of newly drawn shapes.
    pub stroke_color: SerializableColor,
    pub stroke_width: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            background_color: SerializableColor::new(250, 250, 250, 255),
            selection_color: SerializableColor::new(59, 130, 246, 255),
            shape_kind: ShapeKind::default(),
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn viewport(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Toolbar settings a fresh canvas starts with.
    pub fn tool_manager(&self) -> ToolManager {
        let mut tools = ToolManager::new();
        tools.set_shape_kind(self.shape_kind);
        tools.set_color(self.stroke_color);
        tools
    }
}
