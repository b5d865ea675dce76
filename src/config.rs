use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::shape::ShapeKind;
use crate::style::{DEFAULT_STROKE_WIDTH, FillStyle, NamedColor, StrokeStyle};
use crate::tools::ToolSettings;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "EFRAME_DRAW_CONFIG";

/// Startup configuration. Every field has a default, so a config file only
/// needs to mention what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_title: String,
    pub stroke_width: f32,
    pub initial_kind: ShapeKind,
    pub pen: NamedColor,
    pub brush: NamedColor,
    pub background: NamedColor,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Draw".to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            initial_kind: ShapeKind::Line,
            pen: NamedColor::Black,
            brush: NamedColor::Green,
            background: NamedColor::White,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], falling back to the
    /// defaults when it is unset or unusable.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Tool settings for the first shape drawn
    pub fn tool_settings(&self) -> ToolSettings {
        ToolSettings::new(
            self.initial_kind,
            StrokeStyle::named(self.pen, self.stroke_width),
            FillStyle::named(self.brush),
        )
    }
}
