//! Editor configuration.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! yields the stock editor: 100x40 boxes spawned at (50, 50) reading
//! "New Text".

use serde::{Deserialize, Serialize};

use crate::consts::{
    ACTIVE_BORDER, BOX_HEIGHT_PX, BOX_WIDTH_PX, DEFAULT_CONTENT, INACTIVE_BORDER, SPAWN_LEFT_PX, SPAWN_TOP_PX,
};
use crate::error::EditorError;
use crate::geometry::Point;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Tunable editor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Assumed box width used for drag clamping and hit-testing.
    pub box_width: f64,
    /// Assumed box height used for drag clamping and hit-testing.
    pub box_height: f64,
    /// Top offset of a newly added box.
    pub spawn_top: f64,
    /// Left offset of a newly added box.
    pub spawn_left: f64,
    /// Content of a newly added box.
    pub default_content: String,
    /// CSS border of the active box.
    pub active_border: String,
    /// CSS border of inactive boxes.
    pub inactive_border: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            box_width: BOX_WIDTH_PX,
            box_height: BOX_HEIGHT_PX,
            spawn_top: SPAWN_TOP_PX,
            spawn_left: SPAWN_LEFT_PX,
            default_content: DEFAULT_CONTENT.to_string(),
            active_border: ACTIVE_BORDER.to_string(),
            inactive_border: INACTIVE_BORDER.to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a config from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::ConfigParse`] for malformed JSON and
    /// [`EditorError::InvalidConfig`] for non-positive box dimensions or
    /// negative spawn offsets.
    pub fn from_json(raw: &str) -> Result<Self, EditorError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| EditorError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config describes a usable editor.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), EditorError> {
        if !(self.box_width.is_finite() && self.box_width > 0.0) {
            return Err(EditorError::InvalidConfig(format!("box_width must be positive, got {}", self.box_width)));
        }
        if !(self.box_height.is_finite() && self.box_height > 0.0) {
            return Err(EditorError::InvalidConfig(format!("box_height must be positive, got {}", self.box_height)));
        }
        if !(self.spawn_top.is_finite() && self.spawn_top >= 0.0) {
            return Err(EditorError::InvalidConfig(format!("spawn_top must be non-negative, got {}", self.spawn_top)));
        }
        if !(self.spawn_left.is_finite() && self.spawn_left >= 0.0) {
            return Err(EditorError::InvalidConfig(format!(
                "spawn_left must be non-negative, got {}",
                self.spawn_left
            )));
        }
        Ok(())
    }

    /// Offset from a box's top-left corner to the point kept under the
    /// pointer while dragging: half the assumed box size.
    #[must_use]
    pub fn drag_anchor(&self) -> Point {
        Point::new(self.box_width / 2.0, self.box_height / 2.0)
    }
}
