//! Button and animation configuration.

use crate::animation::Direction;
use crate::error::ConfigError;
use crate::shapes::SerializableColor;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Timing and engine tuning for the open/close animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Per-cell duration of the opening motion, in seconds.
    pub open_duration: f64,
    /// Per-cell duration of the closing motion, in seconds.
    pub close_duration: f64,
    /// Stagger between consecutive cells when opening.
    pub open_delay: f64,
    /// Stagger between consecutive cells when closing.
    pub close_delay: f64,
    pub viscosity: f64,
    /// Small engine threshold as a fraction of the base radius.
    pub small_radius_factor: f64,
    pub small_angle_thresh: f64,
    pub big_angle_thresh: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            open_duration: 0.6,
            close_duration: 0.2,
            open_delay: 0.1,
            close_delay: 0.0,
            viscosity: 0.65,
            small_radius_factor: 0.73,
            small_angle_thresh: 0.45,
            big_angle_thresh: 0.55,
        }
    }
}

/// Appearance and behavior of the floating action button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub direction: Direction,
    pub color: SerializableColor,
    /// Cell radius as a fraction of the button width.
    pub cell_radius_ratio: f64,
    /// Rotation of the plus icon when open.
    pub rotation_degrees: f64,
    pub enable_shadow: bool,
    /// Whether tapping the button toggles it.
    pub responsible: bool,
    pub animation: AnimationConfig,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            color: SerializableColor::default(),
            cell_radius_ratio: 0.38,
            rotation_degrees: 45.0,
            enable_shadow: true,
            responsible: true,
            animation: AnimationConfig::default(),
        }
    }
}

impl ButtonConfig {
    /// Parse from JSON; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&contents)
    }

    /// Reject values the animation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let anim = &self.animation;
        let checks = [
            ("open_duration", anim.open_duration, false),
            ("close_duration", anim.close_duration, false),
            ("open_delay", anim.open_delay, true),
            ("close_delay", anim.close_delay, true),
            ("viscosity", anim.viscosity, true),
            ("small_radius_factor", anim.small_radius_factor, true),
            ("cell_radius_ratio", self.cell_radius_ratio, true),
        ];
        for (name, value, zero_ok) in checks {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!("{name} must be finite")));
            }
            if value < 0.0 || (!zero_ok && value == 0.0) {
                return Err(ConfigError::Invalid(format!("{name} = {value} is out of range")));
            }
        }
        for (name, value) in [
            ("small_angle_thresh", anim.small_angle_thresh),
            ("big_angle_thresh", anim.big_angle_thresh),
        ] {
            // The split branch divides by (angle_thresh - CONNECT_THRESH) and the
            // normal branch by (1 - angle_thresh).
            if !(value > crate::engine::CONNECT_THRESH && value < 1.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} = {value} must lie in (0.3, 1.0)"
                )));
            }
        }
        if !self.rotation_degrees.is_finite() {
            return Err(ConfigError::Invalid("rotation_degrees must be finite".to_string()));
        }
        Ok(())
    }
}
