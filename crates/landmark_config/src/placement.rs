//! Placement settings and their TOML persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Default drop of anchors below the camera, in meters.
pub const DEFAULT_ALTITUDE_OFFSET_M: f64 = 1.5;

/// Default nudge increment, in degrees of latitude/longitude (~1 m).
pub const DEFAULT_CONTROL_STEP_DEG: f64 = 0.00001;

/// Default factor from surveyed line length to model X scale.
pub const DEFAULT_LENGTH_SCALE: f64 = 2.0;

/// One press of the placement control pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

/// User-tunable settings applied when placing landmark anchors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Anchors sit this many meters below the camera altitude.
    pub altitude_offset_m: f64,
    /// Offset added to every anchor latitude, in degrees.
    pub control_x: f64,
    /// Offset added to every anchor longitude, in degrees.
    pub control_y: f64,
    /// Increment applied by one [`Nudge`].
    pub control_step: f64,
    /// Model scale along Y.
    pub model_scale_y: f64,
    /// Model scale along Z.
    pub model_scale_z: f64,
    /// Model X scale per unit of surveyed line length.
    pub length_scale: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            altitude_offset_m: DEFAULT_ALTITUDE_OFFSET_M,
            control_x: 0.0,
            control_y: 0.0,
            control_step: DEFAULT_CONTROL_STEP_DEG,
            model_scale_y: 1.0,
            model_scale_z: 1.0,
            length_scale: DEFAULT_LENGTH_SCALE,
        }
    }
}

impl PlacementConfig {
    /// Check that every setting is usable by the placement math.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.altitude_offset_m.is_finite() {
            return Err(ConfigError::Invalid("altitude_offset_m must be finite"));
        }
        if !self.control_x.is_finite() || !self.control_y.is_finite() {
            return Err(ConfigError::Invalid("control offsets must be finite"));
        }
        if !(self.control_step.is_finite() && self.control_step > 0.0) {
            return Err(ConfigError::Invalid("control_step must be greater than zero"));
        }
        for scale in [self.model_scale_y, self.model_scale_z, self.length_scale] {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(ConfigError::Invalid("scales must be greater than zero"));
            }
        }
        Ok(())
    }

    /// Move the control offset by one step.
    ///
    /// Up/Down act on `control_y`, Right/Left on `control_x`.
    pub fn nudge(&mut self, direction: Nudge) {
        match direction {
            Nudge::Up => self.control_y += self.control_step,
            Nudge::Down => self.control_y -= self.control_step,
            Nudge::Right => self.control_x += self.control_step,
            Nudge::Left => self.control_x -= self.control_step,
        }
        debug!(
            ?direction,
            control_x = self.control_x,
            control_y = self.control_y,
            "placement nudged"
        );
    }

    /// Clear the control offsets.
    pub fn reset_controls(&mut self) {
        self.control_x = 0.0;
        self.control_y = 0.0;
    }

    /// Clear the control offsets and restore the default altitude offset.
    pub fn reset_all(&mut self) {
        self.reset_controls();
        self.altitude_offset_m = DEFAULT_ALTITUDE_OFFSET_M;
    }

    /// Parse and validate settings from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no placement config, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?config, "placement config loaded");
        Ok(config)
    }

    /// Write settings to `path` as TOML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-15;

    #[test]
    fn defaults_are_valid() {
        let config = PlacementConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.altitude_offset_m, 1.5);
        assert_eq!(config.length_scale, 2.0);
    }

    #[test]
    fn nudge_moves_one_step_per_press() {
        let mut config = PlacementConfig::default();
        config.nudge(Nudge::Up);
        config.nudge(Nudge::Up);
        config.nudge(Nudge::Left);
        assert!((config.control_y - 2.0 * DEFAULT_CONTROL_STEP_DEG).abs() < EPS);
        assert!((config.control_x + DEFAULT_CONTROL_STEP_DEG).abs() < EPS);

        config.nudge(Nudge::Down);
        config.nudge(Nudge::Right);
        assert!((config.control_y - DEFAULT_CONTROL_STEP_DEG).abs() < EPS);
        assert!(config.control_x.abs() < EPS);
    }

    #[test]
    fn reset_controls_keeps_altitude() {
        let mut config = PlacementConfig {
            altitude_offset_m: 3.0,
            ..Default::default()
        };
        config.nudge(Nudge::Right);
        config.reset_controls();
        assert_eq!(config.control_x, 0.0);
        assert_eq!(config.altitude_offset_m, 3.0);

        config.reset_all();
        assert_eq!(config.altitude_offset_m, DEFAULT_ALTITUDE_OFFSET_M);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = PlacementConfig::from_toml_str("altitude_offset_m = 2.25\n").unwrap();
        assert_eq!(config.altitude_offset_m, 2.25);
        assert_eq!(config.control_step, DEFAULT_CONTROL_STEP_DEG);
        assert_eq!(config.model_scale_y, 1.0);
    }

    #[test]
    fn rejects_non_positive_step() {
        let err = PlacementConfig::from_toml_str("control_step = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_scale() {
        let config = PlacementConfig {
            model_scale_z: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_mistyped_value() {
        let err = PlacementConfig::from_toml_str("altitude_offset_m = \"high\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
