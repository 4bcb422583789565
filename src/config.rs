use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::object::MIN_SIZE;

/// Tunables for a [`Scene`](crate::Scene), stored as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields take their default values
pub struct SceneConfig {
    /// Distance covered by one nudge of the selected object
    pub move_step: f32,
    /// How much one grow or shrink changes the current scale
    pub scale_increment: f32,
    /// Scale a fresh scene starts with
    pub initial_scale: f32,
    /// Shrinking never goes below this
    pub min_scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            move_step: 10.0,
            scale_increment: 0.1,
            initial_scale: 1.0,
            min_scale: MIN_SIZE,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("scale_increment", self.scale_increment),
            ("initial_scale", self.initial_scale),
            ("min_scale", self.min_scale),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }
        if !self.move_step.is_finite() {
            return Err(ConfigError::InvalidValue(format!(
                "move_step must be finite, got {}",
                self.move_step
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SceneConfig::from_json(r#"{ "move_step": 25.0 }"#).unwrap();
        assert_eq!(config.move_step, 25.0);
        assert_eq!(config.scale_increment, 0.1);
        assert_eq!(config.min_scale, MIN_SIZE);
    }

    #[test]
    fn rejects_non_positive_scale() {
        let err = SceneConfig::from_json(r#"{ "min_scale": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn json_round_trip() {
        let config = SceneConfig {
            move_step: 4.0,
            ..SceneConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(SceneConfig::from_json(&json).unwrap(), config);
    }
}
