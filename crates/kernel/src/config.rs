//! Engine tuning. Defaults are the fixed game constants.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::jump::JumpPolicy;

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Movement speeds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// World units moved per movement keystroke.
    pub speed: f32,
    /// Degrees of rotation per unit of mouse delta.
    pub look_sensitivity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 0.2,
            look_sensitivity: 0.1,
        }
    }
}

/// The scripted jump.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JumpConfig {
    /// World units the player rises (y decreases) for the jump.
    pub height: f32,
    /// Time until the restore fires.
    pub duration_ms: u64,
    pub policy: JumpPolicy,
}

impl JumpConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            height: 1.0,
            duration_ms: 500,
            policy: JumpPolicy::default(),
        }
    }
}

/// Where the player appears when a session starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub position: [f32; 3],
    pub pitch: f32,
    pub yaw: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            position: [5.0, 0.0, 5.0],
            pitch: 0.0,
            yaw: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub movement: MovementConfig,
    pub jump: JumpConfig,
    pub spawn: SpawnConfig,
}

impl EngineConfig {
    /// Parse and validate a YAML document. Missing fields take defaults.
    pub fn from_yaml_str(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml_str(&src)?;
        tracing::debug!(path = %path.as_ref().display(), "engine config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        if !m.speed.is_finite() || m.speed <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "movement.speed must be positive, got {}",
                m.speed
            )));
        }
        if !m.look_sensitivity.is_finite() || m.look_sensitivity <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "movement.look_sensitivity must be positive, got {}",
                m.look_sensitivity
            )));
        }
        if !self.jump.height.is_finite() || self.jump.height < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "jump.height must be non-negative, got {}",
                self.jump.height
            )));
        }
        if self.jump.duration_ms == 0 {
            return Err(ConfigError::Invalid("jump.duration_ms must be non-zero".into()));
        }
        if self.spawn.position.iter().any(|c| !c.is_finite())
            || !self.spawn.pitch.is_finite()
            || !self.spawn.yaw.is_finite()
        {
            return Err(ConfigError::Invalid("spawn values must be finite".into()));
        }
        Ok(())
    }
}
