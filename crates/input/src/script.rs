//! Recorded input sequences, replayed through an `InputRouter`.
//!
//! ```yaml
//! steps:
//!   - start
//!   - key: w
//!   - click
//!   - pointer_capture: true
//!   - mouse: { dx: 40, dy: -10 }
//!   - wait_ms: 250
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::event::InputEvent;
use crate::key::Key;

/// Errors from loading input scripts.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptStep {
    Start,
    Key(Key),
    Mouse { dx: f32, dy: f32 },
    Click,
    CloseInventory,
    /// The host's answer to a capture request.
    PointerCapture(bool),
    WaitMs(u64),
}

impl ScriptStep {
    pub fn to_event(&self) -> InputEvent {
        match self {
            ScriptStep::Start => InputEvent::Start,
            ScriptStep::Key(key) => InputEvent::KeyDown(key.clone()),
            ScriptStep::Mouse { dx, dy } => InputEvent::mouse(*dx, *dy),
            ScriptStep::Click => InputEvent::Click,
            ScriptStep::CloseInventory => InputEvent::CloseInventory,
            ScriptStep::PointerCapture(active) => {
                InputEvent::PointerCaptureChanged { active: *active }
            }
            ScriptStep::WaitMs(ms) => InputEvent::Elapsed(Duration::from_millis(*ms)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    #[serde(with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn from_yaml_str(src: &str) -> Result<Self, ScriptError> {
        Ok(serde_yaml::from_str(src)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let src = std::fs::read_to_string(path.as_ref())?;
        let script = Self::from_yaml_str(&src)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            steps = script.steps.len(),
            "input script loaded"
        );
        Ok(script)
    }

    pub fn events(&self) -> impl Iterator<Item = InputEvent> + '_ {
        self.steps.iter().map(ScriptStep::to_event)
    }
}
