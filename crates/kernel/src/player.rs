use blockscape_common::CameraRotation;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::SpawnConfig;

/// The viewpoint moving through the world.
///
/// Position is in world units (one unit per block) and unbounded on every
/// axis; there is no collision or boundary clamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec3,
    pub rotation: CameraRotation,
}

impl Player {
    /// A player at the configured spawn point.
    pub fn spawn(spawn: &SpawnConfig) -> Self {
        Self {
            position: Vec3::from_array(spawn.position),
            rotation: CameraRotation::new(spawn.pitch, spawn.yaw),
        }
    }
}
