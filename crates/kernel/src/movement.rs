use serde::{Deserialize, Serialize};

use crate::config::MovementConfig;
use crate::player::Player;

/// A camera-relative movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

/// Turns movement and look intents into player deltas.
///
/// Movement is a discrete step per keystroke, not integrated per frame.
/// The basis is the camera yaw projected on the ground plane:
/// `forward = (sin yaw, cos yaw)` and `right = (forward.z, -forward.x)`.
#[derive(Debug, Clone)]
pub struct MovementController {
    speed: f32,
    look_sensitivity: f32,
}

impl MovementController {
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            speed: config.speed,
            look_sensitivity: config.look_sensitivity,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Move the player one step on the x/z plane. y is never touched.
    pub fn step(&self, player: &mut Player, direction: MoveDirection) {
        let (fx, fz) = player.rotation.forward_xz();
        let (dx, dz) = match direction {
            MoveDirection::Forward => (fx, fz),
            MoveDirection::Backward => (-fx, -fz),
            MoveDirection::Left => (-fz, fx),
            MoveDirection::Right => (fz, -fx),
        };
        player.position.x += dx * self.speed;
        player.position.z += dz * self.speed;
        tracing::trace!(
            ?direction,
            x = player.position.x,
            z = player.position.z,
            "player stepped"
        );
    }

    /// Apply a mouse delta: moving down pitches down, moving right yaws right.
    pub fn look(&self, player: &mut Player, movement_x: f32, movement_y: f32) {
        player.rotation.rotate(
            -movement_y * self.look_sensitivity,
            movement_x * self.look_sensitivity,
        );
        tracing::trace!(
            pitch = player.rotation.pitch,
            yaw = player.rotation.yaw,
            "camera rotated"
        );
    }
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(&MovementConfig::default())
    }
}
