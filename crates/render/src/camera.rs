use blockscape_common::BLOCK_SIZE;
use blockscape_kernel::Player;
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// The single transform applied to the whole world container.
///
/// Composed as `rotateX(pitch) * rotateY(yaw) * translate(-position * BLOCK_SIZE)`.
/// The world is slid under a camera that rotates in place about the
/// container origin, not about the eye point. Movement feel depends on this
/// order; keep it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraTransform {
    /// Degrees about the horizontal axis.
    pub pitch: f32,
    /// Degrees about the vertical axis.
    pub yaw: f32,
    /// Negated player position in render units.
    pub translation: Vec3,
}

impl CameraTransform {
    pub fn compose(player: &Player) -> Self {
        Self {
            pitch: player.rotation.pitch,
            yaw: player.rotation.yaw,
            translation: -player.position * BLOCK_SIZE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(self.yaw.to_radians())
            * Mat4::from_translation(self.translation)
    }

    /// Map a world point (render units) into camera space.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        self.matrix().transform_point3(point)
    }

    /// CSS transform list, left to right in composition order.
    pub fn css_transform(&self) -> String {
        let t = self.translation;
        format!(
            "rotateX({}deg) rotateY({}deg) translate3d({}px, {}px, {}px)",
            self.pitch + 0.0,
            self.yaw + 0.0,
            t.x + 0.0,
            t.y + 0.0,
            t.z + 0.0
        )
    }
}
