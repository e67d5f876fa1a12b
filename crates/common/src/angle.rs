use serde::{Deserialize, Serialize};

/// Lowest and highest pitch, in degrees.
pub const PITCH_LIMIT: f32 = 90.0;

/// Clamp a pitch angle to `[-90, 90]` degrees.
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Wrap a yaw angle into `[0, 360)` degrees.
pub fn wrap_yaw(yaw: f32) -> f32 {
    let wrapped = yaw.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Camera orientation in degrees.
///
/// `pitch` rotates about the horizontal axis, `yaw` about the vertical axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraRotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl CameraRotation {
    pub fn new(pitch: f32, yaw: f32) -> Self {
        Self {
            pitch: clamp_pitch(pitch),
            yaw: wrap_yaw(yaw),
        }
    }

    /// Apply a pitch/yaw delta, keeping both angles in range. Non-finite
    /// deltas are dropped.
    pub fn rotate(&mut self, d_pitch: f32, d_yaw: f32) {
        if !d_pitch.is_finite() || !d_yaw.is_finite() {
            return;
        }
        self.pitch = clamp_pitch(self.pitch + d_pitch);
        self.yaw = wrap_yaw(self.yaw + d_yaw);
    }

    /// Unit vector on the ground plane the camera faces: `(sin yaw, cos yaw)`.
    pub fn forward_xz(&self) -> (f32, f32) {
        let rad = self.yaw.to_radians();
        (rad.sin(), rad.cos())
    }
}
