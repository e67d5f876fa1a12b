//! Shared types: blocks, per-face shading, camera angles, and the block size.
//!
//! # Invariants
//! - `BLOCK_SIZE` is the single scale shared by the cube projector and the
//!   camera composer. Projected geometry misaligns if they disagree.
//! - Angles are always expressed in degrees.

pub mod angle;
pub mod block;

pub use angle::{CameraRotation, clamp_pitch, wrap_yaw};
pub use block::{Block, BlockKind, FaceShading, Rgb};

/// Edge length of one block, in render units.
pub const BLOCK_SIZE: f32 = 32.0;

pub fn crate_info() -> &'static str {
    "blockscape-common v0.1.0"
}
