//! Rendering adapter: turns session state into surface-agnostic geometry.
//!
//! # Invariants
//! - Renderers read the session and never mutate it.
//! - Face and camera math share `BLOCK_SIZE`; both are pure functions.
//! - No occlusion culling: every block yields all six faces.

mod camera;
mod cube;
mod renderer;

pub use camera::CameraTransform;
pub use cube::{Axis, FaceDescriptor, FaceRole, FaceRotation, project_block};
pub use renderer::{DebugTextRenderer, Frame, FrameRenderer, Hud, Renderer};

pub fn crate_info() -> &'static str {
    "blockscape-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
