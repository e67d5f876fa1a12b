use blockscape_common::CameraRotation;
use blockscape_kernel::{GameMode, InventoryItem, Session};
use glam::Vec3;
use serde::Serialize;

use crate::camera::CameraTransform;
use crate::cube::{FaceDescriptor, project_block};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the session and produces output. It never mutates
/// player, mode, or world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the current session state.
    fn render(&self, session: &Session) -> Self::Output;
}

/// State exposed to HUD, hotbar, and inventory collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub mode: GameMode,
    pub position: Vec3,
    pub rotation: CameraRotation,
    pub inventory: Vec<InventoryItem>,
}

/// Everything a layered-transform display needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Applied to the world container.
    pub camera: CameraTransform,
    /// Six faces per block, in world order.
    pub faces: Vec<FaceDescriptor>,
    pub hud: Hud,
}

/// Produces a structured `Frame`.
#[derive(Debug, Default)]
pub struct FrameRenderer;

impl FrameRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for FrameRenderer {
    type Output = Frame;

    fn render(&self, session: &Session) -> Frame {
        let _span = tracing::info_span!("render_frame").entered();
        let player = session.player();
        let faces: Vec<FaceDescriptor> = session
            .world()
            .blocks()
            .iter()
            .flat_map(project_block)
            .collect();
        tracing::trace!(faces = faces.len(), "frame built");
        Frame {
            camera: CameraTransform::compose(player),
            faces,
            hud: Hud {
                mode: session.mode(),
                position: player.position,
                rotation: player.rotation,
                inventory: session.inventory().to_vec(),
            },
        }
    }
}

/// Human-readable frame summary for CLI output, logging, and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, session: &Session) -> String {
        let player = session.player();
        let camera = CameraTransform::compose(player);
        let world = session.world();
        let mut out = String::new();
        out.push_str(&format!(
            "=== Session ({}, t={}ms) ===\n",
            session.mode(),
            session.clock().as_millis()
        ));
        out.push_str(&format!(
            "Blocks: {} Faces: {}\n",
            world.len(),
            world.len() * 6
        ));
        out.push_str(&format!(
            "Player: pos=({:.2}, {:.2}, {:.2}) pitch={:.1} yaw={:.1}\n",
            player.position.x,
            player.position.y,
            player.position.z,
            player.rotation.pitch,
            player.rotation.yaw
        ));
        out.push_str(&format!("Camera: {}\n", camera.css_transform()));
        for item in session.inventory() {
            out.push_str(&format!("  [{}] {} x{}\n", item.id, item.name, item.count));
        }
        out
    }
}
