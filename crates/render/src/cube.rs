use blockscape_common::{BLOCK_SIZE, Block, BlockKind, Rgb};
use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the cube a face is.
///
/// With the world's y-down convention, `Top` faces -y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaceRole {
    Top,
    Bottom,
    Front,
    Back,
    Right,
    Left,
}

impl FaceRole {
    /// Emission order of `project_block`.
    pub const ALL: [FaceRole; 6] = [
        FaceRole::Top,
        FaceRole::Bottom,
        FaceRole::Front,
        FaceRole::Back,
        FaceRole::Right,
        FaceRole::Left,
    ];

    fn rotation(self) -> FaceRotation {
        let (axis, degrees) = match self {
            FaceRole::Top => (Axis::X, 90.0),
            FaceRole::Bottom => (Axis::X, -90.0),
            FaceRole::Front => (Axis::Y, 0.0),
            FaceRole::Back => (Axis::Y, 180.0),
            FaceRole::Right => (Axis::Y, 90.0),
            FaceRole::Left => (Axis::Y, -90.0),
        };
        FaceRotation { axis, degrees }
    }

    fn color(self, kind: BlockKind) -> Rgb {
        let shading = kind.shading();
        match self {
            FaceRole::Top => shading.top,
            FaceRole::Bottom => shading.bottom,
            _ => shading.side,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

/// Rotation turning a square that faces +z outward on its axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceRotation {
    pub axis: Axis,
    pub degrees: f32,
}

impl FaceRotation {
    pub fn matrix(&self) -> Mat4 {
        let radians = self.degrees.to_radians();
        match self.axis {
            Axis::X => Mat4::from_rotation_x(radians),
            Axis::Y => Mat4::from_rotation_y(radians),
        }
    }
}

impl fmt::Display for FaceRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let axis = match self.axis {
            Axis::X => "X",
            Axis::Y => "Y",
        };
        write!(f, "rotate{axis}({}deg)", self.degrees)
    }
}

/// One square of a rendered cube.
///
/// Placement is `translate(translation) * rotate(rotation) * translateZ(offset)`:
/// move to the block, turn to face outward, push out half a block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceDescriptor {
    pub role: FaceRole,
    /// Block grid position times `BLOCK_SIZE`. Shared by all six faces.
    pub translation: Vec3,
    pub rotation: FaceRotation,
    /// Distance pushed along the face normal after rotating.
    pub offset: f32,
    /// Edge length of the square.
    pub size: f32,
    pub color: Rgb,
}

impl FaceDescriptor {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * self.rotation.matrix()
            * Mat4::from_translation(Vec3::new(0.0, 0.0, self.offset))
    }

    /// Center of the square in world render units.
    pub fn center(&self) -> Vec3 {
        self.matrix().transform_point3(Vec3::ZERO)
    }

    /// Outward unit normal.
    pub fn normal(&self) -> Vec3 {
        self.rotation.matrix().transform_vector3(Vec3::Z)
    }

    /// CSS transform list for a layered-transform surface.
    pub fn css_transform(&self) -> String {
        let t = self.translation;
        format!(
            "translate3d({}px, {}px, {}px) {} translateZ({}px)",
            t.x + 0.0,
            t.y + 0.0,
            t.z + 0.0,
            self.rotation,
            self.offset
        )
    }
}

/// Decompose a block into its six faces: top, bottom, front, back, right, left.
pub fn project_block(block: &Block) -> [FaceDescriptor; 6] {
    let translation = block.translation();
    FaceRole::ALL.map(|role| FaceDescriptor {
        role,
        translation,
        rotation: role.rotation(),
        offset: BLOCK_SIZE / 2.0,
        size: BLOCK_SIZE,
        color: role.color(block.kind),
    })
}
