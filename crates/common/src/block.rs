use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::BLOCK_SIZE;

/// The material of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Grass,
    Dirt,
    Stone,
    Wood,
    Leaves,
}

impl BlockKind {
    pub const ALL: [BlockKind; 5] = [
        BlockKind::Grass,
        BlockKind::Dirt,
        BlockKind::Stone,
        BlockKind::Wood,
        BlockKind::Leaves,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Grass => "grass",
            BlockKind::Dirt => "dirt",
            BlockKind::Stone => "stone",
            BlockKind::Wood => "wood",
            BlockKind::Leaves => "leaves",
        }
    }

    /// Static per-face colors. There is no lighting model beyond this.
    pub fn shading(self) -> FaceShading {
        const DIRT: Rgb = Rgb(0x8b, 0x5a, 0x2b);
        match self {
            BlockKind::Grass => FaceShading {
                top: Rgb(0x7c, 0xbd, 0x6b),
                side: DIRT,
                bottom: DIRT,
            },
            BlockKind::Dirt => FaceShading::uniform(DIRT),
            BlockKind::Stone => FaceShading::uniform(Rgb(0x7d, 0x7d, 0x7d)),
            // bark on the sides, end grain on top and bottom
            BlockKind::Wood => FaceShading {
                top: Rgb(0xa0, 0x82, 0x4a),
                side: Rgb(0x6b, 0x42, 0x26),
                bottom: Rgb(0xa0, 0x82, 0x4a),
            },
            BlockKind::Leaves => FaceShading::uniform(Rgb(0x26, 0x7f, 0x00)),
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colors for the three face roles of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceShading {
    pub top: Rgb,
    pub side: Rgb,
    pub bottom: Rgb,
}

impl FaceShading {
    pub fn uniform(color: Rgb) -> Self {
        Self {
            top: color,
            side: color,
            bottom: color,
        }
    }
}

/// A unit cube at integer grid coordinates.
///
/// Blocks are not deduplicated by position; two blocks may share a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub kind: BlockKind,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Block {
    pub fn new(kind: BlockKind, x: i32, y: i32, z: i32) -> Self {
        Self { kind, x, y, z }
    }

    pub fn grid_position(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// Grid position scaled by `BLOCK_SIZE`.
    pub fn translation(&self) -> Vec3 {
        self.grid_position().as_vec3() * BLOCK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_formats_as_hex() {
        assert_eq!(Rgb(0x8b, 0x5a, 0x2b).to_string(), "#8b5a2b");
        assert_eq!(Rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn wood_sides_are_darker_than_ends() {
        let s = BlockKind::Wood.shading();
        assert_ne!(s.side, s.top);
        assert_eq!(s.top, s.bottom);
        let lum = |c: Rgb| c.0 as u32 + c.1 as u32 + c.2 as u32;
        assert!(lum(s.side) < lum(s.top));
    }

    #[test]
    fn grass_top_differs_from_sides() {
        let s = BlockKind::Grass.shading();
        assert_ne!(s.top, s.side);
        assert_eq!(s.side, BlockKind::Dirt.shading().side);
    }

    #[test]
    fn translation_scales_by_block_size() {
        let b = Block::new(BlockKind::Stone, 7, 1, -2);
        assert_eq!(b.translation(), Vec3::new(224.0, 32.0, -64.0));
    }

    #[test]
    fn display_matches_name() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
    }
}
