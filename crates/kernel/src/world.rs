use blockscape_common::{Block, BlockKind};
use serde::{Deserialize, Serialize};

/// Side length of the square terrain platform.
pub const PLATFORM_SIZE: i32 = 10;

/// Number of blocks `World::generate` produces.
pub const GENERATED_BLOCK_COUNT: usize = 331;

/// The block world: an insertion-ordered list of blocks.
///
/// Order is render order. Overlapping blocks are allowed and unchecked;
/// the later one wins visually.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct World {
    blocks: Vec<Block>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the fixed starting terrain.
    ///
    /// A 10x10 platform three layers deep (grass over two dirt), a three
    /// block wood trunk, a 3x3x3 leaf canopy around the trunk top, and three
    /// loose stones. Deterministic: every call yields the same sequence.
    pub fn generate() -> Self {
        let _span = tracing::info_span!("world_generate").entered();
        let mut blocks = Vec::with_capacity(GENERATED_BLOCK_COUNT);

        for x in 0..PLATFORM_SIZE {
            for z in 0..PLATFORM_SIZE {
                blocks.push(Block::new(BlockKind::Grass, x, 2, z));
                blocks.push(Block::new(BlockKind::Dirt, x, 3, z));
                blocks.push(Block::new(BlockKind::Dirt, x, 4, z));
            }
        }

        for y in [1, 0, -1] {
            blocks.push(Block::new(BlockKind::Wood, 3, y, 3));
        }

        for x in 2..=4 {
            for y in -3..=-1 {
                for z in 2..=4 {
                    // keep the trunk column clear below the crown
                    if x == 3 && z == 3 && y > -3 {
                        continue;
                    }
                    blocks.push(Block::new(BlockKind::Leaves, x, y, z));
                }
            }
        }

        for (x, y, z) in [(7, 1, 7), (7, 1, 8), (8, 1, 7)] {
            blocks.push(Block::new(BlockKind::Stone, x, y, z));
        }

        tracing::info!(blocks = blocks.len(), "world generated");
        Self { blocks }
    }

    /// Read-only access to all blocks in insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks of the given kind.
    pub fn count_of(&self, kind: BlockKind) -> usize {
        self.blocks.iter().filter(|b| b.kind == kind).count()
    }

    /// All blocks occupying the given cell, in insertion order.
    pub fn blocks_at(&self, x: i32, y: i32, z: i32) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(move |b| b.x == x && b.y == y && b.z == z)
    }

    /// Deterministic hash of the block sequence, order-sensitive.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        for block in &self.blocks {
            mix(&mut h, &[block.kind as u8]);
            mix(&mut h, &block.x.to_le_bytes());
            mix(&mut h, &block.y.to_le_bytes());
            mix(&mut h, &block.z.to_le_bytes());
        }
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn world_starts_empty() {
        let w = World::new();
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
    }

    #[test]
    fn generated_block_count_is_golden() {
        let w = World::generate();
        // 300 platform + 3 trunk + (27 - 2) leaves + 3 stone
        assert_eq!(w.len(), GENERATED_BLOCK_COUNT);
        assert_eq!(w.len(), 331);
        assert_eq!(w.count_of(BlockKind::Grass), 100);
        assert_eq!(w.count_of(BlockKind::Dirt), 200);
        assert_eq!(w.count_of(BlockKind::Wood), 3);
        assert_eq!(w.count_of(BlockKind::Leaves), 25);
        assert_eq!(w.count_of(BlockKind::Stone), 3);
    }

    #[test]
    fn generation_is_deterministic() {
        let a = World::generate();
        let b = World::generate();
        assert_eq!(a, b);
        assert_eq!(a.state_hash(), b.state_hash());
        assert_ne!(a.state_hash(), World::new().state_hash());
    }

    #[test]
    fn platform_layers() {
        let w = World::generate();
        for x in 0..PLATFORM_SIZE {
            for z in 0..PLATFORM_SIZE {
                let kinds: Vec<(i32, BlockKind)> = w
                    .blocks()
                    .iter()
                    .filter(|b| b.x == x && b.z == z && (2..=4).contains(&b.y))
                    .map(|b| (b.y, b.kind))
                    .collect();
                assert_eq!(
                    kinds,
                    vec![
                        (2, BlockKind::Grass),
                        (3, BlockKind::Dirt),
                        (4, BlockKind::Dirt)
                    ]
                );
            }
        }
        // the first three blocks are the (0, 0) column
        assert_eq!(w.blocks()[0], Block::new(BlockKind::Grass, 0, 2, 0));
        assert_eq!(w.blocks()[1], Block::new(BlockKind::Dirt, 0, 3, 0));
        assert_eq!(w.blocks()[2], Block::new(BlockKind::Dirt, 0, 4, 0));
    }

    #[test]
    fn trunk_follows_platform() {
        let w = World::generate();
        let trunk = &w.blocks()[300..303];
        assert_eq!(
            trunk,
            &[
                Block::new(BlockKind::Wood, 3, 1, 3),
                Block::new(BlockKind::Wood, 3, 0, 3),
                Block::new(BlockKind::Wood, 3, -1, 3),
            ]
        );
    }

    #[test]
    fn canopy_skips_trunk_column_except_crown() {
        let w = World::generate();
        let leaves: BTreeSet<(i32, i32, i32)> = w
            .blocks()
            .iter()
            .filter(|b| b.kind == BlockKind::Leaves)
            .map(|b| (b.x, b.y, b.z))
            .collect();
        assert_eq!(leaves.len(), 25);
        assert!(leaves.contains(&(3, -3, 3)));
        assert!(!leaves.contains(&(3, -2, 3)));
        assert!(!leaves.contains(&(3, -1, 3)));
        for &(x, y, z) in &leaves {
            assert!((2..=4).contains(&x));
            assert!((-3..=-1).contains(&y));
            assert!((2..=4).contains(&z));
        }
        // the trunk top and the canopy never share a cell
        assert_eq!(w.blocks_at(3, -1, 3).count(), 1);
    }

    #[test]
    fn stones_are_last() {
        let w = World::generate();
        let tail = &w.blocks()[w.len() - 3..];
        assert_eq!(
            tail,
            &[
                Block::new(BlockKind::Stone, 7, 1, 7),
                Block::new(BlockKind::Stone, 7, 1, 8),
                Block::new(BlockKind::Stone, 8, 1, 7),
            ]
        );
    }

    #[test]
    fn full_coordinate_set_matches_golden_list() {
        let mut expected = BTreeSet::new();
        for x in 0..10 {
            for z in 0..10 {
                expected.insert((BlockKind::Grass, x, 2, z));
                expected.insert((BlockKind::Dirt, x, 3, z));
                expected.insert((BlockKind::Dirt, x, 4, z));
            }
        }
        for y in -1..=1 {
            expected.insert((BlockKind::Wood, 3, y, 3));
        }
        for x in 2..=4 {
            for y in -3..=-1 {
                for z in 2..=4 {
                    if !(x == 3 && z == 3 && y > -3) {
                        expected.insert((BlockKind::Leaves, x, y, z));
                    }
                }
            }
        }
        expected.insert((BlockKind::Stone, 7, 1, 7));
        expected.insert((BlockKind::Stone, 7, 1, 8));
        expected.insert((BlockKind::Stone, 8, 1, 7));

        let actual: BTreeSet<_> = World::generate()
            .blocks()
            .iter()
            .map(|b| (b.kind, b.x, b.y, b.z))
            .collect();
        assert_eq!(actual, expected);
    }
}
