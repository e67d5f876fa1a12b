//! Session kernel: the block world, the player, the game mode, and the
//! movement and jump rules that mutate them.
//!
//! # Invariants
//! - The world is generated once per session start and never edited.
//! - `pitch` stays within `[-90, 90]`; `yaw` stays within `[0, 360)`.
//! - Player and mode are mutated only through `Session` entry points, which
//!   gate every change on the current `GameMode`.
//! - "Up" is negative y. Terrain sits at y in `[2, 4]`, the canopy above it
//!   at negative y, and a jump first decreases y.

pub mod config;
pub mod inventory;
pub mod jump;
pub mod mode;
pub mod movement;
pub mod player;
pub mod session;
pub mod world;

pub use config::{ConfigError, EngineConfig, JumpConfig, MovementConfig, SpawnConfig};
pub use inventory::{InventoryItem, starter_inventory};
pub use jump::{JumpEngine, JumpPolicy, JumpState};
pub use mode::GameMode;
pub use movement::{MoveDirection, MovementController};
pub use player::Player;
pub use session::Session;
pub use world::World;

pub fn crate_info() -> &'static str {
    "blockscape-kernel v0.1.0"
}
