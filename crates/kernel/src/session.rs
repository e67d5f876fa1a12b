use std::time::Duration;

use crate::config::EngineConfig;
use crate::inventory::{InventoryItem, starter_inventory};
use crate::jump::{JumpEngine, JumpState};
use crate::mode::GameMode;
use crate::movement::{MoveDirection, MovementController};
use crate::player::Player;
use crate::world::World;

/// Everything one play session owns.
///
/// Readers (renderers, HUD, inspectors) borrow it immutably. The only way
/// to change player or mode is through the entry points below, each of
/// which checks the current `GameMode` first. Ignored calls return `false`.
#[derive(Debug, Clone)]
pub struct Session {
    config: EngineConfig,
    mode: GameMode,
    world: World,
    player: Player,
    movement: MovementController,
    jump: JumpEngine,
    inventory: Vec<InventoryItem>,
    clock: Duration,
}

impl Session {
    pub fn new(config: EngineConfig) -> Self {
        let player = Player::spawn(&config.spawn);
        Self {
            movement: MovementController::new(&config.movement),
            jump: JumpEngine::new(&config.jump),
            config,
            mode: GameMode::NotStarted,
            world: World::new(),
            player,
            inventory: starter_inventory(),
            clock: Duration::ZERO,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn jump_state(&self) -> JumpState {
        self.jump.state()
    }

    /// Total time passed to `advance` so far.
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// Leave the title screen: generate the world if it is still empty and
    /// put the player at spawn.
    pub fn start(&mut self) -> bool {
        let Some(next) = self.mode.started() else {
            tracing::debug!(mode = %self.mode, "start ignored");
            return false;
        };
        if self.world.is_empty() {
            self.world = World::generate();
        }
        self.player = Player::spawn(&self.config.spawn);
        self.jump.reset();
        self.mode = next;
        tracing::info!(blocks = self.world.len(), "session started");
        true
    }

    /// Flip between `Running` and `InventoryOpen`.
    pub fn toggle_inventory(&mut self) -> bool {
        let Some(next) = self.mode.toggled() else {
            return false;
        };
        tracing::info!(from = %self.mode, to = %next, "game mode changed");
        self.mode = next;
        true
    }

    /// Close the inventory panel. Never opens it.
    pub fn close_inventory(&mut self) -> bool {
        let Some(next) = self.mode.closed() else {
            tracing::debug!(mode = %self.mode, "close inventory ignored");
            return false;
        };
        tracing::info!(from = %self.mode, to = %next, "game mode changed");
        self.mode = next;
        true
    }

    pub fn move_player(&mut self, direction: MoveDirection) -> bool {
        if !self.mode.accepts_movement() {
            return false;
        }
        self.movement.step(&mut self.player, direction);
        true
    }

    /// Mouse-look by a raw movement delta. Pointer capture is checked by
    /// the caller; this only checks the mode.
    pub fn look(&mut self, movement_x: f32, movement_y: f32) -> bool {
        if !self.mode.accepts_movement() {
            return false;
        }
        self.movement.look(&mut self.player, movement_x, movement_y);
        true
    }

    pub fn jump(&mut self) -> bool {
        if !self.mode.accepts_movement() {
            return false;
        }
        self.jump.jump(&mut self.player)
    }

    /// Let time pass. Scheduled jump restores fire regardless of mode.
    /// Returns how many restores fired.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.clock = self.clock.saturating_add(elapsed);
        self.jump.advance(elapsed, &mut self.player)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jump::JumpPolicy;
    use crate::world::GENERATED_BLOCK_COUNT;
    use glam::Vec3;

    fn running() -> Session {
        let mut s = Session::default();
        assert!(s.start());
        s
    }

    #[test]
    fn new_session_is_not_started_and_empty() {
        let s = Session::default();
        assert_eq!(s.mode(), GameMode::NotStarted);
        assert!(s.world().is_empty());
        assert_eq!(s.inventory().len(), 4);
    }

    #[test]
    fn start_generates_world_once() {
        let mut s = running();
        assert_eq!(s.mode(), GameMode::Running);
        assert_eq!(s.world().len(), GENERATED_BLOCK_COUNT);
        assert_eq!(s.player().position, Vec3::new(5.0, 0.0, 5.0));
        assert!(!s.start());
        assert_eq!(s.world().len(), GENERATED_BLOCK_COUNT);
    }

    #[test]
    fn nothing_moves_before_start() {
        let mut s = Session::default();
        let before = *s.player();
        assert!(!s.move_player(MoveDirection::Forward));
        assert!(!s.look(10.0, 10.0));
        assert!(!s.jump());
        assert!(!s.toggle_inventory());
        assert_eq!(*s.player(), before);
        assert_eq!(s.mode(), GameMode::NotStarted);
    }

    #[test]
    fn close_inventory_never_opens_it() {
        let mut s = Session::default();
        assert!(!s.close_inventory());
        assert_eq!(s.mode(), GameMode::NotStarted);

        assert!(s.start());
        assert!(!s.close_inventory());
        assert_eq!(s.mode(), GameMode::Running);

        assert!(s.toggle_inventory());
        assert!(s.close_inventory());
        assert_eq!(s.mode(), GameMode::Running);
        assert!(s.move_player(MoveDirection::Forward));
    }

    #[test]
    fn toggle_twice_restores_mode() {
        let mut s = running();
        assert!(s.toggle_inventory());
        assert_eq!(s.mode(), GameMode::InventoryOpen);
        assert!(s.toggle_inventory());
        assert_eq!(s.mode(), GameMode::Running);
    }

    #[test]
    fn inventory_open_blocks_movement_look_and_jump() {
        let mut s = running();
        s.toggle_inventory();
        let before = *s.player();
        for dir in [
            MoveDirection::Forward,
            MoveDirection::Backward,
            MoveDirection::Left,
            MoveDirection::Right,
        ] {
            assert!(!s.move_player(dir));
        }
        assert!(!s.look(50.0, -20.0));
        assert!(!s.jump());
        assert_eq!(*s.player(), before);
    }

    #[test]
    fn jump_restore_fires_while_inventory_open() {
        let mut s = running();
        assert!(s.jump());
        assert_eq!(s.player().position.y, -1.0);
        s.toggle_inventory();
        assert_eq!(s.advance(Duration::from_millis(500)), 1);
        assert_eq!(s.player().position.y, 0.0);
        assert_eq!(s.clock(), Duration::from_millis(500));
    }

    #[test]
    fn overlapping_policy_is_reachable_through_config() {
        let mut config = EngineConfig::default();
        config.jump.policy = JumpPolicy::Overlapping;
        let mut s = Session::new(config);
        s.start();
        s.jump();
        s.advance(Duration::from_millis(100));
        s.jump();
        s.advance(Duration::from_millis(500));
        assert_eq!(s.player().position.y, 1.0);
    }

    #[test]
    fn walk_forward_then_back() {
        let mut s = running();
        let start = s.player().position;
        s.move_player(MoveDirection::Forward);
        assert!((s.player().position.z - (start.z + 0.2)).abs() < 1e-5);
        s.move_player(MoveDirection::Backward);
        assert!((s.player().position - start).length() < 1e-5);
    }
}
