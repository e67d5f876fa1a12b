use blockscape_common::{BlockKind, CameraRotation};
use blockscape_kernel::{GameMode, JumpState, Session};
use glam::Vec3;
use serde::Serialize;
use std::fmt;

/// Session inspector for developer tooling.
///
/// Read-only queries against a session for debugging and CLI output.
pub struct SessionInspector;

impl SessionInspector {
    /// Produce a summary of the session state.
    pub fn summary(session: &Session) -> SessionSummary {
        let world = session.world();
        let player = session.player();
        let (airborne, pending_restores) = match session.jump_state() {
            JumpState::Grounded => (false, 0),
            JumpState::Airborne { pending, .. } => (true, pending),
        };
        SessionSummary {
            mode: session.mode(),
            position: player.position,
            rotation: player.rotation,
            block_count: world.len(),
            blocks_by_kind: BlockKind::ALL
                .iter()
                .map(|&kind| (kind, world.count_of(kind)))
                .collect(),
            world_hash: world.state_hash(),
            airborne,
            pending_restores,
            clock_ms: u64::try_from(session.clock().as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Summary of session state for the inspector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub mode: GameMode,
    pub position: Vec3,
    pub rotation: CameraRotation,
    pub block_count: usize,
    /// In `BlockKind::ALL` order, zero counts included.
    pub blocks_by_kind: Vec<(BlockKind, usize)>,
    pub world_hash: u64,
    pub airborne: bool,
    pub pending_restores: usize,
    pub clock_ms: u64,
}

impl SessionSummary {
    pub fn count_of(&self, kind: BlockKind) -> usize {
        self.blocks_by_kind
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, n)| *n)
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Session: mode={} t={}ms blocks={} hash={:016x}",
            self.mode, self.clock_ms, self.block_count, self.world_hash
        )?;
        write!(f, "  ")?;
        for (i, (kind, n)) in self.blocks_by_kind.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{kind}={n}")?;
        }
        writeln!(f)?;
        write!(
            f,
            "Player: pos=({:.2}, {:.2}, {:.2}) pitch={:.1} yaw={:.1} {}",
            self.position.x,
            self.position.y,
            self.position.z,
            self.rotation.pitch,
            self.rotation.yaw,
            if self.airborne {
                format!("airborne ({} pending)", self.pending_restores)
            } else {
                "grounded".to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn summary_unstarted_session() {
        let summary = SessionInspector::summary(&Session::default());
        assert_eq!(summary.mode, GameMode::NotStarted);
        assert_eq!(summary.block_count, 0);
        assert_eq!(summary.blocks_by_kind.len(), BlockKind::ALL.len());
        assert!(!summary.airborne);
    }

    #[test]
    fn summary_counts_generated_blocks() {
        let mut session = Session::default();
        session.start();
        let summary = SessionInspector::summary(&session);
        assert_eq!(summary.block_count, 331);
        assert_eq!(summary.count_of(BlockKind::Grass), 100);
        assert_eq!(summary.count_of(BlockKind::Dirt), 200);
        assert_eq!(summary.count_of(BlockKind::Wood), 3);
        assert_eq!(summary.count_of(BlockKind::Leaves), 25);
        assert_eq!(summary.count_of(BlockKind::Stone), 3);
        assert_eq!(summary.world_hash, session.world().state_hash());
    }

    #[test]
    fn summary_tracks_jump() {
        let mut session = Session::default();
        session.start();
        session.jump();
        let summary = SessionInspector::summary(&session);
        assert!(summary.airborne);
        assert_eq!(summary.pending_restores, 1);
        assert!(summary.to_string().contains("airborne (1 pending)"));

        session.advance(Duration::from_millis(500));
        let summary = SessionInspector::summary(&session);
        assert!(!summary.airborne);
        assert_eq!(summary.clock_ms, 500);
    }

    #[test]
    fn huge_clock_saturates() {
        let mut session = Session::default();
        session.advance(Duration::MAX);
        session.advance(Duration::from_millis(1));
        let summary = SessionInspector::summary(&session);
        assert_eq!(summary.clock_ms, u64::MAX);
    }

    #[test]
    fn display_lists_every_kind() {
        let mut session = Session::default();
        session.start();
        let text = SessionInspector::summary(&session).to_string();
        assert!(text.contains("mode=running"));
        for kind in BlockKind::ALL {
            assert!(text.contains(&format!("{kind}=")), "{kind}");
        }
        assert!(text.contains("grounded"));
    }
}
