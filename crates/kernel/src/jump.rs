use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::JumpConfig;
use crate::player::Player;

/// How a jump issued while another is in flight is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpPolicy {
    /// Ignore jumps while airborne. Every jump nets zero displacement.
    #[default]
    Exclusive,
    /// Every jump schedules its own restore, but the dip is measured from the
    /// height at which the first overlapping jump launched. Two jumps inside
    /// one delay leave the player one jump height above where they started.
    Overlapping,
}

/// Observable jump phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpState {
    Grounded,
    Airborne {
        /// Time until the next restore fires.
        next_restore: Duration,
        /// Restores still scheduled.
        pending: usize,
    },
}

/// Scripted pseudo-jump: the player rises at once and is put back after a
/// fixed delay. Not physics; nothing collides.
///
/// Restores are driven by `advance`, never by a host timer. There is no
/// cancellation; a scheduled restore always fires.
#[derive(Debug, Clone)]
pub struct JumpEngine {
    policy: JumpPolicy,
    height: f32,
    duration: Duration,
    /// Remaining delay of every scheduled restore, in schedule order.
    pending: Vec<Duration>,
    launch_y: f32,
}

impl JumpEngine {
    pub fn new(config: &JumpConfig) -> Self {
        Self {
            policy: config.policy,
            height: config.height,
            duration: config.duration(),
            pending: Vec::new(),
            launch_y: 0.0,
        }
    }

    pub fn policy(&self) -> JumpPolicy {
        self.policy
    }

    pub fn state(&self) -> JumpState {
        match self.pending.iter().min() {
            None => JumpState::Grounded,
            Some(&next_restore) => JumpState::Airborne {
                next_restore,
                pending: self.pending.len(),
            },
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.pending.is_empty()
    }

    /// Start a jump. Returns false if the policy refused it.
    pub fn jump(&mut self, player: &mut Player) -> bool {
        if self.pending.is_empty() {
            self.launch_y = player.position.y;
        } else if self.policy == JumpPolicy::Exclusive {
            tracing::debug!("jump ignored while airborne");
            return false;
        }
        // up is negative y
        player.position.y = self.launch_y - self.height;
        self.pending.push(self.duration);
        tracing::debug!(
            y = player.position.y,
            pending = self.pending.len(),
            "jump started"
        );
        true
    }

    /// Let `elapsed` pass. Every restore whose delay ran out adds the jump
    /// height back. Returns how many restores fired.
    pub fn advance(&mut self, elapsed: Duration, player: &mut Player) -> usize {
        let mut fired = 0;
        self.pending.retain_mut(|remaining| {
            *remaining = remaining.saturating_sub(elapsed);
            if remaining.is_zero() {
                fired += 1;
                false
            } else {
                true
            }
        });
        if fired > 0 {
            player.position.y += self.height * fired as f32;
            tracing::debug!(fired, y = player.position.y, "jump restored");
        }
        fired
    }

    /// Drop every scheduled restore without applying it. Used when a new
    /// session replaces the player.
    pub fn reset(&mut self) {
        self.pending.clear();
    }
}

impl Default for JumpEngine {
    fn default() -> Self {
        Self::new(&JumpConfig::default())
    }
}
