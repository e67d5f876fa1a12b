use serde::{Deserialize, Serialize};
use std::fmt;

/// Session phase. Gates which input handling is active.
///
/// `NotStarted -> Running <-> InventoryOpen`. No terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    #[default]
    NotStarted,
    Running,
    InventoryOpen,
}

impl GameMode {
    /// The mode after an explicit start action, if the start is allowed.
    pub fn started(self) -> Option<Self> {
        match self {
            GameMode::NotStarted => Some(GameMode::Running),
            _ => None,
        }
    }

    /// The mode after the inventory toggle, if the toggle is allowed.
    pub fn toggled(self) -> Option<Self> {
        match self {
            GameMode::Running => Some(GameMode::InventoryOpen),
            GameMode::InventoryOpen => Some(GameMode::Running),
            GameMode::NotStarted => None,
        }
    }

    /// The mode after an explicit close of the inventory panel. Only an
    /// open inventory can be closed.
    pub fn closed(self) -> Option<Self> {
        match self {
            GameMode::InventoryOpen => Some(GameMode::Running),
            _ => None,
        }
    }

    /// Whether movement, look, and jump input is honored.
    pub fn accepts_movement(self) -> bool {
        self == GameMode::Running
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::NotStarted => "not started",
            GameMode::Running => "running",
            GameMode::InventoryOpen => "inventory open",
        })
    }
}
