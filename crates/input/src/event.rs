use std::time::Duration;

use crate::key::Key;

/// Raw events delivered by the host, in the order they happened.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The title screen's start action.
    Start,
    KeyDown(Key),
    /// Relative mouse motion since the previous event.
    MouseMove { movement_x: f32, movement_y: f32 },
    /// The inventory panel's close control.
    CloseInventory,
    /// A click on the game surface.
    Click,
    /// The host granted or revoked pointer capture.
    PointerCaptureChanged { active: bool },
    /// Wall-clock time passed since the previous `Elapsed`.
    Elapsed(Duration),
}

impl InputEvent {
    pub fn key(name: &str) -> Self {
        InputEvent::KeyDown(Key::parse(name))
    }

    pub fn mouse(movement_x: f32, movement_y: f32) -> Self {
        InputEvent::MouseMove {
            movement_x,
            movement_y,
        }
    }
}
