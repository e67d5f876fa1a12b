use blockscape_kernel::MoveDirection;
use serde::{Deserialize, Serialize};

use crate::key::Key;

/// What a bound key asks the session to do.
///
/// The session consumes actions, never raw key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Move(MoveDirection),
    Jump,
    ToggleInventory,
}

/// Key mapping configuration. Each action may have several keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: Vec<Key>,
    pub backward: Vec<Key>,
    pub left: Vec<Key>,
    pub right: Vec<Key>,
    pub jump: Vec<Key>,
    pub inventory: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: vec![Key::Char('w'), Key::ArrowUp],
            backward: vec![Key::Char('s'), Key::ArrowDown],
            left: vec![Key::Char('a'), Key::ArrowLeft],
            right: vec![Key::Char('d'), Key::ArrowRight],
            jump: vec![Key::Space],
            inventory: vec![Key::Char('e')],
        }
    }
}

impl KeyBindings {
    /// Resolve a key to its action. The inventory binding wins over every
    /// other binding for the same key.
    pub fn action_for(&self, key: &Key) -> Option<Action> {
        if self.inventory.contains(key) {
            return Some(Action::ToggleInventory);
        }
        let moves = [
            (&self.forward, MoveDirection::Forward),
            (&self.backward, MoveDirection::Backward),
            (&self.left, MoveDirection::Left),
            (&self.right, MoveDirection::Right),
        ];
        for (keys, direction) in moves {
            if keys.contains(key) {
                return Some(Action::Move(direction));
            }
        }
        if self.jump.contains(key) {
            return Some(Action::Jump);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings() {
        let b = KeyBindings::default();
        assert_eq!(
            b.action_for(&Key::Char('w')),
            Some(Action::Move(MoveDirection::Forward))
        );
        assert_eq!(
            b.action_for(&Key::ArrowRight),
            Some(Action::Move(MoveDirection::Right))
        );
        assert_eq!(b.action_for(&Key::Space), Some(Action::Jump));
        assert_eq!(b.action_for(&Key::Char('e')), Some(Action::ToggleInventory));
        assert_eq!(b.action_for(&Key::Char('q')), None);
        assert_eq!(b.action_for(&Key::Named("Shift".into())), None);
    }

    #[test]
    fn inventory_binding_takes_priority() {
        let b = KeyBindings {
            inventory: vec![Key::Char('w')],
            ..KeyBindings::default()
        };
        assert_eq!(b.action_for(&Key::Char('w')), Some(Action::ToggleInventory));
    }

    #[test]
    fn bindings_deserialize_from_key_names() {
        let b: KeyBindings = serde_yaml::from_str("jump: [j, \" \"]\ninventory: [Tab]\n").unwrap();
        assert_eq!(b.jump, vec![Key::Char('j'), Key::Space]);
        assert_eq!(b.inventory, vec![Key::Named("Tab".into())]);
        assert_eq!(b.forward, KeyBindings::default().forward);
    }
}
