use serde::{Deserialize, Serialize};
use std::fmt;

/// A key as named by the host keyboard event stream.
///
/// Single letters are case-folded, so `W` and `w` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Char(char),
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Any other host key name, kept verbatim.
    Named(String),
}

impl Key {
    /// Parse a host key name. Never fails; unknown names become `Named`.
    pub fn parse(name: &str) -> Self {
        if name == " " || name.eq_ignore_ascii_case("space") || name == "Spacebar" {
            return Key::Space;
        }
        let arrows = [
            ("ArrowUp", Key::ArrowUp),
            ("ArrowDown", Key::ArrowDown),
            ("ArrowLeft", Key::ArrowLeft),
            ("ArrowRight", Key::ArrowRight),
        ];
        for (arrow, key) in arrows {
            if name.eq_ignore_ascii_case(arrow) {
                return key;
            }
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c.to_ascii_lowercase()),
            _ => Key::Named(name.to_string()),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Space => "space".into(),
            Key::ArrowUp => "ArrowUp".into(),
            Key::ArrowDown => "ArrowDown".into(),
            Key::ArrowLeft => "ArrowLeft".into(),
            Key::ArrowRight => "ArrowRight".into(),
            Key::Named(name) => name.clone(),
        }
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::parse(&name)
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.name()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
