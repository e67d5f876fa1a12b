//! Input routing: host key, mouse, click, and pointer-capture events mapped
//! onto session operations.
//!
//! # Invariants
//! - The inventory toggle is checked before any other binding; one keystroke
//!   never both toggles and moves.
//! - Mouse-look is honored only while the host confirms pointer capture.
//! - Unknown keys are no-ops, never errors.

pub mod binding;
pub mod event;
pub mod key;
pub mod pointer;
pub mod router;
pub mod script;

pub use binding::{Action, KeyBindings};
pub use event::InputEvent;
pub use key::Key;
pub use pointer::PointerCapture;
pub use router::{HostRequest, InputRouter, Outcome, Response};
pub use script::{InputScript, ScriptError, ScriptStep};

pub fn crate_info() -> &'static str {
    "blockscape-input v0.1.0"
}
