//! Developer tooling: session inspector and the slot view-models behind the
//! inventory panel and hotbar.
//!
//! # Invariants
//! - Tools only read a `Session`; they never mutate it.
//! - Slot layouts have a fixed length regardless of inventory size.

pub mod inspector;
pub mod slots;

pub use inspector::{SessionInspector, SessionSummary};
pub use slots::{HOTBAR_SLOTS, INVENTORY_SLOTS, Slot, hotbar, inventory_panel};

pub fn crate_info() -> &'static str {
    "blockscape-tools v0.1.0"
}
