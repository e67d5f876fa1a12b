use blockscape_kernel::{GameMode, Session};

use crate::binding::{Action, KeyBindings};
use crate::event::InputEvent;
use crate::pointer::PointerCapture;

/// Whether an event changed anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored,
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Outcome::Applied
        } else {
            Outcome::Ignored
        }
    }
}

/// Something the router needs the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRequest {
    AcquirePointerCapture,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub outcome: Outcome,
    pub request: Option<HostRequest>,
}

impl Response {
    fn outcome(outcome: impl Into<Outcome>) -> Self {
        Self {
            outcome: outcome.into(),
            request: None,
        }
    }
}

/// Maps host input events onto session operations.
///
/// Runs on the single event-dispatch sequence; events are handled one at a
/// time in delivery order.
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    bindings: KeyBindings,
    pointer: PointerCapture,
}

impl InputRouter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            pointer: PointerCapture::default(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn pointer(&self) -> PointerCapture {
        self.pointer
    }

    pub fn handle(&mut self, session: &mut Session, event: &InputEvent) -> Response {
        match event {
            InputEvent::Start => Response::outcome(session.start()),
            InputEvent::KeyDown(key) => {
                let Some(action) = self.bindings.action_for(key) else {
                    tracing::trace!(%key, "unbound key");
                    return Response::outcome(Outcome::Ignored);
                };
                let applied = match action {
                    Action::ToggleInventory => session.toggle_inventory(),
                    Action::Move(direction) => session.move_player(direction),
                    Action::Jump => session.jump(),
                };
                Response::outcome(applied)
            }
            InputEvent::CloseInventory => Response::outcome(session.close_inventory()),
            InputEvent::MouseMove {
                movement_x,
                movement_y,
            } => {
                if !self.pointer.is_active() {
                    return Response::outcome(Outcome::Ignored);
                }
                Response::outcome(session.look(*movement_x, *movement_y))
            }
            InputEvent::Click => {
                if session.mode() != GameMode::Running || !self.pointer.request() {
                    return Response::outcome(Outcome::Ignored);
                }
                tracing::debug!("pointer capture requested");
                Response {
                    outcome: Outcome::Applied,
                    request: Some(HostRequest::AcquirePointerCapture),
                }
            }
            InputEvent::PointerCaptureChanged { active } => {
                self.pointer.host_changed(*active);
                tracing::debug!(active, "pointer capture changed");
                Response::outcome(Outcome::Applied)
            }
            InputEvent::Elapsed(elapsed) => {
                session.advance(*elapsed);
                Response::outcome(Outcome::Applied)
            }
        }
    }
}
