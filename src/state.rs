//! The interaction state machine shared by both bridge variants.
//!
//! DESIGN
//! ======
//! Two states, three transitions: a press opens an interaction, a release or
//! a pointer-leave closes it. The state is an explicit field on the owning
//! bridge rather than a flag captured inside handler closures, so every
//! transition is visible at the call site and testable in isolation.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::consts::DRAW_START;

/// Whether an interaction is currently in progress.
///
/// Exactly one writer exists per scope: the element-scoped bridge mutates its
/// own instance, the connection-scoped binder mutates the single instance
/// held for the whole connection. Handlers read and write it synchronously,
/// one event at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawState {
    /// No interaction in progress; waiting for the next press.
    #[default]
    Idle,
    /// A press opened an interaction that has not yet ended.
    Drawing,
}

impl DrawState {
    /// Whether move events should currently produce `draw` envelopes.
    #[must_use]
    pub fn is_drawing(self) -> bool {
        matches!(self, Self::Drawing)
    }

    /// State after a start-family event carrying `declared` as its protocol
    /// event name.
    ///
    /// Only an exact `"drawstart"` opens an interaction; any other declared
    /// name — including a release-type event routed into the start family —
    /// closes one.
    #[must_use]
    pub fn for_declared_event(declared: &str) -> Self {
        if declared == DRAW_START {
            Self::Drawing
        } else {
            Self::Idle
        }
    }
}
