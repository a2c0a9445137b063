//! The pointer-to-protocol bridge core.
//!
//! DESIGN
//! ======
//! Both bridge variants share this one core: an interaction state machine,
//! an injected coordinate policy, and the emit path. The element-scoped
//! variant drives the press/move/release/leave entry points, where the phase
//! names are fixed; the connection-scoped binder drives the targeted entry
//! points, where the phase name is whatever the marked element declared.
//! Separated from the DOM layer so every control-flow property is testable
//! without a browser.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use crate::consts::{DRAW, DRAW_END, DRAW_START, EVENT_CHANNEL};
use crate::envelope::DrawEnvelope;
use crate::input::PointerInput;
use crate::resolver::CoordPolicy;
use crate::state::DrawState;
use crate::view::View;

/// Translates raw input events into protocol envelopes on one view.
///
/// Owns exactly one [`DrawState`]. Element-scoped usage creates one bridge
/// per mounted element; connection-scoped usage creates one bridge for the
/// whole connection, shared across every marked element.
pub struct PointerBridge<V: View> {
    view: V,
    policy: CoordPolicy,
    state: DrawState,
}

impl<V: View> PointerBridge<V> {
    /// Create a bridge over `view` with the given coordinate policy.
    #[must_use]
    pub fn new(view: V, policy: CoordPolicy) -> Self {
        Self { view, policy, state: DrawState::Idle }
    }

    /// Whether an interaction is currently in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    // ── Element-scoped entry points ─────────────────────────────

    /// Press on the bound element: open the interaction and emit `drawstart`.
    pub fn handle_press(&mut self, input: &PointerInput) {
        self.state = DrawState::Drawing;
        self.emit(input, DRAW_START);
    }

    /// Movement over the bound element: emit `draw` only mid-interaction;
    /// otherwise the event is dropped, not queued.
    pub fn handle_move(&mut self, input: &PointerInput) {
        if self.state.is_drawing() {
            self.emit(input, DRAW);
        }
    }

    /// Release on the bound element: close the interaction and emit
    /// `drawend`. Emission is unconditional, even without a prior press.
    pub fn handle_release(&mut self, input: &PointerInput) {
        self.state = DrawState::Idle;
        self.emit(input, DRAW_END);
    }

    /// Pointer left the bound element: treated as an implicit release.
    pub fn handle_leave(&mut self, input: &PointerInput) {
        self.handle_release(input);
    }

    // ── Connection-scoped entry points ──────────────────────────

    /// Start-family event routed by targeting, carrying the protocol event
    /// name the marked element declared for it.
    ///
    /// Only an exact `"drawstart"` declaration opens the interaction; any
    /// other declared name closes it. The envelope is emitted either way and
    /// carries the declared name.
    pub fn handle_targeted_start(&mut self, input: &PointerInput, declared: &str) {
        self.state = DrawState::for_declared_event(declared);
        self.emit(input, declared);
    }

    /// Move-family event routed by targeting: emit only mid-interaction.
    pub fn handle_targeted_move(&mut self, input: &PointerInput, declared: &str) {
        if self.state.is_drawing() {
            self.emit(input, declared);
        }
    }

    fn emit(&self, input: &PointerInput, event: &str) {
        let value = self.policy.resolve(input);
        let envelope = DrawEnvelope::new(input.raw_type.clone(), event, value);
        self.view.push_with_reply(EVENT_CHANNEL, &envelope);
    }
}
