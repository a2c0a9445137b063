//! Connection-scoped interception of draw events.
//!
//! ARCHITECTURE
//! ============
//! [`DrawBinder`] composes with the transport's top-level event binder
//! instead of replacing it: binding always runs the base step first, then
//! layers the two grouped pointer bindings on top. Targeting — walking from
//! a raw event's target to the marked element and reading the protocol event
//! name it declared — belongs to the binding source; this module only
//! decides what happens once a targeted event arrives.

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::bridge::PointerBridge;
use crate::consts::{MOVE_FAMILY, START_FAMILY};
use crate::input::PointerInput;
use crate::resolver::CoordPolicy;
use crate::view::View;

/// A raw event already routed by targeting: the neutral event description
/// plus the protocol event name the marked element declared for it.
#[derive(Debug)]
pub struct TargetedEvent {
    /// The raw event, with geometry taken from the marked element.
    pub input: PointerInput,
    /// Declared protocol event name from the element's marker attribute.
    pub declared: String,
    /// Set by the handler when the raw event's default action must be
    /// suppressed; applied by the binding source after dispatch.
    pub prevent_default: bool,
}

impl TargetedEvent {
    #[must_use]
    pub fn new(input: PointerInput, declared: impl Into<String>) -> Self {
        Self { input, declared: declared.into(), prevent_default: false }
    }
}

/// Handler invoked by a binding source for each targeted event.
pub type TargetedDispatch = Box<dyn FnMut(&mut TargetedEvent)>;

/// The transport's top-level binding step.
pub trait TopLevelBinder {
    /// Install this binder's event bindings.
    fn bind_top_level_events(&mut self);
}

/// A source of targeted events: registers one dispatch for a family of raw
/// event types and routes every matching event to it.
pub trait TargetableSource {
    /// Register `dispatch` for every raw event type in `types`.
    fn bind_targetable(&mut self, types: &'static [&'static str], dispatch: TargetedDispatch);
}

/// Connection-scoped draw binder: wraps a base binder and layers the
/// interaction-start and interaction-move families on top of its bindings.
///
/// The bridge — and with it the one interaction state for the whole
/// connection — is shared into both dispatch closures. There is no
/// leave/cancel family here: an interaction stays open until a start-family
/// event with a non-`"drawstart"` declaration closes it.
pub struct DrawBinder<B, V: View> {
    base: B,
    bridge: Rc<RefCell<PointerBridge<V>>>,
}

impl<B, V> DrawBinder<B, V>
where
    B: TopLevelBinder + TargetableSource,
    V: View + 'static,
{
    /// Create a binder over `base`, pushing through `view`.
    ///
    /// `policy` selects how coordinates are normalized; both the
    /// element-relative and the viewport-absolute form are in production use.
    #[must_use]
    pub fn new(base: B, view: V, policy: CoordPolicy) -> Self {
        Self {
            base,
            bridge: Rc::new(RefCell::new(PointerBridge::new(view, policy))),
        }
    }

    /// Whether the connection currently has an interaction in progress.
    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.bridge.borrow().is_drawing()
    }

    /// The wrapped base binder.
    pub fn base_mut(&mut self) -> &mut B {
        &mut self.base
    }

    fn bind_pointer(&mut self) {
        let bridge = Rc::clone(&self.bridge);
        self.base.bind_targetable(
            &START_FAMILY,
            Box::new(move |ev| {
                ev.prevent_default = true;
                bridge.borrow_mut().handle_targeted_start(&ev.input, &ev.declared);
            }),
        );

        let bridge = Rc::clone(&self.bridge);
        self.base.bind_targetable(
            &MOVE_FAMILY,
            Box::new(move |ev| {
                ev.prevent_default = true;
                bridge.borrow_mut().handle_targeted_move(&ev.input, &ev.declared);
            }),
        );
    }
}

impl<B, V> TopLevelBinder for DrawBinder<B, V>
where
    B: TopLevelBinder + TargetableSource,
    V: View + 'static,
{
    /// Base bindings first, then the pointer families on top.
    fn bind_top_level_events(&mut self) {
        self.base.bind_top_level_events();
        self.bind_pointer();
    }
}
