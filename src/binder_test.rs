use super::*;

use crate::envelope::DrawEnvelope;
use crate::geom::{Point, TargetRect};
use crate::view::ReplyRef;

/// Records every push a bridge makes.
#[derive(Clone, Default)]
struct RecordingView {
    pushes: Rc<RefCell<Vec<DrawEnvelope>>>,
}

impl RecordingView {
    fn envelopes(&self) -> Vec<DrawEnvelope> {
        self.pushes.borrow().clone()
    }

    fn last(&self) -> DrawEnvelope {
        self.envelopes().last().cloned().expect("at least one push")
    }

    fn count(&self) -> usize {
        self.pushes.borrow().len()
    }
}

impl View for RecordingView {
    fn push_with_reply(&self, _channel: &str, envelope: &DrawEnvelope) -> ReplyRef {
        let mut pushes = self.pushes.borrow_mut();
        pushes.push(envelope.clone());
        ReplyRef(pushes.len() as u64)
    }
}

struct Binding {
    types: &'static [&'static str],
    dispatch: TargetedDispatch,
}

/// Base binder fake: records its own bind step and every family
/// registration, and replays routed events into the dispatches the way
/// document-level targeting would.
#[derive(Default)]
struct FakeSource {
    calls: Vec<String>,
    bindings: Vec<Binding>,
}

impl FakeSource {
    /// Route a raw event to whichever family binding covers its type.
    /// Returns `Some(prevent_default)` when a binding matched.
    fn fire(&mut self, raw_type: &'static str, client: Point, rect: Option<TargetRect>, declared: &str) -> Option<bool> {
        let mut outcome = None;
        for binding in &mut self.bindings {
            if binding.types.contains(&raw_type) {
                let input = PointerInput::new(raw_type, client, rect);
                let mut event = TargetedEvent::new(input, declared);
                (binding.dispatch)(&mut event);
                outcome = Some(event.prevent_default);
            }
        }
        outcome
    }

    fn registered_families(&self) -> Vec<&'static [&'static str]> {
        self.bindings.iter().map(|b| b.types).collect()
    }
}

impl TopLevelBinder for FakeSource {
    fn bind_top_level_events(&mut self) {
        self.calls.push("base".to_owned());
    }
}

impl TargetableSource for FakeSource {
    fn bind_targetable(&mut self, types: &'static [&'static str], dispatch: TargetedDispatch) {
        self.calls.push(format!("bind:{}", types.join(",")));
        self.bindings.push(Binding { types, dispatch });
    }
}

fn bound_binder(policy: CoordPolicy) -> (DrawBinder<FakeSource, RecordingView>, RecordingView) {
    let view = RecordingView::default();
    let mut binder = DrawBinder::new(FakeSource::default(), view.clone(), policy);
    binder.bind_top_level_events();
    (binder, view)
}

fn surface_rect() -> TargetRect {
    TargetRect::new(10.0, 20.0, 300.0, 200.0)
}

#[test]
fn base_bindings_run_before_pointer_bindings() {
    let (mut binder, _view) = bound_binder(CoordPolicy::ElementRelative);
    assert_eq!(
        binder.base_mut().calls,
        vec![
            "base",
            "bind:touchstart,touchend,mousedown,mouseup",
            "bind:touchmove,mousemove",
        ]
    );
}

#[test]
fn binds_only_start_and_move_families() {
    // No leave/cancel family exists in this variant, unlike the
    // element-scoped bridge; adding one is a protocol decision, so this
    // test pins the exact set.
    let (mut binder, _view) = bound_binder(CoordPolicy::ElementRelative);
    let families = binder.base_mut().registered_families();
    assert_eq!(families.len(), 2);
    assert_eq!(families[0], &["touchstart", "touchend", "mousedown", "mouseup"]);
    assert_eq!(families[1], &["touchmove", "mousemove"]);
}

#[test]
fn start_event_declared_drawstart_opens_interaction() {
    let (mut binder, view) = bound_binder(CoordPolicy::ElementRelative);

    let handled = binder
        .base_mut()
        .fire("mousedown", Point::new(50.0, 80.0), Some(surface_rect()), "drawstart");

    assert_eq!(handled, Some(true));
    assert!(binder.is_drawing());
    assert_eq!(
        view.last(),
        DrawEnvelope::new("mousedown", "drawstart", Point::new(40.0, 60.0))
    );
}

#[test]
fn start_event_declared_drawend_closes_and_still_emits() {
    let (mut binder, view) = bound_binder(CoordPolicy::ElementRelative);

    binder
        .base_mut()
        .fire("mousedown", Point::new(50.0, 80.0), Some(surface_rect()), "drawstart");
    binder
        .base_mut()
        .fire("mouseup", Point::new(55.0, 85.0), Some(surface_rect()), "drawend");

    assert!(!binder.is_drawing());
    assert_eq!(view.count(), 2);
    assert_eq!(view.last().event, "drawend");
}

#[test]
fn move_family_emits_only_while_drawing() {
    let (mut binder, view) = bound_binder(CoordPolicy::ElementRelative);

    binder
        .base_mut()
        .fire("mousemove", Point::new(60.0, 80.0), Some(surface_rect()), "draw");
    assert_eq!(view.count(), 0);

    binder
        .base_mut()
        .fire("mousedown", Point::new(50.0, 80.0), Some(surface_rect()), "drawstart");
    binder
        .base_mut()
        .fire("mousemove", Point::new(60.0, 80.0), Some(surface_rect()), "draw");

    assert_eq!(view.count(), 2);
    assert_eq!(
        view.last(),
        DrawEnvelope::new("mousemove", "draw", Point::new(50.0, 60.0))
    );
}

#[test]
fn both_families_request_default_suppression() {
    let (mut binder, _view) = bound_binder(CoordPolicy::ElementRelative);

    let start = binder
        .base_mut()
        .fire("touchstart", Point::new(50.0, 80.0), Some(surface_rect()), "drawstart");
    assert_eq!(start, Some(true));

    // Suppression is requested on the move family even while idle.
    binder
        .base_mut()
        .fire("touchend", Point::new(50.0, 80.0), Some(surface_rect()), "drawend");
    let idle_move = binder
        .base_mut()
        .fire("touchmove", Point::new(60.0, 80.0), Some(surface_rect()), "draw");
    assert_eq!(idle_move, Some(true));
}

#[test]
fn touch_and_mouse_types_route_to_the_same_handlers() {
    let (mut binder, view) = bound_binder(CoordPolicy::ElementRelative);

    binder
        .base_mut()
        .fire("touchstart", Point::new(50.0, 80.0), Some(surface_rect()), "drawstart");
    binder
        .base_mut()
        .fire("touchmove", Point::new(60.0, 80.0), Some(surface_rect()), "draw");

    assert!(binder.is_drawing());
    assert_eq!(view.count(), 2);
    assert_eq!(view.last().raw_type, "touchmove");
}

#[test]
fn one_interaction_state_spans_all_marked_elements() {
    let (mut binder, view) = bound_binder(CoordPolicy::ElementRelative);

    binder
        .base_mut()
        .fire("mousedown", Point::new(50.0, 80.0), Some(surface_rect()), "drawstart");

    // A different marked element (different geometry) on the same connection.
    let other_rect = TargetRect::new(200.0, 300.0, 100.0, 100.0);
    binder
        .base_mut()
        .fire("mousemove", Point::new(250.0, 350.0), Some(other_rect), "draw");

    assert_eq!(view.count(), 2);
    assert_eq!(view.last().value, Point::new(50.0, 50.0));
}

#[test]
fn drawing_persists_across_unbound_raw_types() {
    // The bound families carry no leave equivalent, so a pointer leaving
    // the surface does not end the interaction in this variant.
    let (mut binder, view) = bound_binder(CoordPolicy::ElementRelative);

    binder
        .base_mut()
        .fire("mousedown", Point::new(50.0, 80.0), Some(surface_rect()), "drawstart");
    let unrouted = binder
        .base_mut()
        .fire("mouseleave", Point::new(0.0, 0.0), Some(surface_rect()), "drawend");

    assert_eq!(unrouted, None);
    assert!(binder.is_drawing());

    binder
        .base_mut()
        .fire("mousemove", Point::new(60.0, 80.0), Some(surface_rect()), "draw");
    assert_eq!(view.count(), 2);
}

#[test]
fn viewport_absolute_binder_passes_client_through() {
    let (mut binder, view) = bound_binder(CoordPolicy::ViewportAbsolute);

    binder
        .base_mut()
        .fire("mousedown", Point::new(50.0, 80.0), Some(surface_rect()), "drawstart");

    assert_eq!(view.last().value, Point::new(50.0, 80.0));
}
