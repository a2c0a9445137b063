//! Browser wiring for both bridge variants.
//!
//! Everything here needs a DOM. The element-scoped mount installs four
//! listeners directly on one element; [`DocumentBinder`] is the
//! document-level targeting source for the connection-scoped binder,
//! resolving `data-draw-<rawtype>` markers. Listeners are installed for the
//! lifetime of the page; there is no unbind step.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, MouseEvent, TouchEvent};

use crate::binder::{TargetableSource, TargetedDispatch, TargetedEvent, TopLevelBinder};
use crate::bridge::PointerBridge;
use crate::consts::MARKER_ATTR_PREFIX;
use crate::geom::{Point, TargetRect};
use crate::input::PointerInput;
use crate::view::View;

/// Pointer position in client coordinates for a mouse or touch event.
///
/// Touch events report positions per touch point; the first active touch —
/// or, once all fingers have lifted, the first released one — stands in for
/// the pointer.
fn client_point(event: &Event) -> Option<Point> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())));
    }
    if let Some(touch_event) = event.dyn_ref::<TouchEvent>() {
        let touch = touch_event
            .touches()
            .get(0)
            .or_else(|| touch_event.changed_touches().get(0))?;
        return Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())));
    }
    None
}

/// The element's bounding rectangle, queried fresh.
fn bounding_rect(element: &Element) -> TargetRect {
    let rect = element.get_bounding_client_rect();
    TargetRect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

/// Install one permanent listener on `target`, forwarding each event as a
/// [`PointerInput`] whose geometry comes from `geometry_source`.
fn install<F>(target: &Element, raw_type: &str, geometry_source: Element, handle: F)
where
    F: Fn(&PointerInput) + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        let Some(client) = client_point(&event) else {
            return;
        };
        let input = PointerInput::new(event.type_(), client, Some(bounding_rect(&geometry_source)));
        handle(&input);
    }) as Box<dyn FnMut(Event)>);

    if target
        .add_event_listener_with_callback(raw_type, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("failed to bind {raw_type} listener");
    }
    closure.forget();
}

/// Mount an element-scoped bridge: press, move, release, and leave handlers
/// wired directly to `element`, with coordinates relative to its box.
///
/// The bridge lives as long as the element; the listeners are intentionally
/// never removed.
pub fn mount_surface<V: View + 'static>(element: &HtmlElement, bridge: PointerBridge<V>) {
    let element: Element = element.clone().into();
    let bridge = Rc::new(RefCell::new(bridge));

    let b = Rc::clone(&bridge);
    install(&element, "mousedown", element.clone(), move |input| {
        b.borrow_mut().handle_press(input);
    });

    let b = Rc::clone(&bridge);
    install(&element, "mousemove", element.clone(), move |input| {
        b.borrow_mut().handle_move(input);
    });

    let b = Rc::clone(&bridge);
    install(&element, "mouseup", element.clone(), move |input| {
        b.borrow_mut().handle_release(input);
    });

    let b = Rc::clone(&bridge);
    install(&element, "mouseleave", element.clone(), move |input| {
        b.borrow_mut().handle_leave(input);
    });
}

/// Document-level targeting source for the connection-scoped binder.
///
/// For each bound raw event type this installs one document listener. On
/// dispatch it walks from the event target to the closest element carrying
/// `data-draw-<rawtype>`, reads the declared protocol event name from that
/// attribute, and hands the routed event to the registered dispatch.
/// Unmarked events fall through to default handling untouched.
pub struct DocumentBinder {
    document: web_sys::Document,
}

impl DocumentBinder {
    /// Bind against the window's document.
    #[must_use]
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn install_targeted(&self, raw_type: &'static str, dispatch: Rc<RefCell<TargetedDispatch>>) {
        let attr = format!("{MARKER_ATTR_PREFIX}{raw_type}");
        let selector = format!("[{attr}]");

        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(target) = event.target() else {
                return;
            };
            let Ok(target) = target.dyn_into::<Element>() else {
                return;
            };
            let Ok(Some(marked)) = target.closest(&selector) else {
                return;
            };
            let Some(declared) = marked.get_attribute(&attr) else {
                return;
            };
            let Some(client) = client_point(&event) else {
                return;
            };

            let input = PointerInput::new(event.type_(), client, Some(bounding_rect(&marked)));
            let mut targeted = TargetedEvent::new(input, declared);
            (dispatch.borrow_mut())(&mut targeted);
            if targeted.prevent_default {
                event.prevent_default();
            }
        }) as Box<dyn FnMut(Event)>);

        if self
            .document
            .add_event_listener_with_callback(raw_type, closure.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("failed to bind document {raw_type} listener");
        }
        closure.forget();
    }
}

impl TopLevelBinder for DocumentBinder {
    /// The transport's own top-level bindings live outside this crate; this
    /// source contributes none of its own.
    fn bind_top_level_events(&mut self) {}
}

impl TargetableSource for DocumentBinder {
    fn bind_targetable(&mut self, types: &'static [&'static str], dispatch: TargetedDispatch) {
        let dispatch = Rc::new(RefCell::new(dispatch));
        for raw_type in types {
            self.install_targeted(raw_type, Rc::clone(&dispatch));
        }
    }
}
