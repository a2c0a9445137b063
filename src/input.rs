//! Framework-neutral description of one raw pointer/touch event.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::{Point, TargetRect};

/// One raw input event as seen by a bridge.
///
/// The browser layer builds this from `web_sys` events; tests build it
/// directly. `target_rect` is the target element's bounding rectangle at the
/// moment the event fired, queried fresh every time so scrolling and resizing
/// never go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerInput {
    /// Raw DOM event type, e.g. `"mousedown"` or `"touchmove"`.
    pub raw_type: String,
    /// Pointer position in viewport (client) coordinates.
    pub client: Point,
    /// Target geometry at event time, if the element had a usable layout box.
    pub target_rect: Option<TargetRect>,
}

impl PointerInput {
    #[must_use]
    pub fn new(raw_type: impl Into<String>, client: Point, target_rect: Option<TargetRect>) -> Self {
        Self { raw_type: raw_type.into(), client, target_rect }
    }
}
