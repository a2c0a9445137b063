//! Coordinate-resolution strategies.
//!
//! Both bridge variants share the same control flow and differ only in how a
//! raw client position becomes the normalized coordinate carried on the wire.
//! The strategy is injected at bridge construction rather than baked into a
//! variant, so the event wiring and the state machine exist exactly once.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::geom::Point;
use crate::input::PointerInput;

/// How a raw client position is normalized before being sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoordPolicy {
    /// Subtract the target element's bounding-box origin. The box is
    /// re-queried on every event, so scrolling and resizing are always
    /// reflected.
    ElementRelative,
    /// Pass the raw viewport position through unchanged.
    ViewportAbsolute,
}

impl CoordPolicy {
    /// Resolve the normalized coordinate for one raw event.
    ///
    /// Offsets are not clamped to the target's bounds; a pointer above or
    /// left of the origin resolves to negative coordinates. A target without
    /// a usable layout box resolves as if its origin were (0, 0), so the
    /// output equals the raw client position; this is logged because it
    /// usually means the marked element left the layout tree mid-gesture.
    #[must_use]
    pub fn resolve(self, input: &PointerInput) -> Point {
        match self {
            Self::ViewportAbsolute => input.client,
            Self::ElementRelative => match input.target_rect {
                Some(rect) => Point::new(input.client.x - rect.x, input.client.y - rect.y),
                None => {
                    log::warn!(
                        "no target geometry for {}; falling back to viewport coordinates",
                        input.raw_type
                    );
                    input.client
                }
            },
        }
    }
}
