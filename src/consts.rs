//! Shared literals for the draw event protocol.

// ── Wire ────────────────────────────────────────────────────────

/// Channel every envelope is pushed on.
pub const EVENT_CHANNEL: &str = "event";

/// Phase name: an interaction began.
pub const DRAW_START: &str = "drawstart";

/// Phase name: movement while an interaction is active.
pub const DRAW: &str = "draw";

/// Phase name: an interaction ended.
pub const DRAW_END: &str = "drawend";

// ── Event routing ───────────────────────────────────────────────

/// Raw event types routed to the combined interaction-start handler.
pub const START_FAMILY: [&str; 4] = ["touchstart", "touchend", "mousedown", "mouseup"];

/// Raw event types routed to the combined interaction-move handler.
pub const MOVE_FAMILY: [&str; 2] = ["touchmove", "mousemove"];

/// Prefix of the declarative marker attribute. An element opts into
/// interception by declaring, per raw event type, the protocol event name it
/// maps to, e.g. `data-draw-mousedown="drawstart"`.
pub const MARKER_ATTR_PREFIX: &str = "data-draw-";
