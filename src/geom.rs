//! Point and rectangle value types shared by coordinate resolution and the
//! wire model.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

/// A 2D position in CSS pixels.
///
/// Used both for raw client (viewport) coordinates and for the normalized
/// coordinates carried in a [`crate::envelope::DrawEnvelope`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A target element's bounding rectangle at the time of one raw event.
///
/// Always a fresh snapshot; never cached across events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TargetRect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner of the rectangle.
    #[must_use]
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }
}
