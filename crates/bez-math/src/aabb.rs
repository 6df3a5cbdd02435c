use crate::Point2;
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Box spanning `(0, 0)` to `(width, height)`, as a canvas is laid out.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self {
            min: Point2::ZERO,
            max: Point2::new(width, height),
        }
    }

    /// Move `p` onto the nearest point inside the box.
    pub fn clamp_point(&self, p: Point2) -> Point2 {
        p.max(self.min).min(self.max)
    }
}
