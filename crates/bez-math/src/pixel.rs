//! Integer pixel coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point2;

/// A point on the drawing surface, in whole pixels.
///
/// Converting from [`Point2`] truncates each coordinate toward zero, the
/// same way a float-to-int cast does. Values outside the `i32` range
/// saturate and NaN maps to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn truncate(p: Point2) -> Self {
        Self {
            x: p.x as i32,
            y: p.y as i32,
        }
    }

    pub fn to_point2(self) -> Point2 {
        Point2::new(f64::from(self.x), f64::from(self.y))
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Self) -> f64 {
        self.to_point2().distance(other.to_point2())
    }
}

impl From<Point2> for PixelPoint {
    fn from(p: Point2) -> Self {
        Self::truncate(p)
    }
}

impl From<PixelPoint> for Point2 {
    fn from(p: PixelPoint) -> Self {
        p.to_point2()
    }
}

impl From<(i32, i32)> for PixelPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for PixelPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
