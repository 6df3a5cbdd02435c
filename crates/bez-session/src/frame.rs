//! Drawable snapshot of a session.

use bez_math::PixelPoint;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs for one redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub control_points: Vec<PixelPoint>,
    pub curve_points: Vec<PixelPoint>,
    /// Control-point marker diameter in pixels
    pub control_point_size: i32,
    /// Curve-point marker diameter in pixels
    pub curve_point_size: i32,
    pub selected: Option<usize>,
}

impl Frame {
    /// Top-left corner and diameter of the marker centred on `p`.
    pub fn marker_rect(p: PixelPoint, size: i32) -> (PixelPoint, i32) {
        (PixelPoint::new(p.x - size / 2, p.y - size / 2), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_rect_centres_marker() {
        let (corner, size) = Frame::marker_rect(PixelPoint::new(100, 50), 10);
        assert_eq!(corner, PixelPoint::new(95, 45));
        assert_eq!(size, 10);

        let (corner, _) = Frame::marker_rect(PixelPoint::new(100, 50), 3);
        assert_eq!(corner, PixelPoint::new(99, 49));
    }
}
