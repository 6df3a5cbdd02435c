pub mod aabb;
pub mod pixel;

pub use glam::{dvec2, DVec2};
pub use aabb::Aabb2;
pub use pixel::PixelPoint;

pub type Point2 = DVec2;

/// Linear interpolation between `a` and `b`.
///
/// Weighted as `(1 - t) * a + t * b` so `t = 0` and `t = 1` reproduce the
/// endpoints exactly.
#[inline]
pub fn lerp(a: Point2, b: Point2, t: f64) -> Point2 {
    (1.0 - t) * a + t * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp() {
        let p = lerp(dvec2(0.0, 0.0), dvec2(10.0, -4.0), 0.25);
        assert_relative_eq!(p.x, 2.5);
        assert_relative_eq!(p.y, -1.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = dvec2(3.0, 7.0);
        let b = dvec2(-5.0, 1.0);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }
}
