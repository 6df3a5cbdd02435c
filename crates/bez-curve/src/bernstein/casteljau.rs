//! De Casteljau algorithm for Bezier evaluation.

use bez_math::{lerp, Point2};

/// Evaluate a Bezier curve point at parameter `t` using De Casteljau's algorithm.
///
/// Repeatedly interpolates between consecutive points until one remains.
/// An empty slice evaluates to the origin.
pub fn curve_point(control_points: &[Point2], t: f64) -> Point2 {
    let mut work = control_points.to_vec();
    let Some(n) = work.len().checked_sub(1) else {
        return Point2::ZERO;
    };

    for level in 0..n {
        for i in 0..n - level {
            work[i] = lerp(work[i], work[i + 1], t);
        }
    }

    work[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use bez_math::dvec2;

    #[test]
    fn test_curve_point_linear() {
        let cps = vec![dvec2(0.0, 0.0), dvec2(10.0, 4.0)];
        let p = curve_point(&cps, 0.5);
        assert!((p.x - 5.0).abs() < 1e-10);
        assert!((p.y - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_curve_point_quadratic() {
        let cps = vec![dvec2(0.0, 0.0), dvec2(0.5, 1.0), dvec2(1.0, 0.0)];

        let p = curve_point(&cps, 0.0);
        assert!((p.x - 0.0).abs() < 1e-10);

        let p = curve_point(&cps, 1.0);
        assert!((p.x - 1.0).abs() < 1e-10);

        let p = curve_point(&cps, 0.5);
        assert!((p.x - 0.5).abs() < 1e-10);
        assert!((p.y - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_curve_point_single_and_empty() {
        assert_eq!(curve_point(&[dvec2(3.0, 4.0)], 0.7), dvec2(3.0, 4.0));
        assert_eq!(curve_point(&[], 0.7), Point2::ZERO);
    }
}
