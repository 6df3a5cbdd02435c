//! Uniform sampling of curves into point sequences.

use bez_math::Point2;

use crate::curve::Curve;

/// Uniform parameters `i / stops` for `i` in `0..=stops`.
///
/// The last value is exactly `1.0`. `stops` must be non-zero.
pub fn parameters(stops: usize) -> impl Iterator<Item = f64> {
    debug_assert!(stops > 0, "stops must be positive");
    (0..=stops).map(move |i| i as f64 / stops as f64)
}

/// Sample a curve at `stops + 1` uniformly spaced parameters over its domain.
pub fn sample_uniform(curve: &dyn Curve, stops: usize) -> Vec<Point2> {
    let (t_min, t_max) = curve.domain();
    parameters(stops.max(1))
        .map(|s| curve.point_at(t_min + (t_max - t_min) * s))
        .collect()
}
