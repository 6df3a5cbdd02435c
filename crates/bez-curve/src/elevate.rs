//! Degree elevation: the same curve with one more control point.
//!
//! For a degree-`n` curve with points `P[0..=n]` the degree-`n+1` points are
//!
//! ```text
//! Q[0]     = P[0]
//! Q[i]     = i/(n+1) * P[i-1] + (1 - i/(n+1)) * P[i]    for i in 1..=n
//! Q[n+1]   = P[n]
//! ```

use bez_core::Result;
use bez_math::{PixelPoint, Point2};

use crate::curve::CurveKind;

/// Elevate a curve by one degree.
///
/// # Errors
/// `InvalidArgument` when fewer than two control points are given.
pub fn elevate(points: &[Point2]) -> Result<Vec<Point2>> {
    CurveKind::from_len(points.len())?;
    Ok(elevate_once(points))
}

/// Elevate a curve `times` times. `times == 0` returns the input unchanged.
pub fn elevate_by(points: &[Point2], times: usize) -> Result<Vec<Point2>> {
    CurveKind::from_len(points.len())?;
    let mut current = points.to_vec();
    for _ in 0..times {
        current = elevate_once(&current);
    }
    Ok(current)
}

/// Elevate pixel control points, truncating the new points toward zero.
pub fn elevate_pixels(points: &[PixelPoint]) -> Result<Vec<PixelPoint>> {
    let points: Vec<Point2> = points.iter().map(|p| p.to_point2()).collect();
    Ok(elevate(&points)?
        .into_iter()
        .map(PixelPoint::truncate)
        .collect())
}

/// Elevation without the length check; callers guarantee at least two points.
pub(crate) fn elevate_once(points: &[Point2]) -> Vec<Point2> {
    let n = points.len() - 1;
    let denom = (n + 1) as f64;

    let mut out = Vec::with_capacity(points.len() + 1);
    out.push(points[0]);
    for i in 1..=n {
        let a = i as f64 / denom;
        out.push(a * points[i - 1] + (1.0 - a) * points[i]);
    }
    out.push(points[n]);
    out
}
