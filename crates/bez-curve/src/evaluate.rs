//! Curve evaluation: control points plus a sample count in, on-curve points out.
//!
//! Sampling is inclusive: `stops` yields `stops + 1` points at `t = i / stops`
//! for `i` in `0..=stops`, so both anchors are always emitted. A `stops` of
//! zero selects [`DEFAULT_STOPS`].
//!
//! The pixel entry points truncate every sample toward zero, per coordinate.
//! Samples come from De Casteljau in `f64` and are truncated afterwards, so a
//! coordinate whose exact value is a whole number can land one pixel below
//! what truncating a hand-expanded closed form (e.g. `y0 + (y1 - y0) * t`)
//! gives. Output may therefore differ by ±1 px from such implementations near
//! integer boundaries; anchors are always exact.

use bez_core::{BezError, Result};
use bez_math::{PixelPoint, Point2};

use crate::curve::{BezierCurve, CurveKind, EvalMethod};
use crate::tessellate;

/// Sample count used when a caller passes `0`.
pub const DEFAULT_STOPS: usize = 20;

/// Replace a zero sample count with [`DEFAULT_STOPS`].
pub fn resolve_stops(stops: usize) -> usize {
    if stops == 0 {
        DEFAULT_STOPS
    } else {
        stops
    }
}

/// Evaluate a curve of any degree in floating point.
pub fn evaluate_exact(points: &[Point2], stops: usize) -> Result<Vec<Point2>> {
    let curve = BezierCurve::new(points.to_vec())?;
    Ok(tessellate::sample_uniform(&curve, resolve_stops(stops)))
}

/// Evaluate a curve of any degree with an explicit evaluation method.
pub fn evaluate_with(points: &[Point2], stops: usize, method: EvalMethod) -> Result<Vec<Point2>> {
    let curve = BezierCurve::new(points.to_vec())?;
    let stops = resolve_stops(stops);
    Ok(tessellate::parameters(stops)
        .map(|t| curve.point_at_with(t, method))
        .collect())
}

/// Evaluate a curve of any degree, truncating every sample to whole pixels.
///
/// # Errors
/// `InvalidArgument` when fewer than two control points are given.
pub fn evaluate(points: &[PixelPoint], stops: usize) -> Result<Vec<PixelPoint>> {
    let points: Vec<Point2> = points.iter().map(|p| p.to_point2()).collect();
    Ok(evaluate_exact(&points, stops)?
        .into_iter()
        .map(PixelPoint::truncate)
        .collect())
}

/// Straight segment between two anchors.
pub fn linear(p0: PixelPoint, p1: PixelPoint, stops: usize) -> Vec<PixelPoint> {
    evaluate_fixed(&[p0, p1], stops)
}

/// Quadratic curve: two anchors and one control point.
pub fn quadratic(p0: PixelPoint, p1: PixelPoint, p2: PixelPoint, stops: usize) -> Vec<PixelPoint> {
    evaluate_fixed(&[p0, p1, p2], stops)
}

/// Cubic curve: two anchors and two control points.
pub fn cubic(
    p0: PixelPoint,
    p1: PixelPoint,
    p2: PixelPoint,
    p3: PixelPoint,
    stops: usize,
) -> Vec<PixelPoint> {
    evaluate_fixed(&[p0, p1, p2, p3], stops)
}

/// Like [`linear`], for a slice that must hold exactly two points.
pub fn linear_slice(points: &[PixelPoint], stops: usize) -> Result<Vec<PixelPoint>> {
    check_arity(points, CurveKind::Linear)?;
    evaluate(points, stops)
}

/// Like [`quadratic`], for a slice that must hold exactly three points.
pub fn quadratic_slice(points: &[PixelPoint], stops: usize) -> Result<Vec<PixelPoint>> {
    check_arity(points, CurveKind::Quadratic)?;
    evaluate(points, stops)
}

/// Like [`cubic`], for a slice that must hold exactly four points.
pub fn cubic_slice(points: &[PixelPoint], stops: usize) -> Result<Vec<PixelPoint>> {
    check_arity(points, CurveKind::Cubic)?;
    evaluate(points, stops)
}

fn check_arity(points: &[PixelPoint], kind: CurveKind) -> Result<()> {
    if points.len() != kind.point_count() {
        return Err(BezError::invalid_argument(format!(
            "a {} curve needs exactly {} control points, got {}",
            kind,
            kind.point_count(),
            points.len()
        )));
    }
    Ok(())
}

/// Pixel evaluation for callers that already hold a valid point count.
fn evaluate_fixed(points: &[PixelPoint], stops: usize) -> Vec<PixelPoint> {
    let curve: Vec<Point2> = points.iter().map(|p| p.to_point2()).collect();
    tessellate::parameters(resolve_stops(stops))
        .map(|t| PixelPoint::truncate(crate::bernstein::curve_point(&curve, t)))
        .collect()
}
