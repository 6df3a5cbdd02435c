//! Curve trait and the Bezier curve implementation.

mod bezier;

use bez_math::Point2;

pub use bezier::{BezierCurve, CurveKind, EvalMethod};

/// Trait for parametric curves in the drawing plane.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point2;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
