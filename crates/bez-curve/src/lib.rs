//! Bezier studio curves: evaluation, degree elevation, and tessellation.

pub mod bernstein;
pub mod curve;
pub mod elevate;
pub mod evaluate;
pub mod tessellate;

pub use curve::{BezierCurve, Curve, CurveKind, EvalMethod};
pub use elevate::{elevate, elevate_by, elevate_pixels};
pub use evaluate::{
    cubic, cubic_slice, evaluate, evaluate_exact, evaluate_with, linear, linear_slice,
    quadratic, quadratic_slice, DEFAULT_STOPS,
};
