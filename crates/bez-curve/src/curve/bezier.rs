//! Bezier curve over an arbitrary number of control points.

use std::fmt;

use bez_core::traits::Validate;
use bez_core::{BezError, Result};
use bez_math::Point2;
use serde::{Deserialize, Serialize};

use super::Curve;
use crate::bernstein;
use crate::elevate;

/// Shape class of a curve, determined by its control-point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurveKind {
    Linear,
    Quadratic,
    Cubic,
    General { degree: usize },
}

impl CurveKind {
    /// Minimum number of control points for any curve.
    pub const MIN_POINTS: usize = 2;

    pub fn from_len(len: usize) -> Result<Self> {
        match len {
            0 | 1 => Err(BezError::invalid_argument(format!(
                "a curve needs at least {} control points, got {}",
                Self::MIN_POINTS,
                len
            ))),
            2 => Ok(Self::Linear),
            3 => Ok(Self::Quadratic),
            4 => Ok(Self::Cubic),
            n => Ok(Self::General { degree: n - 1 }),
        }
    }

    pub fn degree(self) -> usize {
        match self {
            Self::Linear => 1,
            Self::Quadratic => 2,
            Self::Cubic => 3,
            Self::General { degree } => degree,
        }
    }

    pub fn point_count(self) -> usize {
        self.degree() + 1
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Quadratic => write!(f, "quadratic"),
            Self::Cubic => write!(f, "cubic"),
            Self::General { degree } => write!(f, "degree-{}", degree),
        }
    }
}

/// How a curve point is computed.
///
/// Both methods give the same curve; De Casteljau avoids large binomial
/// coefficients at high degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvalMethod {
    #[default]
    DeCasteljau,
    Bernstein,
}

/// A Bezier curve defined by two or more control points, parameterized over `[0, 1]`.
///
/// The first and last control points are the anchors; the curve passes
/// through both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point2>", into = "Vec<Point2>")]
pub struct BezierCurve {
    control_points: Vec<Point2>,
}

impl BezierCurve {
    pub fn new(control_points: Vec<Point2>) -> Result<Self> {
        let curve = Self { control_points };
        curve.validate()?;
        Ok(curve)
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn into_control_points(self) -> Vec<Point2> {
        self.control_points
    }

    pub fn kind(&self) -> CurveKind {
        match self.control_points.len() {
            2 => CurveKind::Linear,
            3 => CurveKind::Quadratic,
            4 => CurveKind::Cubic,
            n => CurveKind::General { degree: n - 1 },
        }
    }

    pub fn degree(&self) -> usize {
        self.control_points.len() - 1
    }

    pub fn start(&self) -> Point2 {
        self.control_points[0]
    }

    pub fn end(&self) -> Point2 {
        self.control_points[self.control_points.len() - 1]
    }

    /// Evaluate the curve at `t` with an explicit method.
    pub fn point_at_with(&self, t: f64, method: EvalMethod) -> Point2 {
        match method {
            EvalMethod::DeCasteljau => bernstein::curve_point(&self.control_points, t),
            EvalMethod::Bernstein => bernstein::bernstein_point(&self.control_points, t),
        }
    }

    /// The same curve expressed with one more control point.
    pub fn elevated(&self) -> Self {
        Self {
            control_points: elevate::elevate_once(&self.control_points),
        }
    }
}

impl TryFrom<Vec<Point2>> for BezierCurve {
    type Error = BezError;

    fn try_from(control_points: Vec<Point2>) -> Result<Self> {
        Self::new(control_points)
    }
}

impl From<BezierCurve> for Vec<Point2> {
    fn from(curve: BezierCurve) -> Self {
        curve.control_points
    }
}

impl Validate for BezierCurve {
    fn validate(&self) -> Result<()> {
        CurveKind::from_len(self.control_points.len())?;
        if let Some(i) = self
            .control_points
            .iter()
            .position(|p| !p.is_finite())
        {
            return Err(BezError::invalid_argument(format!(
                "control point {} is not finite: {}",
                i, self.control_points[i]
            )));
        }
        Ok(())
    }
}

impl Curve for BezierCurve {
    fn point_at(&self, t: f64) -> Point2 {
        self.point_at_with(t, EvalMethod::DeCasteljau)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.start() == self.end()
    }
}
