//! Editing session: control points, selection, zoom, and the cached curve.

use bez_core::traits::Validate;
use bez_core::{BezError, Result};
use bez_curve::{elevate, evaluate_exact, CurveKind};
use bez_math::{Aabb2, PixelPoint, Point2};

use crate::config::SessionConfig;
use crate::frame::Frame;
use crate::zoom::Zoom;

/// Live state of one curve being edited.
///
/// Every mutating method ends in [`Session::on_control_points_changed`], so
/// the cached curve always matches the control points.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    control_points: Vec<Point2>,
    curve_points: Vec<PixelPoint>,
    selected: Option<usize>,
    zoom: Zoom,
    stops: usize,
    canvas: Aabb2,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        let canvas = config.canvas();
        let control_points = config
            .initial_points
            .iter()
            .map(|&p| canvas.clamp_point(p))
            .collect();

        let mut session = Self {
            zoom: Zoom::from_config(&config),
            stops: config.stops,
            canvas,
            control_points,
            curve_points: Vec::new(),
            selected: None,
            config,
        };
        session.on_control_points_changed()?;
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn control_points(&self) -> &[Point2] {
        &self.control_points
    }

    pub fn curve_points(&self) -> &[PixelPoint] {
        &self.curve_points
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn scale(&self) -> f64 {
        self.zoom.scale()
    }

    pub fn stops(&self) -> usize {
        self.stops
    }

    pub fn canvas(&self) -> Aabb2 {
        self.canvas
    }

    pub fn kind(&self) -> CurveKind {
        debug_assert!(
            self.control_points.len() >= CurveKind::MIN_POINTS,
            "session holds {} control points",
            self.control_points.len()
        );
        match self.control_points.len() {
            0..=2 => CurveKind::Linear,
            3 => CurveKind::Quadratic,
            4 => CurveKind::Cubic,
            n => CurveKind::General { degree: n - 1 },
        }
    }

    pub fn scaled_control_point_size(&self) -> i32 {
        self.zoom.scaled(self.config.control_point_size)
    }

    pub fn scaled_curve_point_size(&self) -> i32 {
        self.zoom.scaled(self.config.curve_point_size)
    }

    /// Whether [`Session::remove_point`] would succeed.
    pub fn can_remove(&self) -> bool {
        self.control_points.len() > CurveKind::MIN_POINTS
    }

    /// Select the first control point whose marker covers `pointer`.
    pub fn press(&mut self, pointer: Point2) -> Option<usize> {
        let radius = f64::from(self.scaled_control_point_size()) / 2.0;
        self.selected = self
            .control_points
            .iter()
            .position(|p| p.distance(pointer) <= radius);
        self.selected
    }

    pub fn release(&mut self) {
        self.selected = None;
    }

    /// Move the selected control point to `pointer`, clamped to the canvas.
    ///
    /// Returns `false` and leaves everything untouched when nothing is selected.
    pub fn drag_to(&mut self, pointer: Point2) -> Result<bool> {
        let Some(index) = self.selected else {
            return Ok(false);
        };
        let clamped = self.canvas.clamp_point(pointer);
        self.control_points = self
            .control_points
            .iter()
            .enumerate()
            .map(|(i, &p)| if i == index { clamped } else { p })
            .collect();
        self.on_control_points_changed()?;
        Ok(true)
    }

    /// Apply a mouse-wheel rotation to the marker scale.
    pub fn zoom(&mut self, wheel_rotation: f64) -> f64 {
        self.zoom.apply_wheel(wheel_rotation)
    }

    /// Add a control point by degree elevation; the curve keeps its shape.
    pub fn add_point(&mut self) -> Result<()> {
        self.control_points = elevate(&self.control_points)?;
        log::info!("Control point added, now {}", self.control_points.len());
        self.on_control_points_changed()
    }

    /// Drop the last control point.
    ///
    /// # Errors
    /// `InvalidArgument` when only two control points remain.
    pub fn remove_point(&mut self) -> Result<()> {
        if !self.can_remove() {
            return Err(BezError::invalid_argument(format!(
                "cannot remove a control point below {}",
                CurveKind::MIN_POINTS
            )));
        }
        self.control_points.pop();
        if self.selected.is_some_and(|i| i >= self.control_points.len()) {
            self.selected = None;
        }
        log::info!("Control point removed, now {}", self.control_points.len());
        self.on_control_points_changed()
    }

    pub fn set_stops(&mut self, stops: usize) -> Result<()> {
        self.stops = stops;
        self.on_control_points_changed()
    }

    /// Replace the canvas bounds and pull every control point inside them.
    pub fn set_canvas(&mut self, canvas: Aabb2) -> Result<()> {
        self.canvas = canvas;
        self.control_points = self
            .control_points
            .iter()
            .map(|&p| canvas.clamp_point(p))
            .collect();
        self.on_control_points_changed()
    }

    /// Replace all control points at once.
    pub fn set_control_points(&mut self, points: Vec<Point2>) -> Result<()> {
        CurveKind::from_len(points.len())?;
        self.control_points = points
            .into_iter()
            .map(|p| self.canvas.clamp_point(p))
            .collect();
        self.selected = None;
        self.on_control_points_changed()
    }

    /// Recompute the cached curve from the current control points.
    pub fn on_control_points_changed(&mut self) -> Result<()> {
        let curve = evaluate_exact(&self.control_points, self.stops)?;
        self.curve_points = curve.into_iter().map(PixelPoint::truncate).collect();
        log::debug!(
            "Curve rebuilt: {} control points, {} samples",
            self.control_points.len(),
            self.curve_points.len()
        );
        Ok(())
    }

    /// Snapshot for the next redraw.
    pub fn frame(&self) -> Frame {
        Frame {
            control_points: self
                .control_points
                .iter()
                .map(|&p| PixelPoint::truncate(p))
                .collect(),
            curve_points: self.curve_points.clone(),
            control_point_size: self.scaled_control_point_size(),
            curve_point_size: self.scaled_curve_point_size(),
            selected: self.selected,
        }
    }
}
