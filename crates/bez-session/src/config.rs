//! Session configuration.
//!
//! `SessionConfig` holds every value the editor lets a user change. The
//! `const` values are the defaults and the fallback for missing TOML keys.

use std::path::Path;

use bez_core::traits::Validate;
use bez_core::{BezError, Result};
use bez_math::{Aabb2, Point2};
use serde::{Deserialize, Serialize};

// ── Curve ───────────────────────────────────────────────────────────

/// Samples computed along the curve.
pub const STOPS: usize = 200;

// ── Markers ─────────────────────────────────────────────────────────

/// Control-point marker diameter in pixels at scale 1.0.
pub const CONTROL_POINT_SIZE: f64 = 10.0;
/// Curve-point marker diameter in pixels at scale 1.0.
pub const CURVE_POINT_SIZE: f64 = 3.0;

// ── Zoom ────────────────────────────────────────────────────────────

/// Smallest marker scale.
pub const MIN_SCALE: f64 = 0.7;
/// Largest marker scale.
pub const MAX_SCALE: f64 = 3.0;
/// One wheel notch changes the scale by `1 / ZOOM_STEP_DIVISOR`.
pub const ZOOM_STEP_DIVISOR: f64 = 10.0;

// ── Canvas ──────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Anchors of the curve shown on startup.
pub const INITIAL_POINTS: [(f64, f64); 2] = [(100.0, 100.0), (200.0, 200.0)];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub stops: usize,
    pub control_point_size: f64,
    pub curve_point_size: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_step_divisor: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub initial_points: Vec<Point2>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stops: STOPS,
            control_point_size: CONTROL_POINT_SIZE,
            curve_point_size: CURVE_POINT_SIZE,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_step_divisor: ZOOM_STEP_DIVISOR,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            initial_points: INITIAL_POINTS
                .iter()
                .map(|&(x, y)| Point2::new(x, y))
                .collect(),
        }
    }
}

impl SessionConfig {
    /// Load from a TOML file. Falls back to defaults when the file is missing,
    /// unreadable, or invalid.
    pub fn load_from_file(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                log::info!("Session config loaded from {}", path.display());
                config
            }
            Err(BezError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No session config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Session config {} rejected, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate a TOML file.
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            toml::from_str(&content).map_err(|e| BezError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write as pretty-printed TOML.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| BezError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        log::info!("Session config saved to {}", path.display());
        Ok(())
    }

    pub fn canvas(&self) -> Aabb2 {
        Aabb2::from_size(self.canvas_width, self.canvas_height)
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_points.len() < 2 {
            return Err(BezError::Config(format!(
                "initial_points needs at least 2 entries, got {}",
                self.initial_points.len()
            )));
        }
        if let Some(i) = self.initial_points.iter().position(|p| !p.is_finite()) {
            return Err(BezError::Config(format!(
                "initial_points[{}] is not finite: {}",
                i, self.initial_points[i]
            )));
        }
        let sizes = [
            ("control_point_size", self.control_point_size),
            ("curve_point_size", self.curve_point_size),
            ("min_scale", self.min_scale),
            ("zoom_step_divisor", self.zoom_step_divisor),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(BezError::Config(format!("{} must be positive, got {}", name, value)));
            }
        }
        if !(self.max_scale.is_finite() && self.min_scale <= self.max_scale) {
            return Err(BezError::Config(format!(
                "min_scale {} exceeds max_scale {}",
                self.min_scale, self.max_scale
            )));
        }
        Ok(())
    }
}
