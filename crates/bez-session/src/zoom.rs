//! Marker zoom. Scales only the drawn marker sizes, never coordinates.

use crate::config::SessionConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    scale: f64,
    min: f64,
    max: f64,
    step_divisor: f64,
}

impl Zoom {
    pub fn new(min: f64, max: f64, step_divisor: f64) -> Self {
        Self {
            scale: 1.0_f64.max(min).min(max),
            min,
            max,
            step_divisor,
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(config.min_scale, config.max_scale, config.zoom_step_divisor)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Apply a wheel rotation. Positive rotation (scrolling toward the user)
    /// shrinks the markers.
    pub fn apply_wheel(&mut self, rotation: f64) -> f64 {
        self.set_scale(self.scale - rotation / self.step_divisor)
    }

    pub fn set_scale(&mut self, scale: f64) -> f64 {
        if scale.is_finite() {
            self.scale = scale.max(self.min).min(self.max);
        }
        self.scale
    }

    /// Marker size in whole pixels, truncated.
    pub fn scaled(&self, size: f64) -> i32 {
        (size * self.scale) as i32
    }
}
