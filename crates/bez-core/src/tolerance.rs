/// Tolerances for comparing curve coordinates.
///
/// `linear` is measured in canvas units, `pixel` is the slack allowed when
/// outputs are truncated to integer pixels.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Linear tolerance for distance comparisons (in canvas units)
    pub linear: f64,
    /// Slack for truncated pixel output (in whole pixels)
    pub pixel: i32,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;
    pub const DEFAULT_PIXEL: i32 = 1;

    pub fn new(linear: f64, pixel: i32) -> Self {
        Self { linear, pixel }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            pixel: Self::DEFAULT_PIXEL,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Check if two pixel coordinates differ by at most the pixel slack
    pub fn pixel_eq(self, a: i32, b: i32) -> bool {
        (a - b).abs() <= self.pixel
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_eq() {
        let tol = Tolerance::default();
        assert!(tol.linear_eq(1.0, 1.0 + 1e-12));
        assert!(!tol.linear_eq(1.0, 1.001));
    }

    #[test]
    fn test_pixel_eq() {
        let tol = Tolerance::default();
        assert!(tol.pixel_eq(10, 11));
        assert!(tol.pixel_eq(10, 9));
        assert!(!tol.pixel_eq(10, 12));
    }
}
