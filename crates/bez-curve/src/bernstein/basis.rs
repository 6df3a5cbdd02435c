//! Bernstein polynomial basis.

use bez_math::Point2;

/// Binomial coefficient `C(n, k)` as a float.
///
/// Computed multiplicatively so intermediate values stay small.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1.0;
    for i in 0..k {
        c = c * (n - i) as f64 / (i + 1) as f64;
    }
    c
}

/// Compute all `degree + 1` Bernstein basis values at parameter `t`.
///
/// `B[i] = C(n, i) * (1 - t)^(n - i) * t^i` with `n = degree`.
pub fn bernstein_basis(degree: usize, t: f64) -> Vec<f64> {
    let mt = 1.0 - t;
    (0..=degree)
        .map(|i| binomial(degree, i) * mt.powi((degree - i) as i32) * t.powi(i as i32))
        .collect()
}

/// Evaluate a Bezier curve point at parameter `t` as an explicit Bernstein sum.
pub fn bernstein_point(control_points: &[Point2], t: f64) -> Point2 {
    let Some(degree) = control_points.len().checked_sub(1) else {
        return Point2::ZERO;
    };

    bernstein_basis(degree, t)
        .into_iter()
        .zip(control_points)
        .fold(Point2::ZERO, |acc, (b, &p)| acc + b * p)
}
