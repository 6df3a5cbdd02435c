//! Bezier core algorithms: De Casteljau evaluation and the Bernstein basis.

pub mod basis;
pub mod casteljau;

pub use basis::{bernstein_basis, bernstein_point, binomial};
pub use casteljau::*;
