//! Tolerance defaults for 3D geometry (internal).
//!
//! Policy
//! - One absolute epsilon for every comparison: coordinates, squared distances,
//!   dot products and matrix entries. Solids are expected at O(1) scale; far
//!   above 1e3 squared-distance rounding exceeds `EPS` and equidistance tests
//!   start to miss.
//! - Fixed constant on purpose; callers rescale inputs instead of passing
//!   tolerances around.

use nalgebra::{Point3, Vector3};

/// Shared equality epsilon.
pub const EPS: f64 = 1e-7;

#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPS
}

/// Component-wise point equality.
#[inline]
pub fn points_eq(a: &Point3<f64>, b: &Point3<f64>) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

#[inline]
pub fn vectors_eq(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

#[inline]
pub fn is_zero(v: &Vector3<f64>) -> bool {
    vectors_eq(v, &Vector3::zeros())
}
