//! Scalar tolerance predicates.

use nalgebra::Vector3;

use crate::cfg::{INT_EPS, PERP_EPS};

/// `|x − round(x)| <= INT_EPS`.
#[inline]
pub fn is_approx_int(x: f64) -> bool {
    is_approx_int_eps(x, INT_EPS)
}

/// `|x − round(x)| <= atol`. Non-finite inputs are never integers.
#[inline]
pub fn is_approx_int_eps(x: f64, atol: f64) -> bool {
    x.is_finite() && (x - x.round()).abs() <= atol
}

/// `|x| <= PERP_EPS`.
#[inline]
pub fn near_zero(x: f64) -> bool {
    x.abs() <= PERP_EPS
}

/// Perpendicularity via a near-zero dot product (inputs are not normalised).
#[inline]
pub fn are_perpendicular(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    near_zero(a.dot(b))
}
