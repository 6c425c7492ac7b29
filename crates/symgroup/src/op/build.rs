//! Builders for the elementary symmetry operations.
//!
//! Formulas (angle θ in radians, unit axis a)
//! - rotation:       W = cosθ I + sinθ [a]_× + (1 − cosθ) a⊗a   (Rodrigues)
//! - reflection:     W = I − 2 a⊗a                                (a = plane normal)
//! - rotoreflection: W = W_refl · W_rot
//! - screw / glide:  w = trans + (I − W) origin, so that the axis / plane
//!   passes through `origin` instead of 0.

use nalgebra::{Matrix3, Vector3};

use super::types::SymOp;
use crate::error::{SymError, SymResult};
use crate::float::are_perpendicular;

/// Normalise `axis`.
///
/// Panics on a zero-length or non-finite axis.
#[inline]
pub fn unit_axis(axis: Vector3<f64>) -> Vector3<f64> {
    let norm = axis.norm();
    assert!(
        norm.is_finite() && norm > 0.0,
        "axis must be finite and non-zero, got {axis:?}"
    );
    axis / norm
}

/// Cross-product operator: `cross_matrix(a) * v == a × v`.
#[inline]
pub fn cross_matrix(a: Vector3<f64>) -> Matrix3<f64> {
    Matrix3::new(
        0.0, -a.z, a.y, //
        a.z, 0.0, -a.x, //
        -a.y, a.x, 0.0,
    )
}

/// Rodrigues rotation by `theta` radians around the unit vector `a`.
pub fn rotation_matrix(theta: f64, a: Vector3<f64>) -> Matrix3<f64> {
    let (s, c) = theta.sin_cos();
    Matrix3::identity() * c + cross_matrix(a) * s + a * a.transpose() * (1.0 - c)
}

/// Reflection across the plane normal to the unit vector `a`.
#[inline]
pub fn reflection_matrix(a: Vector3<f64>) -> Matrix3<f64> {
    Matrix3::identity() - a * a.transpose() * 2.0
}

/// Rotation by `angle` degrees around `axis`.
pub fn rotation(angle: f64, axis: Vector3<f64>) -> SymOp {
    SymOp::linear(rotation_matrix(angle.to_radians(), unit_axis(axis)))
}

/// Reflection across the plane through the origin with normal `axis`.
pub fn reflection(axis: Vector3<f64>) -> SymOp {
    SymOp::linear(reflection_matrix(unit_axis(axis)))
}

/// Reflection from a dynamically sized axis (e.g. parsed user input).
///
/// Only 3D axes are accepted; 2D mirror lines belong to planar symmetry.
pub fn reflection_from_slice(axis: &[f64]) -> SymResult<SymOp> {
    if axis.len() != 3 {
        return Err(SymError::InvalidDimension { got: axis.len() });
    }
    if axis.iter().any(|x| !x.is_finite()) {
        return Err(SymError::NonFinite(format!("reflection axis {axis:?}")));
    }
    let a = Vector3::from_column_slice(axis);
    if a.norm() == 0.0 {
        return Err(SymError::DegenerateAxis);
    }
    Ok(reflection(a))
}

/// Rotation by `angle` degrees around `axis` followed by reflection across the
/// plane normal to `axis`.
pub fn rotoreflection(angle: f64, axis: Vector3<f64>) -> SymOp {
    let a = unit_axis(axis);
    SymOp::linear(reflection_matrix(a) * rotation_matrix(angle.to_radians(), a))
}

/// Screw: rotation by `angle` degrees around the direction of `trans`, then a
/// translation by `trans`. The screw axis passes through `origin`.
pub fn screw(angle: f64, trans: Vector3<f64>, origin: Vector3<f64>) -> SymOp {
    let w = rotation_matrix(angle.to_radians(), unit_axis(trans));
    SymOp::new(w, trans + (Matrix3::identity() - w) * origin)
}

/// Glide: reflection across the plane through `origin` normal to `axis`, then
/// a translation by `trans` within that plane.
///
/// Panics unless `axis ⟂ trans`.
pub fn glide(axis: Vector3<f64>, trans: Vector3<f64>, origin: Vector3<f64>) -> SymOp {
    assert!(
        are_perpendicular(&axis, &trans),
        "glide translation {trans:?} must lie in the mirror plane normal to {axis:?}"
    );
    let w = reflection_matrix(unit_axis(axis));
    SymOp::new(w, trans + (Matrix3::identity() - w) * origin)
}

/// Inversion through the origin, `W = −I`.
#[inline]
pub fn inversion() -> SymOp {
    SymOp::linear(-Matrix3::identity())
}
