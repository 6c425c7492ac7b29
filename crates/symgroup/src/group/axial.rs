//! Axial point groups and screw/glide groups.
//!
//! Naming follows Schoenflies notation: `c_n` ↔ C_n, `c_nh` ↔ C_nh, and so on.
//! Descriptive aliases (`rotation_group`, `pyramidal`, `dihedral`, ...) are
//! re-exported alongside.
//!
//! Composite groups are built as products of two generating groups
//! (`&a * &b`); see `PointGroup::compose`.
//!
//! Preconditions
//! - `n >= 1`.
//! - Pairs `(axis, axis2)` must be perpendicular (`axis·axis2 ≈ 0`); violating
//!   this panics.
//! - Screw and glide groups are only valid together with a compatible unit cell.

use nalgebra::Vector3;

use crate::cfg::SymCfg;
use crate::error::{SymError, SymResult};
use crate::float::{are_perpendicular, is_approx_int_eps};
use crate::group::PointGroup;
use crate::op::{glide, inversion, reflection, rotation, rotoreflection, screw, SymOp};

pub use self::c_n as rotation_group;
pub use self::c_nv as pyramidal;
pub use self::d_n as dihedral;
pub use self::d_nd as antiprismatic;
pub use self::d_nh as prismatic;
pub use self::s_n as rotoreflection_group;

#[inline]
fn assert_perpendicular(axis: &Vector3<f64>, axis2: &Vector3<f64>) {
    assert!(
        are_perpendicular(axis, axis2),
        "axes {axis:?} and {axis2:?} must be perpendicular"
    );
}

#[inline]
fn step_angle(n: usize, i: usize) -> f64 {
    360.0 / n as f64 * i as f64
}

/// C_n: rotations by multiples of 360°/n around `axis`.
pub fn c_n(n: usize, axis: Vector3<f64>) -> PointGroup {
    assert!(n >= 1, "group index must be positive");
    let mut elems = Vec::with_capacity(n);
    elems.push(SymOp::identity());
    elems.extend((1..n).map(|i| rotation(step_angle(n, i), axis)));
    PointGroup::new(elems)
}

/// S_n: rotoreflections by multiples of 360°/n around `axis`.
///
/// For odd `n` this coincides with C_nh. For even `n` the odd powers of the
/// generator are rotoreflections and the even powers plain rotations.
pub fn s_n(n: usize, axis: Vector3<f64>) -> PointGroup {
    assert!(n >= 1, "group index must be positive");
    if n % 2 == 1 {
        return c_nh(n, axis);
    }
    let mut elems = Vec::with_capacity(n);
    elems.push(SymOp::identity());
    elems.extend((1..n).map(|i| {
        if i % 2 == 1 {
            rotoreflection(step_angle(n, i), axis)
        } else {
            rotation(step_angle(n, i), axis)
        }
    }));
    PointGroup::new(elems)
}

/// Z_2 generated by the reflection across the plane normal to `axis`.
pub fn reflection_group(axis: Vector3<f64>) -> PointGroup {
    PointGroup::new(vec![SymOp::identity(), reflection(axis)])
}

/// Z_2 generated by inversion through the origin.
pub fn inversion_group() -> PointGroup {
    PointGroup::new(vec![SymOp::identity(), inversion()])
}

/// Z_2 generated by a glide (see `op::glide`). Panics unless `axis ⟂ trans`.
pub fn glide_group(axis: Vector3<f64>, trans: Vector3<f64>, origin: Vector3<f64>) -> PointGroup {
    PointGroup::new(vec![SymOp::identity(), glide(axis, trans, origin)])
}

/// Group generated by the screw `screw(angle, trans, origin)`, with default tolerances.
pub fn screw_group(angle: f64, trans: Vector3<f64>, origin: Vector3<f64>) -> SymResult<PointGroup> {
    screw_group_with(angle, trans, origin, &SymCfg::default())
}

/// Group generated by a screw: `{I} ∪ {screw(i·angle, i·trans, origin)}` for
/// `i = 1, 2, …` up to (excluding) the first `i` with `i·angle/360` an integer.
///
/// The order is bounded by `cfg.max_screw_order`; angles that do not close
/// within it yield `SymError::ScrewNotClosed`. An angle that is a multiple of
/// 360° gives the trivial group. Panics on `trans == 0` unless the group is trivial.
pub fn screw_group_with(
    angle: f64,
    trans: Vector3<f64>,
    origin: Vector3<f64>,
    cfg: &SymCfg,
) -> SymResult<PointGroup> {
    if !angle.is_finite() {
        return Err(SymError::NonFinite(format!("screw angle {angle}")));
    }
    if trans.iter().chain(origin.iter()).any(|x| !x.is_finite()) {
        return Err(SymError::NonFinite(format!(
            "screw translation {trans:?} / origin {origin:?}"
        )));
    }
    let mut elems = vec![SymOp::identity()];
    for i in 1..=cfg.max_screw_order {
        let k = i as f64;
        if is_approx_int_eps(k * angle / 360.0, cfg.int_eps) {
            tracing::debug!(angle, order = i, "screw group closed");
            return Ok(PointGroup::new(elems));
        }
        elems.push(screw(k * angle, trans * k, origin));
    }
    tracing::warn!(angle, max_order = cfg.max_screw_order, "screw group did not close");
    Err(SymError::ScrewNotClosed {
        angle,
        max_order: cfg.max_screw_order,
    })
}

/// C_nh: C_n plus the mirror plane normal to `axis`.
pub fn c_nh(n: usize, axis: Vector3<f64>) -> PointGroup {
    &reflection_group(axis) * &c_n(n, axis)
}

/// C_nv: C_n plus a mirror plane containing `axis`, with normal `axis2`.
pub fn c_nv(n: usize, axis: Vector3<f64>, axis2: Vector3<f64>) -> PointGroup {
    assert_perpendicular(&axis, &axis2);
    &reflection_group(axis2) * &c_n(n, axis)
}

/// D_n: C_n plus a twofold axis `axis2` perpendicular to `axis`.
pub fn d_n(n: usize, axis: Vector3<f64>, axis2: Vector3<f64>) -> PointGroup {
    assert_perpendicular(&axis, &axis2);
    &c_n(2, axis2) * &c_n(n, axis)
}

/// D_nh: D_n plus the mirror plane normal to `axis`.
pub fn d_nh(n: usize, axis: Vector3<f64>, axis2: Vector3<f64>) -> PointGroup {
    &reflection_group(axis) * &d_n(n, axis, axis2)
}

/// D_nd: S_2n around `axis` plus a mirror plane containing `axis`, with normal `axis2`.
pub fn d_nd(n: usize, axis: Vector3<f64>, axis2: Vector3<f64>) -> PointGroup {
    assert_perpendicular(&axis, &axis2);
    &reflection_group(axis2) * &s_n(2 * n, axis)
}

/// Rotational symmetries of a cuboid with edges along the Cartesian axes (D_2).
pub fn cuboid_rotations() -> PointGroup {
    d_n(2, Vector3::z(), Vector3::x())
}

/// Full symmetry group of a cuboid with edges along the Cartesian axes (D_2h).
pub fn cuboid() -> PointGroup {
    d_nh(2, Vector3::z(), Vector3::x())
}
