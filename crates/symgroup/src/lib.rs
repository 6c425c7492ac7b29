//! Symmetry operations and finite symmetry groups in three dimensions.
//!
//! Layers
//! - `op`: affine symmetry operations `x ↦ W x + w` and their builders
//!   (rotation, reflection, rotoreflection, screw, glide, inversion).
//! - `group`: the ordered `PointGroup` container and the axial group families
//!   (Schoenflies C_n, S_n, C_nh, C_nv, D_n, D_nh, D_nd, plus screw/glide groups).
//!
//! Conventions
//! - Angles are in degrees; axes need not be normalised.
//! - Identity is always the first element of a constructed group.
//! - Geometric contract violations (non-perpendicular axes, zero axes) panic;
//!   recoverable failures are reported through `SymError`.

pub mod cfg;
pub mod error;
pub mod float;
pub mod group;
pub mod op;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::SymCfg;
pub use error::{SymError, SymResult};
pub use group::PointGroup;
pub use op::SymOp;
pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};

/// Common exports for callers building groups.
pub mod prelude {
    pub use crate::group::axial::*;
    pub use crate::op::{glide, inversion, reflection, rotation, rotoreflection, screw};
    pub use crate::{PointGroup, SymCfg, SymError, SymOp};
    pub use nalgebra::{Matrix3 as Mat3, Vector3 as Vec3};
}
