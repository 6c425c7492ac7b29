//! Affine symmetry operations in R³.
//!
//! Purpose
//! - `SymOp`: the value type `x ↦ W x + w` with composition, inverse and
//!   tolerance-aware equality.
//! - Builders for the elementary operations of point and space groups.
//!
//! Conventions
//! - Angles are in degrees and converted to radians internally.
//! - Axes are normalised before use; a zero-length axis panics.
//! - Only screws and glides carry a translation.

mod build;
mod types;

pub use build::{
    cross_matrix, glide, inversion, reflection, reflection_from_slice, reflection_matrix,
    rotation, rotation_matrix, rotoreflection, screw, unit_axis,
};
pub use types::SymOp;
