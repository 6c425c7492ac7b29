//! Recoverable errors of operation and group construction.
//!
//! Geometric contract violations (non-perpendicular axes, a glide translation
//! leaving its mirror plane, zero-length axes) are not represented here; they
//! panic at the call site.

use thiserror::Error;

/// Errors reported by builders, constructors and the group container.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SymError {
    /// A 3D builder received a vector with the wrong number of components.
    #[error(
        "the axis must be a 3 component vector, got {got} components; \
         for reflections in 2 dimensions use a planar reflection instead"
    )]
    InvalidDimension { got: usize },

    /// The screw rotation did not return to identity within the iteration bound.
    #[error("screw angle {angle}° does not close within {max_order} iterations")]
    ScrewNotClosed { angle: f64, max_order: usize },

    /// An axis of (numerically) zero length was supplied.
    #[error("axis must have non-zero length")]
    DegenerateAxis,

    /// An angle or vector component was NaN or infinite.
    #[error("non-finite input: {0}")]
    NonFinite(String),

    /// The group contains translations but no lattice to reduce them against.
    #[error("group contains translations; attach a unit cell before computing products")]
    MissingUnitCell,

    /// A product of two elements is not an element of the group.
    #[error("product of elements {left} and {right} is not in the group")]
    NotClosed { left: usize, right: usize },

    /// The inverse of an element is not an element of the group.
    #[error("inverse of element {index} is not in the group")]
    MissingInverse { index: usize },
}

pub type SymResult<T> = Result<T, SymError>;
