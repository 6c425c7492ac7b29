//! Finite symmetry groups: the `PointGroup` container and the axial families.
//!
//! Purpose
//! - `PointGroup`: an ordered list of `SymOp` with the `@`-style product
//!   (`&a * &b`), duplicate removal and product tables.
//! - `axial`: constructors for groups built around a principal axis.
//!
//! Assumptions
//! - Identity comes first. Constructors put it there and `compose` preserves
//!   it, since `I ∘ I` is the first product formed.
//! - Constructors do not check closure; `product_table` does.

pub mod axial;
mod types;

pub use types::PointGroup;

#[cfg(test)]
mod tests;
