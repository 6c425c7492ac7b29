//! The `PointGroup` container.

use nalgebra::Matrix3;

use crate::cfg::EQ_EPS;
use crate::error::{SymError, SymResult};
use crate::op::SymOp;

/// Ordered collection of symmetry operations acting on R^`ndim`.
///
/// Invariants:
/// - `elems[0]` is the identity for every group built by this crate.
/// - Element order is only kept for reproducibility.
/// - Groups containing screws or glides are well-formed only together with a
///   `unit_cell` whose lattice absorbs their translations. Without it,
///   `product_table` fails with `SymError::MissingUnitCell`.
#[derive(Clone, Debug)]
pub struct PointGroup {
    pub elems: Vec<SymOp>,
    pub ndim: usize,
    /// Primitive lattice vectors as columns.
    pub unit_cell: Option<Matrix3<f64>>,
}

impl PointGroup {
    #[inline]
    pub fn new(elems: Vec<SymOp>) -> Self {
        Self {
            elems,
            ndim: 3,
            unit_cell: None,
        }
    }

    /// Attach the lattice that translations are reduced against.
    pub fn with_unit_cell(mut self, cell: Matrix3<f64>) -> Self {
        self.unit_cell = Some(cell);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elems.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, SymOp> {
        self.elems.iter()
    }

    /// True if any element carries a non-zero translation (screws, glides).
    pub fn has_translations(&self) -> bool {
        self.elems.iter().any(|g| g.has_translation_eps(EQ_EPS))
    }

    /// Element equality used by this group (modulo the lattice if present).
    pub fn same(&self, a: &SymOp, b: &SymOp) -> bool {
        match &self.unit_cell {
            Some(cell) => a.approx_eq_mod_lattice(b, cell, EQ_EPS),
            None => a.approx_eq(b, EQ_EPS),
        }
    }

    /// Index of the first element equal to `op`.
    pub fn find(&self, op: &SymOp) -> Option<usize> {
        self.elems.iter().position(|g| self.same(g, op))
    }

    /// Drop later copies of repeated elements, keeping first occurrences.
    pub fn remove_duplicates(self) -> Self {
        let mut kept: Vec<SymOp> = Vec::with_capacity(self.elems.len());
        for g in &self.elems {
            if !kept.iter().any(|k| self.same(k, g)) {
                kept.push(*g);
            }
        }
        Self {
            elems: kept,
            ndim: self.ndim,
            unit_cell: self.unit_cell,
        }
    }

    /// All products `a ∘ b` (a from `self`, b from `other`, `self`-major order),
    /// deduplicated.
    ///
    /// The result is closed only when the factors' generators are compatible
    /// (e.g. a mirror normal or parallel to a rotation axis); nothing here checks it.
    pub fn compose(&self, other: &PointGroup) -> PointGroup {
        debug_assert_eq!(self.ndim, other.ndim, "ambient dimensions differ");
        let mut elems = Vec::with_capacity(self.len() * other.len());
        for a in &self.elems {
            for b in &other.elems {
                elems.push(a.compose(b));
            }
        }
        let out = PointGroup {
            elems,
            ndim: self.ndim,
            unit_cell: self.unit_cell.or(other.unit_cell),
        }
        .remove_duplicates();
        tracing::trace!(left = self.len(), right = other.len(), order = out.len(), "compose");
        out
    }

    fn require_reducible(&self) -> SymResult<()> {
        if self.unit_cell.is_none() && self.has_translations() {
            return Err(SymError::MissingUnitCell);
        }
        Ok(())
    }

    /// `table[i][j]` is the index of `inv(g_i) ∘ g_j`.
    pub fn product_table(&self) -> SymResult<Vec<Vec<usize>>> {
        self.require_reducible()?;
        let inv: Vec<SymOp> = self.elems.iter().map(SymOp::inverse).collect();
        let n = self.len();
        let mut table = vec![vec![0usize; n]; n];
        for (i, gi_inv) in inv.iter().enumerate() {
            for (j, gj) in self.elems.iter().enumerate() {
                table[i][j] = self
                    .find(&gi_inv.compose(gj))
                    .ok_or(SymError::NotClosed { left: i, right: j })?;
            }
        }
        Ok(table)
    }

    /// `out[i]` is the index of `inv(g_i)`.
    pub fn inverse_indices(&self) -> SymResult<Vec<usize>> {
        self.require_reducible()?;
        self.elems
            .iter()
            .enumerate()
            .map(|(i, g)| {
                self.find(&g.inverse())
                    .ok_or(SymError::MissingInverse { index: i })
            })
            .collect()
    }
}

impl std::ops::Index<usize> for PointGroup {
    type Output = SymOp;
    #[inline]
    fn index(&self, i: usize) -> &SymOp {
        &self.elems[i]
    }
}

impl<'a> IntoIterator for &'a PointGroup {
    type Item = &'a SymOp;
    type IntoIter = std::slice::Iter<'a, SymOp>;
    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl IntoIterator for PointGroup {
    type Item = SymOp;
    type IntoIter = std::vec::IntoIter<SymOp>;
    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl std::ops::Mul<&PointGroup> for &PointGroup {
    type Output = PointGroup;
    #[inline]
    fn mul(self, rhs: &PointGroup) -> Self::Output {
        self.compose(rhs)
    }
}

impl std::ops::Mul for PointGroup {
    type Output = PointGroup;
    #[inline]
    fn mul(self, rhs: PointGroup) -> Self::Output {
        self.compose(&rhs)
    }
}
