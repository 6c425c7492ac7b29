//! The `SymOp` value type.

use nalgebra::{Matrix3, Vector3};

use crate::cfg::ORTH_EPS;
use crate::float::is_approx_int_eps;

/// Affine map `x ↦ W x + w` on R³.
///
/// Invariants:
/// - Builders in this crate only produce orthogonal linear parts; `inverse`
///   relies on it.
/// - `t` is zero for purely linear operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymOp {
    pub w: Matrix3<f64>,
    pub t: Vector3<f64>,
}

impl SymOp {
    #[inline]
    pub fn new(w: Matrix3<f64>, t: Vector3<f64>) -> Self {
        Self { w, t }
    }
    #[inline]
    pub fn linear(w: Matrix3<f64>) -> Self {
        Self {
            w,
            t: Vector3::zeros(),
        }
    }
    #[inline]
    pub fn identity() -> Self {
        Self::linear(Matrix3::identity())
    }

    /// `self ∘ rhs`: apply `rhs` first → `(W1 W2, W1 w2 + w1)`.
    #[inline]
    pub fn compose(&self, rhs: &SymOp) -> SymOp {
        SymOp {
            w: self.w * rhs.w,
            t: self.w * rhs.t + self.t,
        }
    }

    /// Inverse of an orthogonal affine map: `(Wᵀ, −Wᵀ w)`.
    #[inline]
    pub fn inverse(&self) -> SymOp {
        let wt = self.w.transpose();
        SymOp {
            w: wt,
            t: -(wt * self.t),
        }
    }

    #[inline]
    pub fn apply(&self, p: Vector3<f64>) -> Vector3<f64> {
        self.w * p + self.t
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.w.determinant()
    }

    /// Orientation-preserving (rotation or screw).
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.determinant() > 0.0
    }

    pub fn is_identity_eps(&self, eps: f64) -> bool {
        (self.w - Matrix3::identity()).amax() <= eps && self.t.amax() <= eps
    }

    pub fn has_translation_eps(&self, eps: f64) -> bool {
        self.t.amax() > eps
    }

    /// `WᵀW ≈ I` in max-abs metric.
    pub fn is_orthogonal(&self) -> bool {
        self.is_orthogonal_eps(ORTH_EPS)
    }

    pub fn is_orthogonal_eps(&self, eps: f64) -> bool {
        (self.w.transpose() * self.w - Matrix3::identity()).amax() <= eps
    }

    /// Max-abs comparison of both the linear part and the translation.
    pub fn approx_eq(&self, other: &SymOp, eps: f64) -> bool {
        (self.w - other.w).amax() <= eps && (self.t - other.t).amax() <= eps
    }

    /// Equality up to a lattice translation.
    ///
    /// `cell` holds the primitive lattice vectors as columns. The translation
    /// difference must have integer coordinates in that basis. Returns `false`
    /// for a singular cell.
    pub fn approx_eq_mod_lattice(&self, other: &SymOp, cell: &Matrix3<f64>, eps: f64) -> bool {
        if (self.w - other.w).amax() > eps {
            return false;
        }
        let Some(cell_inv) = cell.try_inverse() else {
            return false;
        };
        let frac = cell_inv * (self.t - other.t);
        frac.iter().all(|&x| is_approx_int_eps(x, eps))
    }
}

impl Default for SymOp {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for SymOp {
    type Output = SymOp;
    #[inline]
    fn mul(self, rhs: SymOp) -> Self::Output {
        self.compose(&rhs)
    }
}

impl std::ops::Mul<&SymOp> for &SymOp {
    type Output = SymOp;
    #[inline]
    fn mul(self, rhs: &SymOp) -> Self::Output {
        self.compose(rhs)
    }
}
