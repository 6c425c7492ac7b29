//! Tolerance defaults and the small override struct.
//!
//! Policy
//! - Defaults are fixed constants; call sites that need different values pass a
//!   `SymCfg` explicitly instead of mutating global state.

/// Absolute tolerance for "is this real number an integer" checks.
pub(crate) const INT_EPS: f64 = 1e-5;
/// Absolute tolerance for perpendicularity (`a·b ≈ 0`) preconditions.
pub(crate) const PERP_EPS: f64 = 1e-8;
/// Max-abs tolerance when comparing two operations.
pub(crate) const EQ_EPS: f64 = 1e-8;
/// Max-abs tolerance for `WᵀW ≈ I`.
pub(crate) const ORTH_EPS: f64 = 1e-10;
/// Upper bound on the order of a generated screw group.
pub(crate) const MAX_SCREW_ORDER: usize = 1000;

/// Overrides for screw-group generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SymCfg {
    /// Tolerance of the near-integer test that closes screw groups.
    pub int_eps: f64,
    /// Screw groups that do not close within this many elements are rejected.
    pub max_screw_order: usize,
}

impl Default for SymCfg {
    fn default() -> Self {
        Self {
            int_eps: INT_EPS,
            max_screw_order: MAX_SCREW_ORDER,
        }
    }
}
