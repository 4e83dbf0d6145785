//! Tolerance configuration for 2D predicates.
//!
//! Policy
//! - One epsilon drives every approximate comparison (`almost_eq`, null
//!   vectors, point-on-line tests). Its square is used for area and squared
//!   distance comparisons.
//! - There is no process-wide mutable tolerance. Objects that classify carry a
//!   `GeomCfg` by value; free predicates take `eps` as an argument.

/// Default tolerance for approximate equality.
pub const EPSILON: f64 = 1e-5;
/// Square of [`EPSILON`], used for area and squared-distance checks.
pub const EPSILON2: f64 = EPSILON * EPSILON;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPSILON }
    }
}

impl GeomCfg {
    #[inline]
    pub fn new(eps: f64) -> Self {
        Self { eps }
    }

    /// Squared tolerance.
    #[inline]
    pub fn eps2(&self) -> f64 {
        self.eps * self.eps
    }

    /// `|a - b| < eps`.
    #[inline]
    pub fn almost_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.eps
    }
}
