//! 2D affine transform `p ↦ [[a, b], [d, e]] p + (c, f)`.
//!
//! Composition: `A * B` applies `B` first, then `A`, so chained products
//! read right to left like matrix products. Positive rotation angles are
//! counterclockwise (y-up).

use std::fmt;
use std::ops::Mul;

use nalgebra::{Matrix2, Vector2};

use super::cfg::{GeomCfg, EPSILON};
use super::display::fmt_g;
use super::error::{GeomError, Result};
use super::predicates::cos_sin_deg;
use super::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::identity()
    }
}

impl Affine {
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }

    #[inline]
    pub fn translation(v: Vec2) -> Self {
        Self::new(1.0, 0.0, v.x, 0.0, 1.0, v.y)
    }

    /// Axis scaling by `v.x` and `v.y`.
    #[inline]
    pub fn scale(v: Vec2) -> Self {
        Self::new(v.x, 0.0, 0.0, 0.0, v.y, 0.0)
    }

    #[inline]
    pub fn scale_uniform(s: f64) -> Self {
        Self::new(s, 0.0, 0.0, 0.0, s, 0.0)
    }

    /// Shear by `x_deg` parallel to the x-axis and `y_deg` parallel to the
    /// y-axis.
    pub fn shear(x_deg: f64, y_deg: f64) -> Self {
        let sx = x_deg.to_radians().tan();
        let sy = y_deg.to_radians().tan();
        Self::new(1.0, sx, 0.0, sy, 1.0, 0.0)
    }

    /// Rotation about the origin, exact at multiples of 90°.
    pub fn rotation(deg: f64) -> Self {
        let (c, s) = cos_sin_deg(deg);
        Self::new(c, -s, 0.0, s, c, 0.0)
    }

    /// Rotation about `pivot`.
    pub fn rotation_about(deg: f64, pivot: Vec2) -> Self {
        Self::translation(pivot) * Self::rotation(deg) * Self::translation(-pivot)
    }

    /// Build from an nalgebra linear part and translation.
    pub fn from_parts(m: Matrix2<f64>, t: Vector2<f64>) -> Self {
        Self::new(m[(0, 0)], m[(0, 1)], t.x, m[(1, 0)], m[(1, 1)], t.y)
    }

    #[inline]
    pub fn linear(&self) -> Matrix2<f64> {
        Matrix2::new(self.a, self.b, self.d, self.e)
    }

    #[inline]
    pub fn translation_part(&self) -> Vector2<f64> {
        Vector2::new(self.c, self.f)
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.e - self.b * self.d
    }

    /// Inverse transform; fails if `|det| <= EPSILON`.
    pub fn inverse(&self) -> Result<Affine> {
        self.inverse_with(&GeomCfg::default())
    }

    /// Inverse transform; fails if `|det| <= cfg.eps`.
    pub fn inverse_with(&self, cfg: &GeomCfg) -> Result<Affine> {
        let det = self.determinant();
        if det.abs() <= cfg.eps {
            tracing::debug!(det, "affine not invertible");
            return Err(GeomError::TransformNotInvertible { det });
        }
        let ra = self.e / det;
        let rb = -self.b / det;
        let rd = -self.d / det;
        let re = self.a / det;
        Ok(Affine::new(
            ra,
            rb,
            -self.c * ra - self.f * rb,
            rd,
            re,
            -self.c * rd - self.f * re,
        ))
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity() || self.almost_eq(&Self::identity())
    }

    /// Maps axis-aligned boxes to axis-aligned boxes (scale, flips, 90° turns).
    pub fn is_rectilinear(&self) -> bool {
        (self.a.abs() < EPSILON && self.e.abs() < EPSILON)
            || (self.d.abs() < EPSILON && self.b.abs() < EPSILON)
    }

    /// Preserves angles: the linear part has orthogonal columns.
    pub fn is_conformal(&self) -> bool {
        (self.a * self.b + self.d * self.e).abs() < EPSILON
    }

    /// Conformal with unit-length columns (rotation or reflection plus translation).
    pub fn is_orthonormal(&self) -> bool {
        self.is_conformal()
            && (1.0 - (self.a * self.a + self.d * self.d)).abs() < EPSILON
            && (1.0 - (self.b * self.b + self.e * self.e)).abs() < EPSILON
    }

    pub fn is_degenerate(&self) -> bool {
        self.determinant().abs() <= EPSILON
    }

    /// Columns `(a, d)`, `(b, e)`, `(c, f)`.
    pub fn column_vectors(&self) -> (Vec2, Vec2, Vec2) {
        (
            Vec2::new(self.a, self.d),
            Vec2::new(self.b, self.e),
            Vec2::new(self.c, self.f),
        )
    }

    /// All six coefficients within `EPSILON`.
    pub fn almost_eq(&self, other: &Affine) -> bool {
        self.coefficients()
            .iter()
            .zip(other.coefficients().iter())
            .all(|(x, y)| (x - y).abs() < EPSILON)
    }

    #[inline]
    pub fn coefficients(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.b * p.y + self.c,
            self.d * p.x + self.e * p.y + self.f,
        )
    }

    /// Linear part only (directions, displacements).
    #[inline]
    pub fn apply_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.b * v.y, self.d * v.x + self.e * v.y)
    }

    pub fn apply_all(&self, pts: &[Vec2]) -> Vec<Vec2> {
        pts.iter().map(|p| self.apply(*p)).collect()
    }
}

impl Mul for Affine {
    type Output = Affine;
    /// `self * rhs` applies `rhs` first.
    fn mul(self, r: Affine) -> Affine {
        Affine::new(
            self.a * r.a + self.b * r.d,
            self.a * r.b + self.b * r.e,
            self.a * r.c + self.b * r.f + self.c,
            self.d * r.a + self.e * r.d,
            self.d * r.b + self.e * r.e,
            self.d * r.c + self.e * r.f + self.f,
        )
    }
}

impl Mul<Vec2> for Affine {
    type Output = Vec2;
    #[inline]
    fn mul(self, p: Vec2) -> Vec2 {
        self.apply(p)
    }
}

impl fmt::Display for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, ff] = self.coefficients().map(fmt_g);
        write!(f, "Affine({a}, {b}, {c}, {d}, {e}, {ff})")
    }
}
