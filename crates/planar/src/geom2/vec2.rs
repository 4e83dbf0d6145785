//! `Vec2`: immutable 2D point/vector value.
//!
//! - Exact equality is componentwise `==` and is what `Hash` agrees with
//!   (identity, dedup, hash sets). Tolerant comparison lives in
//!   [`Vec2::almost_eq`] and is only used by classification code.
//! - Ordering is lexicographic (x, then y); see [`super::predicates::cmp_lexi`].
//! - Coordinates are expected to be finite; NaN breaks reflexive equality.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use nalgebra::Vector2;

use super::cfg::{EPSILON, EPSILON2};
use super::display::fmt_g;
use super::predicates::{cmp_lexi, cos_sin_deg};

/// 2D point or vector.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Vector of `length` at `angle_deg` degrees counterclockwise from +x.
    /// Axis-aligned angles are exact.
    pub fn polar(angle_deg: f64, length: f64) -> Self {
        let (c, s) = cos_sin_deg(angle_deg);
        Self::new(c * length, s * length)
    }

    #[inline]
    pub fn length2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length2().sqrt()
    }

    /// True if the length is below the default epsilon.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.is_null_eps(EPSILON2)
    }

    /// True if `length2 < eps2`. NaN is never null.
    #[inline]
    pub fn is_null_eps(&self, eps2: f64) -> bool {
        self.length2() < eps2
    }

    #[inline]
    pub fn almost_eq(&self, other: Vec2) -> bool {
        self.almost_eq_eps(other, EPSILON)
    }

    /// Both components within `eps`.
    #[inline]
    pub fn almost_eq_eps(&self, other: Vec2, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }

    /// Angle in degrees in `(-180, 180]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x).to_degrees()
    }

    /// Signed angle in degrees from `self` to `other`.
    #[inline]
    pub fn angle_to(&self, other: Vec2) -> f64 {
        other.angle() - self.angle()
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    pub fn normalized(&self) -> Vec2 {
        let len = self.length();
        if len > 0.0 {
            Vec2::new(self.x / len, self.y / len)
        } else {
            Vec2::ZERO
        }
    }

    /// Rotated 90° counterclockwise.
    #[inline]
    pub fn perpendicular(&self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    #[inline]
    pub fn dot(&self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// z-component of the 3D cross product.
    #[inline]
    pub fn cross(&self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn distance_to(&self, other: Vec2) -> f64 {
        (*self - other).length()
    }

    pub fn rotated(&self, angle_deg: f64) -> Vec2 {
        let (c, s) = cos_sin_deg(angle_deg);
        Vec2::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Same direction, given length. The zero vector stays zero.
    pub fn scaled_to(&self, length: f64) -> Vec2 {
        let len = self.length();
        if len > 0.0 {
            Vec2::new(self.x * length / len, self.y * length / len)
        } else {
            Vec2::ZERO
        }
    }

    /// Projection of `other` onto the line spanned by `self`.
    pub fn project(&self, other: Vec2) -> Vec2 {
        let n = self.normalized();
        n * n.dot(other)
    }

    /// Reflection of `self` across the line spanned by `other`.
    pub fn reflect(&self, other: Vec2) -> Vec2 {
        let n = other.normalized();
        if n == Vec2::ZERO {
            return Vec2::ZERO;
        }
        n * (2.0 * n.dot(*self)) - *self
    }

    /// Same direction with length clamped to `[min_length, max_length]`.
    pub fn clamped(&self, min_length: f64, max_length: f64) -> Vec2 {
        let len2 = self.length2();
        if len2 > max_length * max_length {
            self.scaled_to(max_length)
        } else if len2 < min_length * min_length {
            self.scaled_to(min_length)
        } else {
            *self
        }
    }

    /// Linear interpolation; `t` outside `[0, 1]` extrapolates.
    #[inline]
    pub fn lerp(&self, other: Vec2, t: f64) -> Vec2 {
        Vec2::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

impl PartialEq for Vec2 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Vec2 {}

impl Hash for Vec2 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0.0 folds -0.0 onto 0.0 so equal values hash equally.
        state.write_u64((self.x + 0.0).to_bits());
        state.write_u64((self.y + 0.0).to_bits());
    }
}

impl PartialOrd for Vec2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(cmp_lexi(self, other))
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2({}, {})", fmt_g(self.x + 0.0), fmt_g(self.y + 0.0))
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

/// Componentwise product.
impl Mul for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl From<Vector2<f64>> for Vec2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vec2::new(v.x, v.y)
    }
}

impl From<Vec2> for Vector2<f64> {
    #[inline]
    fn from(v: Vec2) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vec2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vec2::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2::new(x, y)
    }
}

impl From<Vec2> for (f64, f64) {
    #[inline]
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}
