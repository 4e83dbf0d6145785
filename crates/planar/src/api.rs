//! Boundary surface: coercion of point-like values and generic construction.
//!
//! - `PointLike`: anything that is already a point or a two-element numeric
//!   sequence. Every constructor taking foreign input funnels through it, so
//!   a malformed value always surfaces as `GeomError::Conversion`.
//! - `FromPoints` / [`from_points`]: one factory usable for every sequence-like
//!   target type.

use nalgebra::Vector2;

use crate::geom2::{
    BoundingBox, GeomError, Line, Polygon, Ray, Result, Segment, Seq2, Vec2, Vec2Array,
};

/// Value coercible to a pair of floats.
pub trait PointLike {
    fn to_vec2(&self) -> Result<Vec2>;
}

impl PointLike for Vec2 {
    #[inline]
    fn to_vec2(&self) -> Result<Vec2> {
        Ok(*self)
    }
}

impl PointLike for Vector2<f64> {
    #[inline]
    fn to_vec2(&self) -> Result<Vec2> {
        Ok(Vec2::from(*self))
    }
}

impl<T: Copy + Into<f64>> PointLike for (T, T) {
    #[inline]
    fn to_vec2(&self) -> Result<Vec2> {
        Ok(Vec2::new(self.0.into(), self.1.into()))
    }
}

impl<T: Copy + Into<f64>> PointLike for [T; 2] {
    #[inline]
    fn to_vec2(&self) -> Result<Vec2> {
        Ok(Vec2::new(self[0].into(), self[1].into()))
    }
}

impl<T: Copy + Into<f64>> PointLike for [T] {
    fn to_vec2(&self) -> Result<Vec2> {
        match self {
            [x, y] => Ok(Vec2::new((*x).into(), (*y).into())),
            _ => Err(GeomError::conversion(format!(
                "expected 2 coordinates, got {}",
                self.len()
            ))),
        }
    }
}

impl<T: Copy + Into<f64>> PointLike for Vec<T> {
    #[inline]
    fn to_vec2(&self) -> Result<Vec2> {
        self.as_slice().to_vec2()
    }
}

impl<P: PointLike + ?Sized> PointLike for &P {
    #[inline]
    fn to_vec2(&self) -> Result<Vec2> {
        (**self).to_vec2()
    }
}

/// Coerce one point-like value.
#[inline]
pub fn vec2<P: PointLike>(p: P) -> Result<Vec2> {
    p.to_vec2()
}

/// Coerce a sequence of point-like values, failing on the first bad one.
pub fn coerce_points<P: PointLike>(points: impl IntoIterator<Item = P>) -> Result<Vec<Vec2>> {
    points.into_iter().map(|p| p.to_vec2()).collect()
}

/// Types constructible from an ordered point sequence.
pub trait FromPoints: Sized {
    fn from_vec2s(points: Vec<Vec2>) -> Result<Self>;
}

/// Generic `from_points` factory: coerce, then build `T`.
pub fn from_points<T: FromPoints, P: PointLike>(points: impl IntoIterator<Item = P>) -> Result<T> {
    T::from_vec2s(coerce_points(points)?)
}

impl FromPoints for Seq2 {
    fn from_vec2s(points: Vec<Vec2>) -> Result<Self> {
        Ok(Seq2::new(points))
    }
}

impl FromPoints for Vec2Array {
    fn from_vec2s(points: Vec<Vec2>) -> Result<Self> {
        Ok(Vec2Array::from_points(points))
    }
}

impl FromPoints for Polygon {
    fn from_vec2s(points: Vec<Vec2>) -> Result<Self> {
        Polygon::new(points)
    }
}

impl FromPoints for BoundingBox {
    fn from_vec2s(points: Vec<Vec2>) -> Result<Self> {
        BoundingBox::from_points(points)
    }
}

impl FromPoints for Line {
    fn from_vec2s(points: Vec<Vec2>) -> Result<Self> {
        Line::from_points(points)
    }
}

impl FromPoints for Ray {
    fn from_vec2s(points: Vec<Vec2>) -> Result<Self> {
        Ray::from_points(points)
    }
}

impl FromPoints for Segment {
    fn from_vec2s(points: Vec<Vec2>) -> Result<Self> {
        Segment::from_points(points)
    }
}
