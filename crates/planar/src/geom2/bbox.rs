//! Axis-aligned bounding boxes.
//!
//! Containment is half-open and asymmetric: `min.x <= x < max.x` and
//! `min.y < y <= max.y`. Boxes tiling the plane therefore never both claim
//! a point on a shared edge. Keep it that way.

use std::fmt;

use super::affine::Affine;
use super::cfg::EPSILON;
use super::display::fmt_points;
use super::error::{GeomError, Result};
use super::polygon::{Polygon, Seed};
use super::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    min: Vec2,
    max: Vec2,
}

/// Image of a box under an affine map.
#[derive(Clone, Debug)]
pub enum BoxOrPolygon {
    Box(BoundingBox),
    Polygon(Polygon),
}

impl BoundingBox {
    /// Box spanned by two corners (any order).
    pub fn new(p: Vec2, q: Vec2) -> Self {
        Self {
            min: Vec2::new(p.x.min(q.x), p.y.min(q.y)),
            max: Vec2::new(p.x.max(q.x), p.y.max(q.y)),
        }
    }

    /// Single linear scan; an empty input is rejected.
    pub fn from_points<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        let mut it = points.into_iter().map(Into::into);
        let first = it
            .next()
            .ok_or_else(|| GeomError::construction("bounding box of an empty point set"))?;
        let (mut min, mut max) = (first, first);
        for p in it {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Ok(Self { min, max })
    }

    /// Box of the given extents centered on `center`; negative extents are
    /// taken by absolute value.
    pub fn from_center(center: Vec2, width: f64, height: f64) -> Self {
        let half = Vec2::new(width.abs() * 0.5, height.abs() * 0.5);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Smallest box enclosing all `boxes`.
    pub fn from_boxes(boxes: &[BoundingBox]) -> Result<Self> {
        let (first, rest) = boxes
            .split_first()
            .ok_or_else(|| GeomError::construction("union of an empty list of boxes"))?;
        Ok(rest.iter().fold(*first, |acc, b| Self {
            min: Vec2::new(acc.min.x.min(b.min.x), acc.min.y.min(b.min.y)),
            max: Vec2::new(acc.max.x.max(b.max.x), acc.max.y.max(b.max.y)),
        }))
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Zero width or zero height.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Grow width by `dx` and height by `dy`, keeping the center.
    pub fn inflate(&self, dx: f64, dy: f64) -> Self {
        Self::from_center(self.center(), self.width() + dx, self.height() + dy)
    }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y < p.y && p.y <= self.max.y
    }

    /// Uniform scale plus translation mapping `other` into `self`, centered.
    ///
    /// Fails when `other` has neither width nor height to scale.
    pub fn fit(&self, other: &BoundingBox) -> Result<Affine> {
        let sx = if other.width() > 0.0 { self.width() / other.width() } else { f64::INFINITY };
        let sy = if other.height() > 0.0 { self.height() / other.height() } else { f64::INFINITY };
        let s = sx.min(sy);
        if !s.is_finite() {
            return Err(GeomError::construction("cannot fit a point-sized box"));
        }
        Ok(Affine::translation(self.center())
            * Affine::scale_uniform(s)
            * Affine::translation(-other.center()))
    }

    /// Corners as a known-convex polygon.
    pub fn to_polygon(&self) -> Polygon {
        let pts = vec![
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ];
        let seed = Seed {
            convex: Some(!self.is_empty()),
            simple: Some(true),
            degenerate: Some(self.is_empty()),
            centroid: (!self.is_empty()).then_some(self.center()),
            ..Seed::default()
        };
        Polygon::assemble(pts, Default::default(), seed)
    }

    /// A box for rectilinear maps, otherwise the transformed corner polygon.
    pub fn transform(&self, t: &Affine) -> BoxOrPolygon {
        if t.is_rectilinear() {
            BoxOrPolygon::Box(Self::new(t.apply(self.min), t.apply(self.max)))
        } else {
            BoxOrPolygon::Polygon(self.to_polygon().transform(t))
        }
    }

    pub fn almost_eq(&self, other: &BoundingBox) -> bool {
        self.min.almost_eq_eps(other.min, EPSILON) && self.max.almost_eq_eps(other.max, EPSILON)
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_points("BoundingBox", &[self.min, self.max]))
    }
}
