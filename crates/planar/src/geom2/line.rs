//! Directed lines, rays and segments.
//!
//! All three are stored as a unit normal plus an anchor point. The direction
//! is the normal rotated 90° counterclockwise, so with a y-up frame the left
//! side of the direction is where `normal · p - offset` is negative.
//! Tolerant predicates (`contains_point`, `point_left`, ...) use `EPSILON`.

use std::fmt;

use super::affine::Affine;
use super::cfg::EPSILON;
use super::display::fmt_point;
use super::error::{GeomError, Result};
use super::predicates::segments_intersect;
use super::Vec2;

#[inline]
fn normal_of(direction: Vec2) -> Vec2 {
    Vec2::new(direction.y, -direction.x)
}

#[inline]
fn direction_of(normal: Vec2) -> Vec2 {
    Vec2::new(-normal.y, normal.x)
}

fn unit_direction(direction: Vec2, what: &str) -> Result<Vec2> {
    if direction.is_null() {
        tracing::debug!(%direction, what, "null direction rejected");
        return Err(GeomError::construction(format!("{what} direction must not be null")));
    }
    Ok(direction.normalized())
}

// First point not within eps of `pts[0]`, giving the fitted direction.
fn fitted_direction(pts: &[Vec2]) -> Option<Vec2> {
    let first = *pts.first()?;
    pts.iter()
        .find(|p| !p.almost_eq(first))
        .map(|p| (*p - first).normalized())
}

fn collect_points<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Vec<Vec2> {
    points.into_iter().map(Into::into).collect()
}

/// Infinite directed line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    normal: Vec2,
    offset: f64,
}

impl Line {
    /// Line through `point` along `direction` (need not be unit length).
    pub fn new(point: Vec2, direction: Vec2) -> Result<Self> {
        let dir = unit_direction(direction, "line")?;
        Ok(Self::through(point, normal_of(dir)))
    }

    /// Line `normal · p = offset`; `normal` is normalized, `offset` kept.
    pub fn from_normal(normal: Vec2, offset: f64) -> Result<Self> {
        let n = unit_direction(normal, "line normal")?;
        Ok(Self { normal: n, offset })
    }

    /// Line through two or more collinear points (at least two distinct).
    pub fn from_points<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        let pts = collect_points(points);
        let dir = fitted_direction(&pts)
            .ok_or_else(|| GeomError::construction("line needs at least two distinct points"))?;
        let line = Self::through(pts[0], normal_of(dir));
        if !pts.iter().all(|p| line.contains_point(*p)) {
            return Err(GeomError::construction("points are not collinear"));
        }
        Ok(line)
    }

    #[inline]
    fn through(point: Vec2, unit_normal: Vec2) -> Self {
        Self {
            normal: unit_normal,
            offset: unit_normal.dot(point),
        }
    }

    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Unit direction.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        direction_of(self.normal)
    }

    /// Signed distance of the line from the origin along the normal.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Point on the line closest to the origin.
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.normal * self.offset
    }

    /// Signed distance; negative on the left, positive on the right.
    #[inline]
    pub fn distance_to(&self, p: Vec2) -> f64 {
        self.normal.dot(p) - self.offset
    }

    #[inline]
    pub fn point_left(&self, p: Vec2) -> bool {
        self.distance_to(p) < -EPSILON
    }

    #[inline]
    pub fn point_right(&self, p: Vec2) -> bool {
        self.distance_to(p) > EPSILON
    }

    #[inline]
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.distance_to(p).abs() < EPSILON
    }

    /// Orthogonal projection of `p` onto the line.
    pub fn project(&self, p: Vec2) -> Vec2 {
        p - self.normal * self.distance_to(p)
    }

    /// Mirror image of `p` across the line.
    pub fn reflect(&self, p: Vec2) -> Vec2 {
        p - self.normal * (2.0 * self.distance_to(p))
    }

    /// Line through `point` with the same direction.
    pub fn parallel(&self, point: Vec2) -> Line {
        Self::through(point, self.normal)
    }

    /// Line through `point` along this line's normal.
    pub fn perpendicular(&self, point: Vec2) -> Line {
        Self::through(point, normal_of(self.normal))
    }

    /// Two distinct points on the line.
    pub fn points(&self) -> (Vec2, Vec2) {
        let a = self.anchor();
        (a, a + self.direction())
    }

    /// Image under `t`; fails if `t` collapses the direction.
    pub fn transform(&self, t: &Affine) -> Result<Line> {
        let (a, b) = self.points();
        let (ta, tb) = (t.apply(a), t.apply(b));
        Line::new(ta, tb - ta)
    }

    pub fn almost_eq(&self, other: &Line) -> bool {
        self.normal.almost_eq(other.normal) && (self.offset - other.offset).abs() < EPSILON
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line({}, {})",
            fmt_point(self.anchor()),
            fmt_point(self.direction())
        )
    }
}

/// Half-line starting at an anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    anchor: Vec2,
    normal: Vec2,
}

impl Ray {
    pub fn new(anchor: Vec2, direction: Vec2) -> Result<Self> {
        let dir = unit_direction(direction, "ray")?;
        Ok(Self {
            anchor,
            normal: normal_of(dir),
        })
    }

    /// Ray along collinear points, anchored at the rearmost one so that
    /// every input point is on the ray.
    pub fn from_points<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        let pts = collect_points(points);
        let line = Line::from_points(pts.iter().copied())?;
        let dir = fitted_direction(&pts)
            .ok_or_else(|| GeomError::construction("ray needs at least two distinct points"))?;
        let anchor = extreme_along(&pts, dir, false);
        Ok(Self {
            anchor: line.project(anchor),
            normal: normal_of(dir),
        })
    }

    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        direction_of(self.normal)
    }

    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    /// Supporting line.
    pub fn line(&self) -> Line {
        Line::through(self.anchor, self.normal)
    }

    pub fn point_behind(&self, p: Vec2) -> bool {
        (p - self.anchor).dot(self.direction()) < -EPSILON
    }

    /// Unsigned distance to the closest point of the ray.
    pub fn distance_to(&self, p: Vec2) -> f64 {
        if self.point_behind(p) {
            p.distance_to(self.anchor)
        } else {
            self.line().distance_to(p).abs()
        }
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.distance_to(p) < EPSILON
    }

    /// Left of the ray and not behind the anchor.
    pub fn point_left(&self, p: Vec2) -> bool {
        !self.point_behind(p) && self.line().point_left(p)
    }

    /// Right of the ray and not behind the anchor.
    pub fn point_right(&self, p: Vec2) -> bool {
        !self.point_behind(p) && self.line().point_right(p)
    }

    /// Closest point on the ray.
    pub fn project(&self, p: Vec2) -> Vec2 {
        if self.point_behind(p) {
            self.anchor
        } else {
            self.line().project(p)
        }
    }

    /// Anchor and one unit along.
    pub fn points(&self) -> (Vec2, Vec2) {
        (self.anchor, self.anchor + self.direction())
    }

    pub fn transform(&self, t: &Affine) -> Result<Ray> {
        let (a, b) = self.points();
        let (ta, tb) = (t.apply(a), t.apply(b));
        Ray::new(ta, tb - ta)
    }

    pub fn almost_eq(&self, other: &Ray) -> bool {
        self.anchor.almost_eq(other.anchor) && self.normal.almost_eq(other.normal)
    }
}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ray({}, {})",
            fmt_point(self.anchor),
            fmt_point(self.direction())
        )
    }
}

/// Point of `pts` furthest along (or against) `dir`.
fn extreme_along(pts: &[Vec2], dir: Vec2, ahead: bool) -> Vec2 {
    let key = |p: &Vec2| p.dot(dir);
    let pick = |best: Vec2, p: Vec2| {
        let further = if ahead { key(&p) > key(&best) } else { key(&p) < key(&best) };
        if further {
            p
        } else {
            best
        }
    };
    pts.iter().copied().fold(pts[0], pick)
}

/// Bounded directed segment `start → start + vector`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    anchor: Vec2,
    normal: Vec2,
    length: f64,
}

impl Segment {
    /// A null `vector` yields a zero-length segment pointing along +x.
    pub fn new(start: Vec2, vector: Vec2) -> Self {
        let length = vector.length();
        let dir = if length > 0.0 {
            vector / length
        } else {
            Vec2::new(1.0, 0.0)
        };
        Self {
            anchor: start,
            normal: normal_of(dir),
            length,
        }
    }

    pub fn from_endpoints(start: Vec2, end: Vec2) -> Self {
        Self::new(start, end - start)
    }

    /// Shortest segment covering collinear points. A single repeated point
    /// gives a zero-length segment.
    pub fn from_points<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        let pts = collect_points(points);
        let first = *pts
            .first()
            .ok_or_else(|| GeomError::construction("segment needs at least one point"))?;
        let Some(dir) = fitted_direction(&pts) else {
            return Ok(Self::new(first, Vec2::ZERO));
        };
        let line = Line::through(first, normal_of(dir));
        if !pts.iter().all(|p| line.contains_point(*p)) {
            return Err(GeomError::construction("points are not collinear"));
        }
        let start = extreme_along(&pts, dir, false);
        let end = extreme_along(&pts, dir, true);
        Ok(Self::from_endpoints(start, end))
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.anchor
    }

    /// Unit direction, `(1, 0)` for zero-length segments.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        direction_of(self.normal)
    }

    #[inline]
    pub fn normal(&self) -> Vec2 {
        self.normal
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.direction() * self.length
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.anchor + self.vector()
    }

    #[inline]
    pub fn mid(&self) -> Vec2 {
        self.anchor + self.vector() * 0.5
    }

    pub fn line(&self) -> Line {
        Line::through(self.anchor, self.normal)
    }

    #[inline]
    fn along(&self, p: Vec2) -> f64 {
        (p - self.anchor).dot(self.direction())
    }

    pub fn point_behind(&self, p: Vec2) -> bool {
        self.along(p) < -EPSILON
    }

    pub fn point_ahead(&self, p: Vec2) -> bool {
        self.along(p) > self.length + EPSILON
    }

    /// Unsigned distance to the closest point of the segment.
    pub fn distance_to(&self, p: Vec2) -> f64 {
        p.distance_to(self.project(p))
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.distance_to(p) < EPSILON
    }

    pub fn point_left(&self, p: Vec2) -> bool {
        !self.point_behind(p) && !self.point_ahead(p) && self.line().point_left(p)
    }

    pub fn point_right(&self, p: Vec2) -> bool {
        !self.point_behind(p) && !self.point_ahead(p) && self.line().point_right(p)
    }

    /// Closest point on the segment.
    pub fn project(&self, p: Vec2) -> Vec2 {
        let t = self.along(p).clamp(0.0, self.length);
        self.anchor + self.direction() * t
    }

    /// Closed-segment intersection test.
    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self.start(), self.end(), other.start(), other.end())
    }

    pub fn points(&self) -> (Vec2, Vec2) {
        (self.start(), self.end())
    }

    pub fn transform(&self, t: &Affine) -> Segment {
        Segment::from_endpoints(t.apply(self.start()), t.apply(self.end()))
    }

    pub fn almost_eq(&self, other: &Segment) -> bool {
        self.start().almost_eq(other.start()) && self.end().almost_eq(other.end())
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LineSegment({}, {})",
            fmt_point(self.anchor),
            fmt_point(self.vector())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    #[test]
    fn line_basics() {
        let l = Line::new(v(0.0, 2.0), v(3.0, 0.0)).unwrap();
        assert_eq!(l.direction(), v(1.0, 0.0));
        assert_eq!(l.normal(), v(0.0, -1.0));
        assert_eq!(l.offset(), -2.0);
        assert_eq!(l.anchor(), v(0.0, 2.0));
        assert_eq!(l.distance_to(v(5.0, 5.0)), -3.0);
        assert!(l.point_left(v(0.0, 3.0)));
        assert!(l.point_right(v(0.0, 1.0)));
        assert!(l.contains_point(v(-40.0, 2.0)));
        assert_eq!(l.project(v(4.0, 7.0)), v(4.0, 2.0));
        assert_eq!(l.reflect(v(4.0, 7.0)), v(4.0, -3.0));
        assert!(Line::new(v(0.0, 0.0), Vec2::ZERO).is_err());
    }

    #[test]
    fn line_from_normal_and_points() {
        let l = Line::from_normal(v(0.0, -2.0), -2.0).unwrap();
        assert!(l.almost_eq(&Line::new(v(7.0, 2.0), v(1.0, 0.0)).unwrap()));
        let p = Line::from_points([(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (3.0, 3.0)]).unwrap();
        assert!(p.contains_point(v(-2.0, -2.0)));
        assert!(Line::from_points([(1.0, 1.0), (1.0, 1.0)]).is_err());
        assert!(Line::from_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).is_err());
    }

    #[test]
    fn parallel_and_perpendicular() {
        let l = Line::new(v(0.0, 0.0), v(1.0, 1.0)).unwrap();
        let par = l.parallel(v(0.0, 1.0));
        assert!(par.direction().almost_eq(l.direction()));
        assert!(par.contains_point(v(1.0, 2.0)));
        let perp = l.perpendicular(v(1.0, 1.0));
        assert!(perp.direction().dot(l.direction()).abs() < 1e-12);
        assert!(perp.contains_point(v(2.0, 0.0)));
    }

    #[test]
    fn line_transform() {
        let l = Line::new(v(0.0, 1.0), v(1.0, 0.0)).unwrap();
        let m = l.transform(&Affine::rotation(90.0)).unwrap();
        assert!(m.contains_point(v(-1.0, 5.0)));
        assert!(m.direction().almost_eq(v(0.0, 1.0)));
        assert!(l.transform(&Affine::scale(v(0.0, 1.0))).is_err());
    }

    #[test]
    fn ray_behind_and_distance() {
        let r = Ray::new(v(1.0, 1.0), v(0.0, 2.0)).unwrap();
        assert_eq!(r.direction(), v(0.0, 1.0));
        assert!(r.point_behind(v(1.0, 0.0)));
        assert!(!r.point_behind(v(1.0, 1.0)));
        assert_eq!(r.distance_to(v(1.0, -2.0)), 3.0);
        assert_eq!(r.distance_to(v(4.0, 5.0)), 3.0);
        assert!(r.contains_point(v(1.0, 100.0)));
        assert!(!r.contains_point(v(1.0, 0.5)));
        assert!(r.point_left(v(0.0, 3.0)));
        assert!(!r.point_left(v(0.0, -3.0)));
        assert!(r.point_right(v(2.0, 3.0)));
        assert_eq!(r.project(v(5.0, -5.0)), v(1.0, 1.0));
        assert_eq!(r.project(v(5.0, 5.0)), v(1.0, 5.0));
    }

    #[test]
    fn ray_from_points_anchors_at_rear() {
        let r = Ray::from_points([(2.0, 2.0), (5.0, 5.0), (0.0, 0.0)]).unwrap();
        assert!(r.anchor().almost_eq(v(0.0, 0.0)));
        assert!(r.direction().almost_eq(v(1.0, 1.0).normalized()));
        assert!(r.contains_point(v(5.0, 5.0)));
        assert!(r.contains_point(v(2.0, 2.0)));
        assert!(r.point_behind(v(-1.0, -1.0)));
        assert!(Ray::from_points([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]).is_err());
    }

    #[test]
    fn segment_geometry() {
        let s = Segment::new(v(1.0, 0.0), v(4.0, 0.0));
        assert_eq!(s.length(), 4.0);
        assert_eq!(s.end(), v(5.0, 0.0));
        assert_eq!(s.mid(), v(3.0, 0.0));
        assert!(s.point_behind(v(0.0, 0.0)));
        assert!(s.point_ahead(v(6.0, 1.0)));
        assert!(!s.point_ahead(v(5.0, 1.0)));
        assert_eq!(s.distance_to(v(-2.0, 4.0)), 5.0);
        assert_eq!(s.distance_to(v(3.0, -2.0)), 2.0);
        assert_eq!(s.distance_to(v(8.0, 4.0)), 5.0);
        assert_eq!(s.project(v(9.0, 9.0)), v(5.0, 0.0));
        assert!(s.point_left(v(2.0, 1.0)));
        assert!(!s.point_left(v(7.0, 1.0)));
        assert!(s.point_right(v(2.0, -1.0)));
        assert!(s.contains_point(v(5.0, 0.0)));
    }

    #[test]
    fn zero_length_segment() {
        let s = Segment::new(v(2.0, 2.0), Vec2::ZERO);
        assert_eq!(s.length(), 0.0);
        assert_eq!(s.direction(), v(1.0, 0.0));
        assert_eq!(s.end(), v(2.0, 2.0));
        let p = Segment::from_points([(3.0, 3.0), (3.0, 3.0)]).unwrap();
        assert_eq!(p.length(), 0.0);
        assert_eq!(p.direction(), v(1.0, 0.0));
        assert!(Segment::from_points(Vec::<Vec2>::new()).is_err());
    }

    #[test]
    fn segment_from_points_spans_extremes() {
        let s = Segment::from_points([(1.0, 1.0), (3.0, 3.0), (-1.0, -1.0), (2.0, 2.0)]).unwrap();
        assert!(s.start().almost_eq(v(-1.0, -1.0)));
        assert!(s.end().almost_eq(v(3.0, 3.0)));
        assert!(Segment::from_points([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).is_err());
    }

    #[test]
    fn segment_intersection_and_transform() {
        let a = Segment::from_endpoints(v(0.0, 0.0), v(2.0, 2.0));
        let b = Segment::from_endpoints(v(0.0, 2.0), v(2.0, 0.0));
        let c = Segment::from_endpoints(v(3.0, 0.0), v(3.0, 5.0));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        let t = a.transform(&Affine::translation(v(1.0, 0.0)));
        assert_eq!(t.start(), v(1.0, 0.0));
        assert!(t.end().almost_eq(v(3.0, 2.0)));
    }

    #[test]
    fn display() {
        let l = Line::new(v(0.0, 2.0), v(1.0, 0.0)).unwrap();
        assert_eq!(l.to_string(), "Line((0, 2), (1, 0))");
        let r = Ray::new(v(1.0, 1.0), v(0.0, 1.0)).unwrap();
        assert_eq!(r.to_string(), "Ray((1, 1), (0, 1))");
        let s = Segment::new(v(1.0, 0.0), v(4.0, 0.0));
        assert_eq!(s.to_string(), "LineSegment((1, 0), (4, 0))");
    }
}
