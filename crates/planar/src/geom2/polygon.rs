//! Polygon classification engine.
//!
//! Purpose
//! - Closed vertex ring (N >= 3) with lazily computed, write-once
//!   classification: degenerate, duplicate vertices, simple, convex; plus
//!   centroid, squared radius range, bounding box and sorted index orders.
//! - Vertices never change after construction, so every cache is valid for
//!   the polygon's lifetime and no invalidation exists.
//!
//! Caching
//! - Each derived property lives in its own `OnceLock`. Concurrent readers may
//!   race to fill a slot; every computation is deterministic, so whichever
//!   value lands is the value.
//! - Constructors that know a property up front (regular polygons, stars,
//!   hulls, box corners) seed the slot.
//!
//! Neighbors
//! - `vertex(i)` wraps any signed index modulo N, so `vertex(-1)` is the last
//!   vertex and `vertex(N)` the first. O(1), no sentinel copies.

use std::f64::consts::TAU;
use std::fmt;
use std::sync::OnceLock;

use super::affine::Affine;
use super::bbox::BoundingBox;
use super::cfg::GeomCfg;
use super::display::fmt_points;
use super::error::{GeomError, Result};
use super::hull::monotone_chain;
use super::predicates::{cmp_lexi, segments_intersect, side};
use super::seq2::Seq2;
use super::Vec2;

/// Caller-supplied classification hints.
///
/// `convex: Some(true)` implies simple; `simple: Some(false)` implies
/// non-convex.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolygonHints {
    pub convex: Option<bool>,
    pub simple: Option<bool>,
}

// Known values for cache slots, filled at construction.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Seed {
    pub convex: Option<bool>,
    pub simple: Option<bool>,
    pub degenerate: Option<bool>,
    pub duplicates: Option<bool>,
    pub centroid: Option<Vec2>,
}

impl From<PolygonHints> for Seed {
    fn from(h: PolygonHints) -> Self {
        let mut seed = Seed {
            convex: h.convex,
            simple: h.simple,
            ..Seed::default()
        };
        if h.convex == Some(true) {
            seed.simple = Some(true);
        }
        if h.simple == Some(false) {
            seed.convex = Some(false);
        }
        seed
    }
}

#[derive(Clone, Debug, Default)]
struct Cache {
    degenerate: OnceLock<bool>,
    duplicates: OnceLock<bool>,
    simple: OnceLock<bool>,
    convex: OnceLock<bool>,
    centroid: OnceLock<Option<Vec2>>,
    radius2: OnceLock<Option<(f64, f64)>>,
    bbox: OnceLock<BoundingBox>,
    sorted_asc: OnceLock<Box<[usize]>>,
    sorted_desc: OnceLock<Box<[usize]>>,
}

fn seeded<T>(v: Option<T>) -> OnceLock<T> {
    let slot = OnceLock::new();
    if let Some(v) = v {
        let _ = slot.set(v);
    }
    slot
}

/// Closed polygon with cached classification.
#[derive(Clone, Debug)]
pub struct Polygon {
    verts: Seq2,
    cfg: GeomCfg,
    cache: Cache,
}

impl Polygon {
    /// Polygon over at least three vertices.
    pub fn new<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        Self::build(points, GeomCfg::default(), Seed::default())
    }

    /// As [`Polygon::new`] with an explicit tolerance.
    pub fn with_cfg<P: Into<Vec2>>(
        points: impl IntoIterator<Item = P>,
        cfg: GeomCfg,
    ) -> Result<Self> {
        Self::build(points, cfg, Seed::default())
    }

    /// As [`Polygon::new`] with known convexity/simplicity.
    pub fn with_hints<P: Into<Vec2>>(
        points: impl IntoIterator<Item = P>,
        hints: PolygonHints,
    ) -> Result<Self> {
        Self::build(points, GeomCfg::default(), hints.into())
    }

    pub fn from_points<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        Self::new(points)
    }

    fn build<P: Into<Vec2>>(
        points: impl IntoIterator<Item = P>,
        cfg: GeomCfg,
        seed: Seed,
    ) -> Result<Self> {
        let pts: Vec<Vec2> = points.into_iter().map(Into::into).collect();
        if pts.len() < 3 {
            tracing::debug!(n = pts.len(), "polygon rejected: fewer than 3 vertices");
            return Err(GeomError::construction(format!(
                "polygon needs at least 3 vertices, got {}",
                pts.len()
            )));
        }
        Ok(Self::assemble(pts, cfg, seed))
    }

    // Callers guarantee `pts.len() >= 3`. Triangles ignore convex/simple
    // seeds: they are always simple, and convex iff not degenerate.
    pub(crate) fn assemble(pts: Vec<Vec2>, cfg: GeomCfg, seed: Seed) -> Self {
        debug_assert!(pts.len() >= 3);
        let triangle = pts.len() == 3;
        let seed = if triangle {
            Seed {
                convex: None,
                simple: Some(true),
                ..seed
            }
        } else {
            seed
        };
        let cache = Cache {
            degenerate: seeded(seed.degenerate),
            duplicates: seeded(seed.duplicates),
            simple: seeded(seed.simple),
            convex: seeded(seed.convex),
            centroid: seeded(seed.centroid.map(Some)),
            ..Cache::default()
        };
        let poly = Self {
            verts: Seq2::new(pts),
            cfg,
            cache,
        };
        if triangle {
            let _ = poly.cache.convex.set(!poly.is_degenerate());
        }
        poly
    }

    /// Regular polygon with `n >= 3` vertices on a circle, first vertex at
    /// `angle_deg`.
    pub fn regular(n: usize, radius: f64, center: Vec2, angle_deg: f64) -> Result<Self> {
        if n < 3 {
            return Err(GeomError::construction(format!(
                "regular polygon needs at least 3 vertices, got {n}"
            )));
        }
        let step = 360.0 / n as f64;
        let pts: Vec<Vec2> = (0..n)
            .map(|i| Vec2::polar(angle_deg + step * i as f64, radius) + center)
            .collect();
        let solid = radius != 0.0;
        let seed = Seed {
            convex: Some(solid),
            simple: solid.then_some(true),
            degenerate: Some(!solid),
            duplicates: Some(!solid),
            centroid: solid.then_some(center),
        };
        Ok(Self::assemble(pts, GeomCfg::default(), seed))
    }

    /// Star with `peaks >= 2` points alternating between radius `r1` (at
    /// `angle_deg`) and `r2`.
    pub fn star(peaks: usize, r1: f64, r2: f64, center: Vec2, angle_deg: f64) -> Result<Self> {
        if peaks < 2 {
            return Err(GeomError::construction(format!(
                "star needs at least 2 peaks, got {peaks}"
            )));
        }
        let step = 180.0 / peaks as f64;
        let mut pts = Vec::with_capacity(2 * peaks);
        let mut angle = angle_deg;
        for _ in 0..peaks {
            pts.push(Vec2::polar(angle, r1) + center);
            pts.push(Vec2::polar(angle + step, r2) + center);
            angle += 2.0 * step;
        }
        let simple = r1 > 0.0 && r2 > 0.0;
        let seed = Seed {
            convex: (r1 == r2).then_some(r1 != 0.0),
            simple: simple.then_some(true),
            centroid: simple.then_some(center),
            ..Seed::default()
        };
        let star = Self::assemble(pts, GeomCfg::default(), seed);
        // Shallow stars (inner radius close to the outer) can still be convex.
        star.is_convex();
        Ok(star)
    }

    /// Convex hull of a point set (counterclockwise, collinear points
    /// dropped).
    ///
    /// Fails when fewer than 3 hull vertices remain: a collinear input is a
    /// `Construction` error rather than a flat three-vertex polygon.
    pub fn convex_hull<P: Into<Vec2>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
        Self::convex_hull_with_cfg(points, GeomCfg::default())
    }

    /// As [`Polygon::convex_hull`], merging points closer than `cfg.eps`.
    pub fn convex_hull_with_cfg<P: Into<Vec2>>(
        points: impl IntoIterator<Item = P>,
        cfg: GeomCfg,
    ) -> Result<Self> {
        let pts: Vec<Vec2> = points.into_iter().map(Into::into).collect();
        let hull = monotone_chain(&pts, cfg.eps2());
        if hull.len() < 3 {
            tracing::debug!(n = pts.len(), hull = hull.len(), "convex hull rejected");
            return Err(GeomError::construction(format!(
                "convex hull of {} points has only {} vertices",
                pts.len(),
                hull.len()
            )));
        }
        let seed = Seed {
            convex: Some(true),
            simple: Some(true),
            duplicates: Some(false),
            ..Seed::default()
        };
        Ok(Self::assemble(hull, cfg, seed))
    }

    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false: a polygon has at least three vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        self.verts.as_slice()
    }

    #[inline]
    pub fn as_seq2(&self) -> &Seq2 {
        &self.verts
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Vec2> {
        self.verts.get(i)
    }

    /// Vertex at `i` modulo N (negative indices count from the end).
    #[inline]
    pub fn vertex(&self, i: isize) -> Vec2 {
        let n = self.len() as isize;
        self.verts[i.rem_euclid(n) as usize]
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.verts.iter()
    }

    /// Edges `(v[i], v[i + 1])`, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.len() as isize;
        (0..n).map(move |i| (self.vertex(i), self.vertex(i + 1)))
    }

    /// Shoelace area; positive for counterclockwise winding (y-up).
    pub fn signed_area(&self) -> f64 {
        0.5 * self.edges().map(|(p, q)| p.cross(q)).sum::<f64>()
    }

    pub fn is_degenerate_known(&self) -> bool {
        self.cache.degenerate.get().is_some()
    }
    pub fn has_duplicate_vertices_known(&self) -> bool {
        self.cache.duplicates.get().is_some()
    }
    pub fn is_simple_known(&self) -> bool {
        self.cache.simple.get().is_some()
    }
    pub fn is_convex_known(&self) -> bool {
        self.cache.convex.get().is_some()
    }
    pub fn is_centroid_known(&self) -> bool {
        self.cache.centroid.get().is_some()
    }

    /// Zero area (within eps²) or fewer than three distinct vertices.
    pub fn is_degenerate(&self) -> bool {
        *self.cache.degenerate.get_or_init(|| {
            let area = self.signed_area();
            let v = area.abs() <= self.cfg.eps2() || self.distinct_count() < 3;
            tracing::trace!(n = self.len(), area, degenerate = v, "polygon degeneracy computed");
            v
        })
    }

    /// Any two vertices (adjacent or not) coincide within eps.
    pub fn has_duplicate_vertices(&self) -> bool {
        *self.cache.duplicates.get_or_init(|| {
            let v = self.distinct_count() < self.len();
            tracing::trace!(n = self.len(), duplicates = v, "polygon duplicate scan computed");
            v
        })
    }

    // Vertices left after merging lexicographic neighbors within eps.
    fn distinct_count(&self) -> usize {
        let idx = self.sorted_indices_asc();
        let eps = self.cfg.eps;
        1 + idx
            .windows(2)
            .filter(|w| !self.verts[w[0]].almost_eq_eps(self.verts[w[1]], eps))
            .count()
    }

    /// No two non-adjacent edges intersect.
    pub fn is_simple(&self) -> bool {
        *self.cache.simple.get_or_init(|| {
            let v = self.scan_simple();
            tracing::trace!(n = self.len(), simple = v, "polygon simplicity computed");
            v
        })
    }

    // Vertex ring with consecutive repeats removed, so null edges neither
    // count as turns nor make their neighbors touch.
    fn ring(&self) -> Vec<Vec2> {
        let mut ring: Vec<Vec2> = Vec::with_capacity(self.len());
        for v in self.iter() {
            if ring.last() != Some(&v) {
                ring.push(v);
            }
        }
        while ring.len() > 1 && ring.first() == ring.last() {
            ring.pop();
        }
        ring
    }

    fn scan_simple(&self) -> bool {
        let ring = self.ring();
        let n = ring.len();
        let e = |i: usize| (ring[i], ring[(i + 1) % n]);
        for i in 0..n {
            let (a, b) = e(i);
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (c, d) = e(j);
                if segments_intersect(a, b, c, d) {
                    return false;
                }
            }
        }
        true
    }

    /// Uniform turn direction at every vertex, no doubling back, exactly one
    /// full turn. Degenerate polygons are never convex.
    pub fn is_convex(&self) -> bool {
        let v = *self.cache.convex.get_or_init(|| {
            let v = !self.is_degenerate() && self.scan_convex();
            tracing::trace!(n = self.len(), convex = v, "polygon convexity computed");
            v
        });
        if v {
            let _ = self.cache.simple.set(true);
        }
        v
    }

    fn scan_convex(&self) -> bool {
        let ring = self.ring();
        let n = ring.len();
        if n < 3 {
            return false;
        }
        let zero = self.cfg.eps2();
        let mut sign = 0i8;
        let mut turning = 0.0;
        for i in 0..n {
            let prev = ring[(i + n - 1) % n];
            let cur = ring[i];
            let next = ring[(i + 1) % n];
            let s = side(prev, cur, next);
            let (u, w) = (cur - prev, next - cur);
            if s > zero {
                if sign < 0 {
                    return false;
                }
                sign = 1;
            } else if s < -zero {
                if sign > 0 {
                    return false;
                }
                sign = -1;
            } else if u.dot(w) < 0.0 {
                return false;
            }
            turning += u.cross(w).atan2(u.dot(w));
        }
        (turning / TAU).round().abs() == 1.0
    }

    /// Area-weighted centroid; `None` for degenerate or self-intersecting
    /// polygons.
    pub fn centroid(&self) -> Option<Vec2> {
        *self.cache.centroid.get_or_init(|| {
            if self.is_degenerate() || !self.is_simple() {
                tracing::debug!(n = self.len(), "centroid undefined");
                return None;
            }
            let (mut cx, mut cy, mut a2) = (0.0, 0.0, 0.0);
            for (p, q) in self.edges() {
                let w = p.cross(q);
                a2 += w;
                cx += (p.x + q.x) * w;
                cy += (p.y + q.y) * w;
            }
            Some(Vec2::new(cx / (3.0 * a2), cy / (3.0 * a2)))
        })
    }

    /// `(min, max)` squared distance from the centroid to the vertices.
    pub fn radius2(&self) -> Option<(f64, f64)> {
        *self.cache.radius2.get_or_init(|| {
            let c = self.centroid()?;
            Some(self.iter().fold((f64::INFINITY, 0.0f64), |(lo, hi), p| {
                let d2 = (p - c).length2();
                (lo.min(d2), hi.max(d2))
            }))
        })
    }

    /// Vertex indices in ascending lexicographic order.
    pub fn sorted_indices_asc(&self) -> &[usize] {
        self.cache.sorted_asc.get_or_init(|| {
            let mut idx: Vec<usize> = (0..self.len()).collect();
            idx.sort_by(|&i, &j| cmp_lexi(&self.verts[i], &self.verts[j]));
            idx.into_boxed_slice()
        })
    }

    /// Vertex indices in descending lexicographic order.
    pub fn sorted_indices_desc(&self) -> &[usize] {
        self.cache.sorted_desc.get_or_init(|| {
            let mut idx: Vec<usize> = (0..self.len()).collect();
            idx.sort_by(|&i, &j| cmp_lexi(&self.verts[j], &self.verts[i]));
            idx.into_boxed_slice()
        })
    }

    pub fn bounding_box(&self) -> BoundingBox {
        *self.cache.bbox.get_or_init(|| {
            let v = self.vertices();
            v[1..].iter().fold(BoundingBox::new(v[0], v[0]), |b, p| {
                BoundingBox::new(
                    Vec2::new(b.min().x.min(p.x), b.min().y.min(p.y)),
                    Vec2::new(b.max().x.max(p.x), b.max().y.max(p.y)),
                )
            })
        })
    }

    /// Nonzero-winding containment.
    ///
    /// Boundary points follow the bounding-box convention: left and top
    /// edges are inside, right and bottom edges outside.
    pub fn contains_point(&self, p: Vec2) -> bool {
        let mut winding = 0i32;
        for (a, b) in self.edges() {
            if (a.y >= p.y) != (b.y >= p.y) {
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x {
                    winding += if b.y > a.y { 1 } else { -1 };
                }
            }
        }
        winding != 0
    }

    /// `(left, right)` extreme vertices seen from `p`: every vertex lies on
    /// the far side of the rays `p → left` and `p → right`.
    pub fn tangents_to_point(&self, p: Vec2) -> (Vec2, Vec2) {
        let first = self.verts[0];
        self.iter().skip(1).fold((first, first), |(l, r), v| {
            (
                if side(p, l, v) > 0.0 { v } else { l },
                if side(p, r, v) < 0.0 { v } else { r },
            )
        })
    }

    /// Fresh polygon with every vertex mapped through `t`; nothing cached.
    pub fn transform(&self, t: &Affine) -> Polygon {
        Self::assemble(t.apply_all(self.vertices()), self.cfg, Seed::default())
    }
}

impl PartialEq for Polygon {
    /// Same cyclic vertex sequence, in either direction, from any start.
    fn eq(&self, other: &Self) -> bool {
        let n = self.len();
        if n != other.len() {
            return false;
        }
        let (a, b) = (self.vertices(), other.vertices());
        (0..n).filter(|&k| b[k] == a[0]).any(|k| {
            (0..n).all(|i| a[i] == b[(k + i) % n]) || (0..n).all(|i| a[i] == b[(k + n - i) % n])
        })
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&fmt_points("Polygon", self.vertices()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(x, y)
    }

    fn unit_square() -> Polygon {
        Polygon::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    #[test]
    fn too_few_vertices_is_a_construction_error() {
        assert!(matches!(
            Polygon::new([(0.0, 0.0), (1.0, 1.0)]),
            Err(GeomError::Construction(_))
        ));
        assert!(Polygon::new(Vec::<Vec2>::new()).is_err());
    }

    #[test]
    fn unit_square_properties() {
        let p = unit_square();
        assert!(!p.is_convex_known());
        assert!(p.is_convex());
        assert!(p.is_simple_known());
        assert!(p.is_simple());
        assert!(!p.is_degenerate());
        assert!(!p.has_duplicate_vertices());
        assert_eq!(p.centroid(), Some(v(0.5, 0.5)));
        assert_eq!(p.radius2(), Some((0.5, 0.5)));
        assert_eq!(p.signed_area(), 1.0);
    }

    #[test]
    fn wrap_accessor() {
        let p = unit_square();
        assert_eq!(p.vertex(-1), v(0.0, 1.0));
        assert_eq!(p.vertex(4), v(0.0, 0.0));
        assert_eq!(p.vertex(-5), v(0.0, 1.0));
        assert_eq!(p.vertex(9), v(1.0, 0.0));
    }

    #[test]
    fn convexity_cases() {
        assert!(Polygon::new([(-1.0, 0.0), (-1.0, 1.0), (0.0, 0.0), (0.0, -1.0)])
            .unwrap()
            .is_convex());
        let p = Polygon::new([(0.0, 0.0), (-1.0, 1.0), (0.0, 0.5), (-1.0, -1.0)]).unwrap();
        assert!(!p.is_convex());
        assert!(p.is_convex_known());
        assert!(!p.is_convex());
        // Collinear vertex on an edge keeps convexity.
        assert!(Polygon::new([(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)])
            .unwrap()
            .is_convex());
    }

    #[test]
    fn doubled_outlines_and_pentagrams_are_not_convex() {
        let pentagram: Vec<Vec2> = (0..5).map(|i| Vec2::polar(i as f64 * 144.0, 1.0)).collect();
        assert!(!Polygon::new(pentagram).unwrap().is_convex());
        let twice = [
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
            (0.0, 0.0),
            (1.0, 0.0),
            (1.0, 1.0),
            (0.0, 1.0),
        ];
        assert!(!Polygon::new(twice).unwrap().is_convex());
        let spike = [(0.0, 0.0), (2.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
        assert!(!Polygon::new(spike).unwrap().is_convex());
    }

    #[test]
    fn repeated_vertex_does_not_break_a_convex_ring() {
        let pts = [(0.0, 0.0), (1.0, 0.0), (1.0, 0.0), (0.0, 1.0)];
        let p = Polygon::new(pts).unwrap();
        assert!(p.is_simple());
        assert!(p.has_duplicate_vertices());
        let q = Polygon::new(pts).unwrap();
        assert!(q.is_convex());
        assert!(q.is_simple());
    }

    #[test]
    fn simplicity() {
        let p = Polygon::new([(0.0, 0.0), (-1.0, -1.0), (-2.0, 0.0), (-1.0, 1.0)]).unwrap();
        assert!(!p.is_simple_known());
        assert!(p.is_simple());
        assert!(p.is_simple_known());
        let bowtie = Polygon::new([(0.0, 0.0), (-1.0, 1.0), (1.0, 1.0), (-1.0, 0.0)]).unwrap();
        assert!(!bowtie.is_simple());
        assert!(!bowtie.is_convex());
    }

    #[test]
    fn duplicates_adjacent_and_not() {
        assert!(Polygon::new([(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)])
            .unwrap()
            .has_duplicate_vertices());
        let far = Polygon::new([(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (1.0, 1.0 + 1e-7)])
            .unwrap();
        assert!(far.has_duplicate_vertices());
        assert!(!unit_square().has_duplicate_vertices());
    }

    #[test]
    fn degenerate_polygons() {
        let line = Polygon::new([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).unwrap();
        assert!(line.is_degenerate());
        assert!(!line.is_convex());
        assert_eq!(line.centroid(), None);
        assert_eq!(line.radius2(), None);
        let dup = Polygon::new([(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]).unwrap();
        assert!(dup.is_degenerate());
    }

    #[test]
    fn centroid_convex_and_concave() {
        let p = Polygon::new([(1.0, -2.0), (0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (4.0, -2.0)]).unwrap();
        assert!(p.is_convex());
        assert!(!p.is_centroid_known());
        let c = p.centroid().unwrap();
        assert!(c.almost_eq(v(2.0, -1.0)));
        assert!(p.is_centroid_known());
        let q = Polygon::new([
            (3.0, 3.0),
            (1.0, -1.0),
            (-1.0, -1.0),
            (-3.0, 3.0),
            (-1.0, -2.0),
            (1.0, -2.0),
        ])
        .unwrap();
        assert!(!q.is_convex());
        assert!(q.is_simple());
        assert!(q.centroid().unwrap().almost_eq(v(0.0, -0.75)));
    }

    #[test]
    fn centroid_of_self_intersecting_is_none() {
        let p = Polygon::new([(-1.0, 1.0), (0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.0, -2.0)]).unwrap();
        assert!(!p.is_simple_known());
        assert_eq!(p.centroid(), None);
        assert!(p.is_centroid_known());
        assert!(!p.is_simple());
    }

    #[test]
    fn regular_and_star_seed_their_flags() {
        let p = Polygon::regular(5, 1.5, Vec2::ZERO, 0.0).unwrap();
        assert_eq!(p.len(), 5);
        assert!(p.is_convex_known() && p.is_simple_known() && p.is_centroid_known());
        assert!(p.is_convex() && p.is_simple());
        assert_eq!(p.centroid(), Some(Vec2::ZERO));
        for i in 0..5 {
            assert!(p.vertex(i).almost_eq(Vec2::polar(72.0 * i as f64, 1.5)));
        }
        assert!(Polygon::regular(2, 1.0, Vec2::ZERO, 0.0).is_err());

        let s = Polygon::star(2, 1.5, 3.0, v(-11.0, 3.0), 15.0).unwrap();
        assert_eq!(s.len(), 4);
        assert!(s.is_convex_known() && s.is_convex());
        assert!(s.is_simple());
        assert_eq!(s.centroid(), Some(v(-11.0, 3.0)));
        assert_eq!(s.vertex(3), Vec2::polar(285.0, 3.0) + v(-11.0, 3.0));

        let round = Polygon::star(9, 2.0, 2.0, Vec2::ZERO, 0.0).unwrap();
        assert_eq!(round.len(), 18);
        assert!(round.is_convex());

        let neg = Polygon::star(3, -1.0, 2.0, Vec2::ZERO, 0.0).unwrap();
        assert!(neg.is_convex_known() && !neg.is_simple_known() && !neg.is_centroid_known());
        assert!(!neg.is_simple());
        assert_eq!(neg.centroid(), None);
        assert!(Polygon::star(1, 1.0, 2.0, Vec2::ZERO, 0.0).is_err());
    }

    #[test]
    fn hints_seed_caches() {
        let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let p = Polygon::with_hints(square, PolygonHints { convex: Some(true), simple: None }).unwrap();
        assert!(p.is_convex_known() && p.is_simple_known());
        let bowtie = [(0.0, 0.0), (-1.0, 1.0), (1.0, 1.0), (-1.0, 0.0)];
        let q = Polygon::with_hints(bowtie, PolygonHints { convex: None, simple: Some(false) }).unwrap();
        assert!(q.is_convex_known() && !q.is_convex());
    }

    #[test]
    fn triangles_are_known_convex_and_simple() {
        let tri = [(-1.0, 0.0), (1.0, 1.0), (0.0, 0.0)];
        let p = Polygon::new(tri).unwrap();
        assert!(p.is_convex_known() && p.is_simple_known());
        assert!(p.is_convex() && p.is_simple());
        let hinted = Polygon::with_hints(tri, PolygonHints { convex: Some(false), simple: Some(false) })
            .unwrap();
        assert!(hinted.is_convex());
        assert!(hinted.is_simple());
        let flat = Polygon::with_hints([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)], PolygonHints {
            convex: Some(true),
            simple: None,
        })
        .unwrap();
        assert!(flat.is_convex_known());
        assert!(!flat.is_convex());
        assert!(flat.is_simple());
    }

    #[test]
    fn shallow_star_is_convex_like_its_vertices() {
        let s = Polygon::star(3, 1.0, 0.9, Vec2::ZERO, 0.0).unwrap();
        assert!(s.is_convex_known());
        assert!(s.is_convex());
        assert!(Polygon::new(s.iter()).unwrap().is_convex());
        let deep = Polygon::star(5, 1.0, 0.4, Vec2::ZERO, 0.0).unwrap();
        assert!(deep.is_convex_known());
        assert!(!deep.is_convex());
        assert!(!Polygon::new(deep.iter()).unwrap().is_convex());
    }

    #[test]
    fn hull_tolerance_follows_cfg() {
        let pts = [(0.0, 0.0), (2.0, 0.0), (1.001, 1.0), (1.0, 1.0)];
        assert_eq!(Polygon::convex_hull(pts).unwrap().len(), 4);
        let coarse = Polygon::convex_hull_with_cfg(pts, GeomCfg::new(1e-2)).unwrap();
        assert_eq!(coarse.len(), 3);
        assert_eq!(coarse.cfg(), GeomCfg::new(1e-2));
    }

    #[test]
    fn sorted_orders() {
        let p = Polygon::new([(1.0, 0.0), (0.0, 1.0), (0.0, 0.0), (1.0, -1.0)]).unwrap();
        assert_eq!(p.sorted_indices_asc(), &[2, 1, 3, 0]);
        assert_eq!(p.sorted_indices_desc(), &[0, 3, 1, 2]);
    }

    #[test]
    fn containment_matches_box_convention() {
        let sq = Polygon::new([(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]).unwrap();
        let bb = sq.bounding_box();
        for p in [
            v(1.0, 1.0),
            v(0.0, 1.0),
            v(2.0, 1.0),
            v(1.0, 0.0),
            v(1.0, 2.0),
            v(3.0, 1.0),
            v(-1.0, 1.0),
        ] {
            assert_eq!(sq.contains_point(p), bb.contains_point(p), "point {p}");
        }
    }

    #[test]
    fn containment_concave_and_triangle() {
        let tri = Polygon::new([(-1.0, -1.0), (0.0, 1.0), (1.0, -1.0)]).unwrap();
        assert!(tri.contains_point(v(0.0, 0.0)));
        assert!(!tri.contains_point(v(0.0, 1.5)));
        assert!(!tri.contains_point(v(0.9, 0.9)));
        let cup = Polygon::new([(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (2.0, 3.0), (2.0, 1.0), (1.0, 1.0), (1.0, 3.0), (0.0, 3.0)])
            .unwrap();
        assert!(cup.contains_point(v(0.5, 2.0)));
        assert!(!cup.contains_point(v(1.5, 2.0)));
        assert!(cup.contains_point(v(1.5, 0.5)));
    }

    #[test]
    fn tangents_from_outside_points() {
        let p = Polygon::new([(1.0, -1.0), (0.0, -3.0), (-1.0, 3.0), (0.0, 1.0), (2.0, 2.0), (2.0, -2.0)])
            .unwrap();
        assert_eq!(p.tangents_to_point(v(20.0, 20.0)), (v(2.0, -2.0), v(-1.0, 3.0)));
        assert_eq!(p.tangents_to_point(v(2.1, 1.0)), (v(2.0, -2.0), v(2.0, 2.0)));
    }

    #[test]
    fn equality_ignores_start_and_winding() {
        let a = Polygon::new([(-3.0, 3.0), (-1.0, -2.0), (1.0, -2.0), (3.0, 3.0), (1.0, -1.0), (-1.0, -1.0)])
            .unwrap();
        let b = Polygon::new([(3.0, 3.0), (1.0, -1.0), (-1.0, -1.0), (-3.0, 3.0), (-1.0, -2.0), (1.0, -2.0)])
            .unwrap();
        assert_eq!(a, b);
        let mut verts = vec![(1.0, -2.0), (0.0, 0.0), (1.0, 0.0), (3.0, 0.0), (4.0, -2.0)];
        let p1 = Polygon::new(verts.clone()).unwrap();
        verts.reverse();
        assert_eq!(p1, Polygon::new(verts.clone()).unwrap());
        verts[2] = (0.5, 0.0);
        assert_ne!(p1, Polygon::new(verts).unwrap());
        let p4 = Polygon::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (-1.0, 1.0), (0.0, 0.0)]).unwrap();
        let p5 = Polygon::new([(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (-1.0, 1.0)]).unwrap();
        assert_ne!(p4, p5);
    }

    #[test]
    fn convex_hull_drops_interior_and_collinear() {
        let hull = Polygon::convex_hull([
            (0.0, 0.0),
            (2.0, 0.0),
            (1.0, 0.0),
            (2.0, 2.0),
            (0.0, 2.0),
            (1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(hull.len(), 4);
        assert!(hull.is_convex_known() && hull.is_convex());
        assert_eq!(hull, unit_square().transform(&Affine::scale_uniform(2.0)));
        let tri = [(0.0, 0.0), (1.0, -2.0), (2.0, 3.0)];
        assert_eq!(Polygon::convex_hull(tri).unwrap(), Polygon::new(tri).unwrap());
        assert!(Polygon::convex_hull([(0.0, 1.0), (2.0, 1.0), (5.0, 1.0), (12.0, 1.0)]).is_err());
    }

    #[test]
    fn transform_drops_caches() {
        let p = unit_square();
        assert!(p.is_convex());
        let q = p.transform(&Affine::translation(v(1.0, 1.0)));
        assert!(!q.is_convex_known());
        assert_eq!(q.vertex(0), v(1.0, 1.0));
        assert_eq!(q.bounding_box(), BoundingBox::new(v(1.0, 1.0), v(2.0, 2.0)));
    }

    #[test]
    fn display() {
        let p = Polygon::new([(0.25, 3.5), (1.3, 4.25), (0.16, 2.25), (-0.5, 0.16)]).unwrap();
        assert_eq!(
            p.to_string(),
            "Polygon([(0.25, 3.5), (1.3, 4.25), (0.16, 2.25), (-0.5, 0.16)])"
        );
    }
}
