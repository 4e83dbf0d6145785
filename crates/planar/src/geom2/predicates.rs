//! Orientation, intersection, ordering, and exact-angle trig.
//!
//! All predicates here are exact on their inputs (no epsilon); tolerant
//! decisions are made by the callers that carry a `GeomCfg`.

use std::cmp::Ordering;

use super::Vec2;

/// Orientation of the triple `(a, b, c)`: the cross product `(b - a) × (c - a)`.
///
/// Positive when `c` lies to the left of the directed line `a → b` in a
/// y-up frame (to the right in a y-down screen frame), negative on the other
/// side, zero when collinear.
#[inline]
pub fn side(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
}

#[inline]
fn straddles(d1: f64, d2: f64) -> bool {
    ((d1 > 0.0) != (d2 > 0.0)) || ((d1 == 0.0) != (d2 == 0.0))
}

/// Closed-segment intersection test for `a-b` and `c-d`.
///
/// Each segment must straddle (or touch) the other's supporting line. When
/// all four orientations vanish the segments are collinear and intersect iff
/// their projections onto the dominant axis overlap (endpoints included).
pub fn segments_intersect(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let dir1 = side(c, d, a);
    let dir2 = side(c, d, b);
    let dir3 = side(a, b, c);
    let dir4 = side(a, b, d);
    if dir1 == 0.0 && dir2 == 0.0 && dir3 == 0.0 && dir4 == 0.0 {
        return collinear_overlap(a, b, c, d);
    }
    straddles(dir1, dir2) && straddles(dir3, dir4)
}

fn collinear_overlap(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let span = (b - a) + (d - c);
    let key = |p: Vec2| if span.x.abs() >= span.y.abs() { p.x } else { p.y };
    let (a0, a1) = min_max(key(a), key(b));
    let (c0, c1) = min_max(key(c), key(d));
    a0 <= c1 && c0 <= a1
}

#[inline]
fn min_max(u: f64, v: f64) -> (f64, f64) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}

/// Lexicographic order: x ascending, then y ascending.
///
/// Incomparable (NaN) components compare equal so sorting never panics.
#[inline]
pub fn cmp_lexi(a: &Vec2, b: &Vec2) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// `(cos, sin)` of an angle in degrees, exact at multiples of 90°.
pub fn cos_sin_deg(deg: f64) -> (f64, f64) {
    let mut d = deg % 360.0;
    if d < 0.0 {
        d += 360.0;
    }
    if d >= 360.0 {
        d -= 360.0;
    }
    if d == 0.0 {
        (1.0, 0.0)
    } else if d == 90.0 {
        (0.0, 1.0)
    } else if d == 180.0 {
        (-1.0, 0.0)
    } else if d == 270.0 {
        (0.0, -1.0)
    } else {
        let r = d.to_radians();
        (r.cos(), r.sin())
    }
}
