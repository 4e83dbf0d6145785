//! Andrew's monotone chain over the lexicographic order.

use super::predicates::{cmp_lexi, side};
use super::Vec2;

/// Convex hull in counterclockwise order (y-up), collinear points dropped.
///
/// Points closer than `sqrt(eps2)` are merged first. Returns fewer than three
/// points when the input is empty, a single point, or collinear.
pub fn monotone_chain(points: &[Vec2], eps2: f64) -> Vec<Vec2> {
    let mut pts: Vec<Vec2> = points.to_vec();
    pts.sort_by(cmp_lexi);
    pts.dedup_by(|a, b| (*a - *b).length2() < eps2);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vec2> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && side(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vec2> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && side(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}
