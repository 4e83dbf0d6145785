//! Random polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Small, deterministic sampler for test fixtures and benches. Every draw is
//!   addressed by a `ReplayToken`, so a failing case can be regenerated.
//!
//! Model
//! - `n` equally spaced angles on [0, 360), bounded angular and radial jitter,
//!   sorted by angle. The ring is star-shaped around the origin, hence simple;
//!   with `convex = true` the convex hull is returned instead.
//! - `recenter_rescale` moves the centroid to the origin and scales into
//!   inradius/outradius bounds when they are consistent.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::affine::Affine;
use super::line::Segment;
use super::polygon::Polygon;
use super::Vec2;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing 360/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u` in `[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 360)?
    pub random_phase: bool,
    /// Return the convex hull of the jittered ring.
    pub convex: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            convex: false,
        }
    }
}

/// Bounds for recenter/rescale around the origin.
#[derive(Clone, Copy, Debug)]
pub struct Bounds2 {
    /// Minimum distance from the origin to the closest edge. Ignored if <= 0.
    pub r_in_min: f64,
    /// Maximum vertex distance from the origin. Ignored if <= 0.
    pub r_out_max: f64,
}

/// Replay token making draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random simple polygon around the origin.
///
/// Returns `None` only if the convex variant collapses (all points collinear).
pub fn draw_polygon_radial(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 360.0 / n as f64;
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 360.0
    } else {
        0.0
    };
    let mut angles: Vec<f64> = (0..n)
        .map(|k| phase + k as f64 * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta)
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Vec2> = angles
        .into_iter()
        .map(|deg| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            Vec2::polar(deg, (1.0 + u) * r0)
        })
        .collect();
    if cfg.convex {
        Polygon::convex_hull(pts).ok()
    } else {
        Polygon::new(pts).ok()
    }
}

/// `n` points uniform in the square `[-half, half]²`.
pub fn random_points(n: usize, half: f64, tok: ReplayToken) -> Vec<Vec2> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| Vec2::new(rng.gen_range(-half..=half), rng.gen_range(-half..=half)))
        .collect()
}

/// Translate the centroid to the origin and scale to meet `bounds`.
///
/// Returns `(poly, r_in, r_out)`. `None` when the centroid is undefined, the
/// origin ends up outside, or the bounds are inconsistent.
pub fn recenter_rescale(poly: &Polygon, bounds: Bounds2) -> Option<(Polygon, f64, f64)> {
    let c = poly.centroid()?;
    let moved = poly.transform(&Affine::translation(-c));
    let r_out0 = moved.iter().map(|p| p.length()).fold(0.0, f64::max);
    let r_in0 = moved
        .edges()
        .map(|(a, b)| Segment::from_endpoints(a, b).distance_to(Vec2::ZERO))
        .fold(f64::INFINITY, f64::min);
    if !moved.contains_point(Vec2::ZERO) || r_in0 <= 0.0 || r_out0 <= 0.0 {
        return None;
    }
    let s_min = if bounds.r_in_min > 0.0 { bounds.r_in_min / r_in0 } else { 0.0 };
    let s_max = if bounds.r_out_max > 0.0 { bounds.r_out_max / r_out0 } else { f64::INFINITY };
    if s_min > s_max {
        return None;
    }
    // Prefer no-op, else the smallest scale meeting the inradius.
    let s = if (s_min..=s_max).contains(&1.0) {
        1.0
    } else {
        s_min.clamp(1e-12, s_max)
    };
    let scaled = moved.transform(&Affine::scale_uniform(s));
    Some((scaled, r_in0 * s, r_out0 * s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            base_radius: 1.0,
            random_phase: true,
            convex: false,
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_radial(cfg, tok).expect("poly");
        let p2 = draw_polygon_radial(cfg, tok).expect("poly");
        assert_eq!(p1.vertices(), p2.vertices());
        assert_eq!(p1.len(), 10);
        let p3 = draw_polygon_radial(cfg, tok.next()).expect("poly");
        assert_ne!(p1.vertices(), p3.vertices());
    }

    #[test]
    fn radial_rings_are_simple_and_hulls_convex() {
        let mut tok = ReplayToken { seed: 3, index: 0 };
        for _ in 0..20 {
            let ring = draw_polygon_radial(RadialCfg::default(), tok).unwrap();
            assert!(ring.is_simple());
            assert!(!ring.is_degenerate());
            assert!(ring.contains_point(Vec2::ZERO));
            let hull = draw_polygon_radial(RadialCfg { convex: true, ..RadialCfg::default() }, tok)
                .unwrap();
            assert!(hull.is_convex());
            tok = tok.next();
        }
    }

    #[test]
    fn uniform_vertex_count_in_range() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 1, max: 6 },
            ..RadialCfg::default()
        };
        for i in 0..30 {
            let p = draw_polygon_radial(cfg, ReplayToken { seed: 9, index: i }).unwrap();
            assert!((3..=6).contains(&p.len()));
        }
    }

    #[test]
    fn recenter_and_bounds() {
        let tok = ReplayToken { seed: 1, index: 123 };
        let p = draw_polygon_radial(RadialCfg::default(), tok).unwrap();
        let (q, r_in, r_out) = recenter_rescale(
            &p,
            Bounds2 {
                r_in_min: 0.2,
                r_out_max: 2.0,
            },
        )
        .unwrap();
        assert!(r_in >= 0.2 - 1e-12);
        assert!(r_out <= 2.0 + 1e-12);
        assert!(q.centroid().unwrap().length() < 1e-9);
        assert!(recenter_rescale(
            &p,
            Bounds2 {
                r_in_min: 10.0,
                r_out_max: 0.1
            }
        )
        .is_none());
    }

    #[test]
    fn random_points_stay_in_square() {
        let pts = random_points(200, 5.0, ReplayToken { seed: 0, index: 0 });
        assert_eq!(pts.len(), 200);
        assert!(pts.iter().all(|p| p.x.abs() <= 5.0 && p.y.abs() <= 5.0));
        assert_eq!(pts, random_points(200, 5.0, ReplayToken { seed: 0, index: 0 }));
    }
}
