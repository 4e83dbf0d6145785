//! Planar: a 2D geometry kernel.
//!
//! Value types for points, sequences, polygons, bounding boxes, lines and
//! affine transforms, with cached polygon classification (convex, simple,
//! degenerate, duplicate vertices) and the orientation predicates behind it.
//!
//! Policy
//! - Fixed-epsilon tolerances (`EPSILON = 1e-5`), carried in `GeomCfg` rather
//!   than process-wide state. No adaptive or exact arithmetic.
//! - Library code never panics on bad input: construction failures are
//!   `GeomError`s, undefined results (centroid of a degenerate polygon) are
//!   `None`.
//! - The kernel logs through `tracing` at debug/trace level and never installs
//!   a subscriber.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{
    Affine, BoundingBox, GeomCfg, GeomError, Line, Polygon, Ray, Result, Segment, Seq2, Vec2,
    Vec2Array, EPSILON, EPSILON2,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{from_points, FromPoints, PointLike};
    pub use crate::geom2::rand::{
        draw_polygon_radial, random_points, recenter_rescale, Bounds2, RadialCfg, ReplayToken,
        VertexCount,
    };
    pub use crate::geom2::{
        cmp_lexi, segments_intersect, side, Affine, BoundingBox, BoxOrPolygon, GeomCfg, GeomError,
        Line, Polygon, PolygonHints, Ray, Segment, Seq2, Vec2, Vec2Array, EPSILON, EPSILON2,
    };
}
