//! 2D planar geometry kernel.
//!
//! Purpose
//! - Value types (`Vec2`, `Affine`, `BoundingBox`, `Line`, `Ray`, `Segment`),
//!   point sequences (`Seq2`, `Vec2Array`) and a `Polygon` with lazily cached
//!   classification.
//! - Fixed-epsilon tolerances carried explicitly in `GeomCfg`; no global
//!   mutable state.
//!
//! Conventions
//! - Angles are in degrees, positive counterclockwise in a y-up frame.
//! - `Affine` products apply the right operand first.
//! - Exact equality (`==`, `Hash`) is for identity; `almost_eq` is for
//!   classification.

mod affine;
mod bbox;
mod cfg;
mod display;
mod error;
mod hull;
mod line;
mod polygon;
pub mod predicates;
pub mod rand;
mod seq2;
mod vec2;

pub use affine::Affine;
pub use bbox::{BoundingBox, BoxOrPolygon};
pub use cfg::{GeomCfg, EPSILON, EPSILON2};
pub use display::fmt_g;
pub use error::{GeomError, Result};
pub use hull::monotone_chain;
pub use line::{Line, Ray, Segment};
pub use polygon::{Polygon, PolygonHints};
pub use predicates::{cmp_lexi, cos_sin_deg, segments_intersect, side};
pub use seq2::{Seq2, Vec2Array};
pub use vec2::Vec2;
