//! Point-in-polygon location and stepwise polygon reduction in 2D.
//!
//! Scope
//! - Predicates: cross product, signed area, orientation, point-in-triangle,
//!   segment intersection, reflex scans.
//! - Locators: convex half-plane test, concavity elimination, even-odd ray cast.
//! - Traces: replayable concavity removal (guarded and unguarded) and ear clipping.
//!
//! Conventions
//! - Polygons are `&[Point]` with an implied closing edge; no duplicate of the
//!   first vertex is stored.
//! - Every function takes the tolerance `eps` explicitly (`DEFAULT_EPS` = 1e-9).
//! - Nothing here mutates its input or keeps state between calls.

pub mod hull;
pub mod locate;
pub mod predicates;
pub mod sample;
pub mod trace;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use locate::{
    point_in_concave_polygon, point_in_convex_polygon, point_in_polygon,
    point_in_polygon_by_ray_cast,
};
pub use trace::{
    trace_concavity_removal, trace_converged, trace_ear_clipping, trace_safe_concavity_removal,
};
pub use types::{Orientation, Point, Step, Triangle, DEFAULT_EPS};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::convex_hull;
    pub use crate::locate::*;
    pub use crate::predicates::{
        cross, first_reflex, has_self_intersections, is_convex, orientation, point_in_triangle,
        reflex_indices, segments_intersect, side, signed_area,
    };
    pub use crate::sample::{
        draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken, SamplerError, VertexCount,
    };
    pub use crate::trace::*;
    pub use crate::types::{Orientation, Point, Step, Triangle, DEFAULT_EPS};
    pub use nalgebra::{vector, Vector2};
}
