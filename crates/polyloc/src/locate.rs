//! Point location: convex half-plane test, concavity elimination, ray casting.
//!
//! All three locators are boundary-inclusive and answer "outside" for
//! polygons with fewer than 3 vertices. None of them mutates its input.
//!
//! Preconditions differ:
//! - `point_in_convex_polygon` trusts that its input is convex.
//! - `point_in_concave_polygon` trusts that its input is simple.
//! - `point_in_polygon_by_ray_cast` accepts self-intersecting input (even-odd).

use crate::predicates::{
    first_reflex, is_convex, orientation, point_in_triangle, side, triangle_at, within_segment_box,
};
use crate::types::{Orientation, Point};

/// Half-plane test. The answer for a non-convex polygon is unspecified.
pub fn point_in_convex_polygon(point: Point, polygon: &[Point], eps: f64) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let orient = orientation(polygon, eps);
    for i in 0..n {
        let s = side(point, polygon[i], polygon[(i + 1) % n]);
        let outward = match orient {
            Orientation::CounterClockwise => s < -eps,
            Orientation::Clockwise => s > eps,
        };
        if outward {
            return false;
        }
    }
    true
}

/// Concavity elimination.
///
/// Repeatedly takes the lowest-index reflex vertex of a working copy. A query
/// point inside its concavity triangle `(prev, reflex, next)` is outside the
/// polygon; otherwise the reflex vertex is dropped and the scan restarts.
/// Once no reflex vertex is left the convex half-plane test decides.
///
/// Only the first reflex vertex by scan order is removed, with no check that
/// the reduced polygon stays simple. Some simple polygons are misclassified
/// by this (see the `known_limitation_*` tests); use
/// `point_in_polygon_by_ray_cast` when that matters.
pub fn point_in_concave_polygon(point: Point, polygon: &[Point], eps: f64) -> bool {
    let mut work = polygon.to_vec();
    while work.len() >= 3 {
        let Some(idx) = first_reflex(&work, eps) else {
            return point_in_convex_polygon(point, &work, eps);
        };
        let [a, b, c] = triangle_at(&work, idx);
        if point_in_triangle(point, a, b, c, eps) {
            return false;
        }
        work.remove(idx);
    }
    false
}

/// Even-odd rule with a boundary-inclusive fast path.
pub fn point_in_polygon_by_ray_cast(point: Point, polygon: &[Point], eps: f64) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let (x, y) = (point.x, point.y);
    let mut inside = false;
    for i in 0..n {
        let p1 = polygon[i];
        let p2 = polygon[(i + 1) % n];
        if within_segment_box(p1, p2, point, eps)
            && ((p2.x - p1.x) * (y - p1.y) - (p2.y - p1.y) * (x - p1.x)).abs() <= eps
        {
            return true;
        }
        // Half-open straddle rule: a vertex exactly at height y counts once.
        if (p1.y > y) != (p2.y > y) {
            let x_cross = p1.x + (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y);
            if x_cross > x {
                inside = !inside;
            }
        }
    }
    inside
}

/// Dispatch on convexity: half-plane test for convex input, concavity
/// elimination otherwise.
pub fn point_in_polygon(point: Point, polygon: &[Point], eps: f64) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    if is_convex(polygon, eps) {
        point_in_convex_polygon(point, polygon, eps)
    } else {
        point_in_concave_polygon(point, polygon, eps)
    }
}
