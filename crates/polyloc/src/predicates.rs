//! Geometric predicates on points and vertex-list polygons.
//!
//! Conventions
//! - `cross(o, a, b) > 0` is a counter-clockwise turn `o → a → b`.
//! - Every sign or equality decision takes the tolerance `eps` explicitly;
//!   values with `|v| <= eps` are treated as zero.
//! - Polygons are closed implicitly (last vertex connects to the first).

use crate::types::{Orientation, Point, Triangle};

/// Signed cross product of `OA × OB`.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Shoelace sum over all edges, wrap-around edge included.
///
/// Twice the signed area; only the sign and the `eps` comparison matter to
/// callers, so the factor 1/2 is not applied.
pub fn signed_area(polygon: &[Point]) -> f64 {
    let n = polygon.len();
    let mut area = 0.0;
    for i in 0..n {
        let p = polygon[i];
        let q = polygon[(i + 1) % n];
        area += p.x * q.y - p.y * q.x;
    }
    area
}

/// Winding of `polygon`. Near-zero area (`|area| <= eps`) counts as
/// counter-clockwise; this is a tie-break, not a geometric fact.
pub fn orientation(polygon: &[Point], eps: f64) -> Orientation {
    let area = signed_area(polygon);
    if area.abs() <= eps || area > 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// Side of `point` relative to the directed line `p1 → p2` (sign only).
#[inline]
pub fn side(point: Point, p1: Point, p2: Point) -> f64 {
    cross(p1, p2, point)
}

/// Boundary-inclusive point-in-triangle test for either winding.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point, eps: f64) -> bool {
    let d1 = cross(p, a, b);
    let d2 = cross(p, b, c);
    let d3 = cross(p, c, a);
    let all_pos = d1 >= -eps && d2 >= -eps && d3 >= -eps;
    let all_neg = d1 <= eps && d2 <= eps && d3 <= eps;
    all_pos || all_neg
}

/// `p` lies within the `eps`-enlarged bounding box of segment `a–b`.
///
/// Combined with a collinearity check this is an on-segment test.
#[inline]
pub fn within_segment_box(a: Point, b: Point, p: Point, eps: f64) -> bool {
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

/// Closed segment intersection: proper crossing or any collinear touch.
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point, eps: f64) -> bool {
    let o1 = cross(a1, a2, b1);
    let o2 = cross(a1, a2, b2);
    let o3 = cross(b1, b2, a1);
    let o4 = cross(b1, b2, a2);
    let opposite = |u: f64, v: f64| (u > eps && v < -eps) || (u < -eps && v > eps);
    if opposite(o1, o2) && opposite(o3, o4) {
        return true;
    }
    (o1.abs() <= eps && within_segment_box(a1, a2, b1, eps))
        || (o2.abs() <= eps && within_segment_box(a1, a2, b2, eps))
        || (o3.abs() <= eps && within_segment_box(b1, b2, a1, eps))
        || (o4.abs() <= eps && within_segment_box(b1, b2, a2, eps))
}

/// Triangle `(prev, i, next)` around vertex `i` (cyclic neighbors).
///
/// Pre: `polygon.len() >= 3` and `i < polygon.len()`.
#[inline]
pub fn triangle_at(polygon: &[Point], i: usize) -> Triangle {
    let n = polygon.len();
    [polygon[(i + n - 1) % n], polygon[i], polygon[(i + 1) % n]]
}

#[inline]
fn turn_at(polygon: &[Point], i: usize) -> f64 {
    let [prev, curr, next] = triangle_at(polygon, i);
    cross(prev, curr, next)
}

/// Whether vertex `i` turns against the given winding by more than `eps`.
#[inline]
pub fn is_reflex(polygon: &[Point], i: usize, orient: Orientation, eps: f64) -> bool {
    orient.is_reflex_turn(turn_at(polygon, i), eps)
}

/// Whether vertex `i` turns along the given winding by more than `eps`.
/// Collinear vertices are neither reflex nor convex.
#[inline]
pub fn is_convex_vertex(polygon: &[Point], i: usize, orient: Orientation, eps: f64) -> bool {
    orient.is_convex_turn(turn_at(polygon, i), eps)
}

/// Lowest index of a reflex vertex, or `None` if the polygon is convex
/// (or has fewer than 3 vertices).
pub fn first_reflex(polygon: &[Point], eps: f64) -> Option<usize> {
    if polygon.len() < 3 {
        return None;
    }
    let orient = orientation(polygon, eps);
    (0..polygon.len()).find(|&i| is_reflex(polygon, i, orient, eps))
}

/// All reflex vertex indices in scan order.
pub fn reflex_indices(polygon: &[Point], eps: f64) -> Vec<usize> {
    if polygon.len() < 3 {
        return Vec::new();
    }
    let orient = orientation(polygon, eps);
    (0..polygon.len())
        .filter(|&i| is_reflex(polygon, i, orient, eps))
        .collect()
}

/// At least 3 vertices and no reflex vertex.
///
/// Does not detect self-intersection: a pentagram turns consistently and
/// therefore passes.
pub fn is_convex(polygon: &[Point], eps: f64) -> bool {
    polygon.len() >= 3 && first_reflex(polygon, eps).is_none()
}

/// Any pair of non-adjacent edges intersects (closed-segment semantics).
///
/// Fewer than 4 vertices never self-intersect. O(n²).
pub fn has_self_intersections(polygon: &[Point], eps: f64) -> bool {
    let n = polygon.len();
    if n < 4 {
        return false;
    }
    for i in 0..n {
        let a1 = polygon[i];
        let a2 = polygon[(i + 1) % n];
        for j in (i + 1)..n {
            // edges sharing a vertex
            if j == i + 1 || (j + 1) % n == i {
                continue;
            }
            if segments_intersect(a1, a2, polygon[j], polygon[(j + 1) % n], eps) {
                return true;
            }
        }
    }
    false
}

/// Copy of `polygon` without vertex `i`; relative order is kept.
pub fn without_vertex(polygon: &[Point], i: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(polygon.len().saturating_sub(1));
    out.extend_from_slice(&polygon[..i]);
    out.extend_from_slice(&polygon[i + 1..]);
    out
}
