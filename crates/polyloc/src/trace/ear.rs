use tracing::{debug, trace};

use crate::predicates::{is_convex_vertex, orientation, point_in_triangle, triangle_at};
use crate::types::{Point, Step};

/// Stepwise ear clipping.
///
/// Per iteration the lowest-index vertex that is strictly convex under the
/// current orientation and whose triangle `(prev, curr, next)` contains no
/// other remaining vertex (boundary inclusive) is recorded and clipped. At 3
/// vertices a terminal step carrying the final triangle ends the trace.
///
/// Iterations are capped at `2 n + 10` for the input size `n`. Running out of
/// ears or iterations yields a partial trace without a terminal step.
pub fn trace_ear_clipping(polygon: &[Point], eps: f64) -> Vec<Step> {
    let mut work = polygon.to_vec();
    let mut steps = Vec::new();
    if work.len() < 3 {
        return steps;
    }
    let max_iter = 2 * work.len() + 10;
    for _ in 0..max_iter {
        if work.len() == 3 {
            let tri = [work[0], work[1], work[2]];
            steps.push(Step::terminal(&work, Some(tri)));
            return steps;
        }
        let Some(idx) = find_ear(&work, eps) else {
            debug!(vertices = work.len(), "no ear found; partial trace");
            return steps;
        };
        trace!(idx, remaining = work.len() - 1, "ear clipped");
        steps.push(Step::acted(&work, idx, triangle_at(&work, idx), false));
        work.remove(idx);
    }
    debug!(max_iter, vertices = work.len(), "iteration bound reached; partial trace");
    steps
}

fn find_ear(polygon: &[Point], eps: f64) -> Option<usize> {
    let n = polygon.len();
    let orient = orientation(polygon, eps);
    (0..n).find(|&i| {
        if !is_convex_vertex(polygon, i, orient, eps) {
            return false;
        }
        let [a, b, c] = triangle_at(polygon, i);
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        !(0..n)
            .filter(|&j| j != prev && j != i && j != next)
            .any(|j| point_in_triangle(polygon[j], a, b, c, eps))
    })
}
