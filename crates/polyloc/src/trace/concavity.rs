use tracing::{debug, trace};

use crate::predicates::{
    first_reflex, has_self_intersections, reflex_indices, triangle_at, without_vertex,
};
use crate::types::{Point, Step};

/// Unguarded trace of concavity elimination.
///
/// One step per removed reflex vertex (lowest index first), then a terminal
/// step once the working polygon has no reflex vertex. Inputs with fewer than
/// 3 vertices give an empty trace.
pub fn trace_concavity_removal(polygon: &[Point], eps: f64) -> Vec<Step> {
    let mut work = polygon.to_vec();
    let mut steps = Vec::new();
    while work.len() >= 3 {
        let Some(idx) = first_reflex(&work, eps) else {
            steps.push(Step::terminal(&work, None));
            break;
        };
        steps.push(Step::acted(&work, idx, triangle_at(&work, idx), false));
        work.remove(idx);
    }
    steps
}

/// Concavity removal that never introduces a self-intersection.
///
/// Each iteration tries the reflex vertices in scan order. A candidate whose
/// removal would make two non-adjacent edges intersect is recorded with
/// `skipped = true`; the first safe candidate is recorded and applied. The
/// trace ends with a terminal step once convex, or without one when every
/// reflex vertex is unsafe to remove.
pub fn trace_safe_concavity_removal(polygon: &[Point], eps: f64) -> Vec<Step> {
    let mut work = polygon.to_vec();
    let mut steps = Vec::new();
    while work.len() >= 3 {
        let reflex = reflex_indices(&work, eps);
        if reflex.is_empty() {
            steps.push(Step::terminal(&work, None));
            break;
        }
        let mut accepted = None;
        for idx in reflex {
            let candidate = without_vertex(&work, idx);
            let tri = triangle_at(&work, idx);
            if has_self_intersections(&candidate, eps) {
                steps.push(Step::acted(&work, idx, tri, true));
                continue;
            }
            trace!(idx, remaining = candidate.len(), "reflex vertex removed");
            steps.push(Step::acted(&work, idx, tri, false));
            accepted = Some(candidate);
            break;
        }
        match accepted {
            Some(next) => work = next,
            None => {
                debug!(
                    vertices = work.len(),
                    "no reflex vertex can be removed safely; partial trace"
                );
                break;
            }
        }
    }
    steps
}
