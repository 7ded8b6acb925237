use super::*;
use crate::predicates::{has_self_intersections, without_vertex};
use crate::types::{Point, DEFAULT_EPS as EPS};
use nalgebra::vector;

fn poly(pts: &[(i32, i32)]) -> Vec<Point> {
    pts.iter().map(|&(x, y)| vector![x as f64, y as f64]).collect()
}

fn square() -> Vec<Point> {
    poly(&[(0, 0), (5, 0), (5, 5), (0, 5)])
}

fn notched() -> Vec<Point> {
    poly(&[(0, 0), (5, 0), (5, 5), (3, 2), (0, 5)])
}

/// Hand-drawn 18-vertex outline that used to break a naive clipper.
fn sketch() -> Vec<Point> {
    poly(&[
        (334, 262),
        (210, 352),
        (302, 406),
        (640, 403),
        (602, 273),
        (464, 294),
        (420, 363),
        (490, 356),
        (427, 380),
        (362, 372),
        (304, 351),
        (324, 325),
        (335, 325),
        (393, 312),
        (406, 276),
        (388, 270),
        (372, 282),
        (337, 297),
    ])
}

fn indices(steps: &[Step]) -> Vec<Option<usize>> {
    steps.iter().map(|s| s.index).collect()
}

#[test]
fn ear_clipping_square_one_clip_then_final() {
    let sq = square();
    let steps = trace_ear_clipping(&sq, EPS);
    assert_eq!(indices(&steps), vec![Some(0), None]);
    assert_eq!(steps[0].polygon, sq);
    assert_eq!(steps[0].triangle, Some([sq[3], sq[0], sq[1]]));
    let last = steps.last().unwrap();
    assert_eq!(last.polygon.len(), 3);
    assert_eq!(last.triangle, Some([sq[1], sq[2], sq[3]]));
    assert!(trace_converged(&steps));
}

#[test]
fn ear_clipping_skips_ears_containing_vertices() {
    // Vertex 0 and 1 triangles contain the reflex vertex (3,2) (boundary
    // inclusive), so the first ear is vertex 2.
    let steps = trace_ear_clipping(&notched(), EPS);
    assert_eq!(indices(&steps), vec![Some(2), Some(1), None]);
    assert!(steps.iter().all(|s| !s.skipped));
}

#[test]
fn ear_clipping_sketch_stays_simple() {
    let p = sketch();
    let steps = trace_ear_clipping(&p, EPS);
    assert_eq!(steps.len(), 16);
    for s in &steps {
        assert!(!has_self_intersections(&s.polygon, EPS));
    }
    assert!(trace_converged(&steps));
    assert_eq!(steps.last().unwrap().polygon.len(), 3);
    // snapshots shrink by exactly one vertex per step
    for (k, s) in steps.iter().enumerate() {
        assert_eq!(s.polygon.len(), p.len() - k);
    }
}

#[test]
fn ear_clipping_collinear_input_is_partial() {
    let line = poly(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
    let steps = trace_ear_clipping(&line, EPS);
    assert!(steps.is_empty());
    assert!(!trace_converged(&steps));
}

#[test]
fn traces_of_tiny_inputs_are_empty() {
    let two = poly(&[(0, 0), (1, 1)]);
    assert!(trace_ear_clipping(&two, EPS).is_empty());
    assert!(trace_safe_concavity_removal(&two, EPS).is_empty());
    assert!(trace_concavity_removal(&two, EPS).is_empty());
}

#[test]
fn ear_clipping_triangle_is_single_final_step() {
    let tri = poly(&[(0, 0), (4, 0), (0, 3)]);
    let steps = trace_ear_clipping(&tri, EPS);
    assert_eq!(steps.len(), 1);
    assert!(steps[0].is_terminal());
    assert_eq!(steps[0].triangle, Some([tri[0], tri[1], tri[2]]));
}

#[test]
fn safe_removal_notched_square() {
    let p = notched();
    let steps = trace_safe_concavity_removal(&p, EPS);
    assert_eq!(indices(&steps), vec![Some(3), None]);
    assert_eq!(steps[0].triangle, Some([p[2], p[3], p[4]]));
    assert_eq!(steps[1].polygon, square());
    assert!(steps[1].triangle.is_none());
    assert!(trace_converged(&steps));
}

#[test]
fn safe_removal_convex_input_is_one_terminal_step() {
    let steps = trace_safe_concavity_removal(&square(), EPS);
    assert_eq!(steps.len(), 1);
    assert!(steps[0].is_terminal());
    assert!(!steps[0].skipped);
}

#[test]
fn safe_removal_sketch_records_skips_and_converges() {
    let steps = trace_safe_concavity_removal(&sketch(), EPS);
    assert_eq!(steps.len(), 16);
    assert_eq!(steps.iter().filter(|s| s.skipped).count(), 2);
    assert!(steps[4].skipped);
    assert_eq!(steps[4].index, Some(6));
    assert_eq!(steps[5].index, Some(7));
    assert!(!steps[5].skipped);
    for s in steps.iter().filter(|s| !s.skipped && !s.is_terminal()) {
        assert!(!has_self_intersections(&s.result(), EPS));
    }
    assert!(trace_converged(&steps));
}

#[test]
fn safe_removal_skipped_step_keeps_polygon() {
    let steps = trace_safe_concavity_removal(&sketch(), EPS);
    let skipped = &steps[4];
    let idx = skipped.index.unwrap();
    assert!(has_self_intersections(&without_vertex(&skipped.polygon, idx), EPS));
    assert_eq!(skipped.result(), skipped.polygon);
    // the attempt after a skip acts on the same snapshot
    assert_eq!(steps[5].polygon, skipped.polygon);
}

#[test]
fn safe_removal_stops_when_nothing_is_safe() {
    // Self-intersecting hexagon: both reflex vertices are unsafe to remove.
    let p = poly(&[(0, 2), (6, 8), (5, 5), (2, 8), (0, 7), (8, 6)]);
    assert!(has_self_intersections(&p, EPS));
    let steps = trace_safe_concavity_removal(&p, EPS);
    assert_eq!(indices(&steps), vec![Some(3), Some(4)]);
    assert!(steps.iter().all(|s| s.skipped));
    assert!(!trace_converged(&steps));
}

#[test]
fn unguarded_removal_follows_first_reflex() {
    let steps = trace_concavity_removal(&sketch(), EPS);
    assert_eq!(
        indices(&steps),
        vec![Some(7), Some(7), Some(6), Some(6), Some(6), Some(11), Some(11), None]
    );
    // Step 4 removes (304,351), which the safe trace rejects.
    assert!(has_self_intersections(&steps[4].result(), EPS));
}

#[test]
fn snapshots_are_independent_copies() {
    let p = notched();
    let mut steps = trace_concavity_removal(&p, EPS);
    steps[0].polygon[0] = vector![99.0, 99.0];
    assert_eq!(p[0], vector![0.0, 0.0]);
    assert_eq!(steps[1].polygon[0], vector![0.0, 0.0]);
}
