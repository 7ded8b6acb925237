//! Convex hull of a point cloud (Andrew's monotone chain).

use std::cmp::Ordering;

use crate::predicates::cross;
use crate::types::Point;

/// Hull vertices in CCW order, collinear points dropped.
///
/// Returns `None` when fewer than 3 distinct, non-collinear points remain.
pub fn convex_hull(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        return None;
    }
    Some(hull)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{is_convex, orientation};
    use crate::types::{Orientation, DEFAULT_EPS};
    use nalgebra::vector;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn hull_of_square_with_interior_points() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.5, 1.5],
            vector![0.0, 2.0],
            vector![1.0, 0.0], // collinear on bottom edge
        ];
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull.len(), 4);
        assert_eq!(orientation(&hull, DEFAULT_EPS), Orientation::CounterClockwise);
    }

    #[test]
    fn hull_rejects_collinear_input() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert!(convex_hull(&pts).is_none());
        assert!(convex_hull(&pts[..2]).is_none());
    }

    #[test]
    fn random_hull_is_convex() {
        let mut rng = StdRng::seed_from_u64(123);
        let pts: Vec<Point> = (0..30)
            .map(|_| vector![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
            .collect();
        let hull = convex_hull(&pts).unwrap();
        assert!(hull.len() >= 3);
        assert!(is_convex(&hull, DEFAULT_EPS));
    }
}
