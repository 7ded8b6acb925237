//! Basic 2D types and the shared tolerance.
//!
//! - `Point`: a plain `nalgebra` column vector; polygons are slices of them.
//! - `Orientation`: winding tag derived from the shoelace sum.
//! - `Step`: one record of a replayable decomposition trace.

use nalgebra::Vector2;

/// Absolute tolerance used when no caller-specific value is at hand.
///
/// Tuned for coordinates of order 1..1e3 (pixel-scale inputs stay exact for
/// integer vertices). Callers with larger coordinates should pass a larger eps.
pub const DEFAULT_EPS: f64 = 1e-9;

/// A 2D point. Polygons are `&[Point]` with an implied closing edge.
pub type Point = Vector2<f64>;

/// Three vertices `(prev, curr, next)` cut from a polygon.
pub type Triangle = [Point; 3];

/// Polygon winding, derived from the sign of the signed area.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
}

impl Orientation {
    /// True if a turn with signed cross product `turn` bends against this
    /// winding by more than `eps` (i.e. the vertex is reflex).
    #[inline]
    pub fn is_reflex_turn(self, turn: f64, eps: f64) -> bool {
        match self {
            Orientation::CounterClockwise => turn < -eps,
            Orientation::Clockwise => turn > eps,
        }
    }

    /// True if a turn bends along this winding by more than `eps`.
    #[inline]
    pub fn is_convex_turn(self, turn: f64, eps: f64) -> bool {
        match self {
            Orientation::CounterClockwise => turn > eps,
            Orientation::Clockwise => turn < -eps,
        }
    }
}

/// One record of a decomposition trace.
///
/// Invariants:
/// - `polygon` is the working polygon *before* this step acted on it; it is an
///   independent copy owned by the step.
/// - `index == None` marks a terminal step (converged, or final triangle).
/// - `skipped` is only ever set by the safe concavity-removal trace, for a
///   tentative removal that was rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub polygon: Vec<Point>,
    pub index: Option<usize>,
    pub triangle: Option<Triangle>,
    pub skipped: bool,
}

impl Step {
    /// Terminal record: nothing left to act on.
    pub(crate) fn terminal(polygon: &[Point], triangle: Option<Triangle>) -> Self {
        Self {
            polygon: polygon.to_vec(),
            index: None,
            triangle,
            skipped: false,
        }
    }

    pub(crate) fn acted(
        polygon: &[Point],
        index: usize,
        triangle: Triangle,
        skipped: bool,
    ) -> Self {
        Self {
            polygon: polygon.to_vec(),
            index: Some(index),
            triangle: Some(triangle),
            skipped,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.index.is_none()
    }

    /// Polygon left after applying this step, i.e. the snapshot with `index`
    /// removed. Terminal and skipped steps leave the polygon unchanged.
    pub fn result(&self) -> Vec<Point> {
        match self.index {
            Some(i) if !self.skipped => {
                let mut out = self.polygon.clone();
                out.remove(i);
                out
            }
            _ => self.polygon.clone(),
        }
    }
}
