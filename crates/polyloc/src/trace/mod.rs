//! Replayable decomposition traces.
//!
//! Purpose
//! - Record, step by step, how a polygon is reduced, so an external viewer can
//!   play the process back. No trace answers inside/outside.
//!
//! Traces
//! - `trace_concavity_removal`: exactly what `point_in_concave_polygon` does to
//!   its working copy (first reflex vertex, no simplicity guard).
//! - `trace_safe_concavity_removal`: removes the first reflex vertex whose
//!   removal keeps the polygon simple; rejected attempts are recorded as skipped.
//! - `trace_ear_clipping`: stepwise ear clipping down to a final triangle.
//!
//! Termination
//! - Every trace is finite. A trace that stops before convergence is a normal
//!   return value; `trace_converged` tells the two apart.

mod concavity;
mod ear;

pub use concavity::{trace_concavity_removal, trace_safe_concavity_removal};
pub use ear::trace_ear_clipping;

use crate::types::Step;

/// The last recorded step is terminal (`index == None`).
///
/// Empty traces (input with fewer than 3 vertices) did not converge.
pub fn trace_converged(steps: &[Step]) -> bool {
    steps.last().map_or(false, Step::is_terminal)
}

#[cfg(test)]
mod tests;
