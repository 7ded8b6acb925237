//! Random simple polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic polygon sources for property tests, benchmarks, and the CLI.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter. Angles stay strictly increasing, so the vertex loop is
//!   star-shaped about the origin and therefore simple (usually concave).
//! - The convex variant takes the hull of the same point cloud.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;
use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::hull::convex_hull;
use crate::types::Point;

/// Error for invalid sampler parameters or degenerate draws.
#[derive(Debug)]
pub enum SamplerError {
    InvalidParams { reason: String },
    DegenerateSample { reason: String },
}

impl SamplerError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SamplerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for SamplerError {}

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`.
    /// Must lie in [0, 1).
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            random_phase: true,
        }
    }
}

impl RadialCfg {
    pub fn validate(&self) -> Result<(), SamplerError> {
        if !(self.base_radius.is_finite() && self.base_radius > 0.0) {
            return Err(SamplerError::invalid("base_radius must be finite and > 0"));
        }
        if !(self.radial_jitter.is_finite() && (0.0..1.0).contains(&self.radial_jitter)) {
            return Err(SamplerError::invalid("radial_jitter must lie in [0, 1)"));
        }
        if !self.angle_jitter_frac.is_finite() {
            return Err(SamplerError::invalid("angle_jitter_frac must be finite"));
        }
        if let VertexCount::Uniform { min, max } = self.vertex_count {
            if min > max {
                return Err(SamplerError::invalid("vertex_count min <= max required"));
            }
        }
        Ok(())
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn radial_points(cfg: &RadialCfg, tok: ReplayToken) -> Result<Vec<Point>, SamplerError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    // |jitter| < Δ/2 keeps the angles strictly increasing.
    let angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + (k as f64) * delta + jitter
        })
        .collect();
    Ok(angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * cfg.radial_jitter;
            let r = (1.0 + u) * cfg.base_radius;
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect())
}

/// Draw a simple, star-shaped polygon in CCW order.
pub fn draw_star_polygon(cfg: RadialCfg, tok: ReplayToken) -> Result<Vec<Point>, SamplerError> {
    radial_points(&cfg, tok)
}

/// Draw a convex polygon (CCW hull of the star polygon's vertices).
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Result<Vec<Point>, SamplerError> {
    let pts = radial_points(&cfg, tok)?;
    convex_hull(&pts)
        .ok_or_else(|| SamplerError::degenerate("convex hull has fewer than 3 vertices"))
}
