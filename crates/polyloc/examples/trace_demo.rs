//! Print an ear-clipping and a safe concavity-removal trace step by step.
//!
//! Usage:
//!   cargo run -p polyloc --example trace_demo
//!   cargo run -p polyloc --example trace_demo -- 7   # random star polygon, seed 7

use polyloc::prelude::*;

fn main() {
    let poly: Vec<Point> = match std::env::args().nth(1).and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Fixed(9),
                ..RadialCfg::default()
            };
            match draw_star_polygon(cfg, ReplayToken { seed, index: 0 }) {
                Ok(p) => p,
                Err(err) => {
                    eprintln!("sampler failed: {err}");
                    return;
                }
            }
        }
        None => vec![
            vector![0.0, 0.0],
            vector![5.0, 0.0],
            vector![5.0, 5.0],
            vector![3.0, 2.0],
            vector![0.0, 5.0],
        ],
    };

    println!("ear clipping:");
    print_steps(&trace_ear_clipping(&poly, DEFAULT_EPS));
    println!("safe concavity removal:");
    print_steps(&trace_safe_concavity_removal(&poly, DEFAULT_EPS));
}

fn print_steps(steps: &[Step]) {
    for (k, s) in steps.iter().enumerate() {
        let idx = s.index.map_or("-".to_string(), |i| i.to_string());
        let mark = if s.skipped { " (skipped)" } else { "" };
        println!("  step {k}: n={} index={idx}{mark}", s.polygon.len());
    }
    println!("  converged: {}", trace_converged(steps));
}
