mod input;
mod provenance;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use polyloc::sample::{draw_convex_polygon, draw_star_polygon, RadialCfg, ReplayToken, VertexCount};
use polyloc::{
    point_in_concave_polygon, point_in_convex_polygon, point_in_polygon,
    point_in_polygon_by_ray_cast, trace_concavity_removal, trace_converged, trace_ear_clipping,
    trace_safe_concavity_removal, Point, Step, DEFAULT_EPS,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::input::{format_polygon, parse_point, parse_polygon, read_polygon_file};
use crate::provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "polyloc")]
#[command(about = "Point-in-polygon queries and decomposition traces")]
struct Cmd {
    /// Absolute tolerance for every sign and equality decision
    #[arg(long, global = true, default_value_t = DEFAULT_EPS)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decide whether a point lies inside (or on) a polygon
    Locate {
        #[command(flatten)]
        polygon: PolygonArgs,
        /// Query point as `x,y`
        #[arg(long, allow_hyphen_values = true)]
        point: String,
        #[arg(long, value_enum, default_value_t = Method::Auto)]
        method: Method,
    },
    /// Record a stepwise reduction of a polygon as JSON
    Trace {
        #[command(flatten)]
        polygon: PolygonArgs,
        #[arg(long, value_enum, default_value_t = Algo::Ear)]
        algo: Algo,
        /// Write the trace here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a random simple polygon in `x,y;x,y;...` form
    Sample {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 0.5)]
        radial_jitter: f64,
        /// Take the convex hull of the sampled vertices
        #[arg(long)]
        convex: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct PolygonArgs {
    /// Polygon as `x,y;x,y;...`
    #[arg(long, allow_hyphen_values = true)]
    polygon: Option<String>,
    /// File whose first non-empty line holds the polygon
    #[arg(long)]
    polygon_file: Option<PathBuf>,
}

impl PolygonArgs {
    fn load(&self) -> Result<Vec<Point>> {
        match (&self.polygon, &self.polygon_file) {
            (Some(text), _) => parse_polygon(text).context("parsing --polygon"),
            (None, Some(path)) => read_polygon_file(path),
            (None, None) => anyhow::bail!("either --polygon or --polygon-file is required"),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Method {
    /// Convex half-plane test when convex, concavity elimination otherwise
    Auto,
    Convex,
    Concave,
    Ray,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Algo {
    /// Concavity removal that never introduces a self-intersection
    Safe,
    /// Unguarded concavity removal, as done by the concave locator
    Concavity,
    /// Ear clipping down to a final triangle
    Ear,
}

#[derive(Serialize)]
struct LocateReport {
    point: [f64; 2],
    method: Method,
    eps: f64,
    inside: bool,
}

/// Wire form of a step; `index` is -1 for terminal steps.
#[derive(Serialize)]
struct StepRecord {
    polygon: Vec<[f64; 2]>,
    index: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    triangle: Option<[[f64; 2]; 3]>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    skipped: bool,
}

impl From<&Step> for StepRecord {
    fn from(s: &Step) -> Self {
        Self {
            polygon: s.polygon.iter().map(xy).collect(),
            index: s.index.map_or(-1, |i| i as i64),
            triangle: s.triangle.map(|[a, b, c]| [xy(&a), xy(&b), xy(&c)]),
            skipped: s.skipped,
        }
    }
}

#[derive(Serialize)]
struct TraceReport {
    algo: Algo,
    eps: f64,
    converged: bool,
    steps: Vec<StepRecord>,
}

fn xy(p: &Point) -> [f64; 2] {
    [p.x, p.y]
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let eps = cmd.eps;
    match cmd.action {
        Action::Locate {
            polygon,
            point,
            method,
        } => locate(&polygon.load()?, &point, method, eps),
        Action::Trace { polygon, algo, out } => trace(&polygon.load()?, algo, out.as_deref(), eps),
        Action::Sample {
            vertices,
            seed,
            index,
            radial_jitter,
            convex,
        } => sample(vertices, ReplayToken { seed, index }, radial_jitter, convex),
        Action::Report => report(eps),
    }
}

fn locate(poly: &[Point], point: &str, method: Method, eps: f64) -> Result<()> {
    let q = parse_point(point).context("parsing --point")?;
    let inside = match method {
        Method::Auto => point_in_polygon(q, poly, eps),
        Method::Convex => point_in_convex_polygon(q, poly, eps),
        Method::Concave => point_in_concave_polygon(q, poly, eps),
        Method::Ray => point_in_polygon_by_ray_cast(q, poly, eps),
    };
    tracing::info!(vertices = poly.len(), ?method, inside, "locate");
    let report = LocateReport {
        point: xy(&q),
        method,
        eps,
        inside,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_trace(poly: &[Point], algo: Algo, eps: f64) -> Vec<Step> {
    match algo {
        Algo::Safe => trace_safe_concavity_removal(poly, eps),
        Algo::Concavity => trace_concavity_removal(poly, eps),
        Algo::Ear => trace_ear_clipping(poly, eps),
    }
}

fn trace(poly: &[Point], algo: Algo, out: Option<&Path>, eps: f64) -> Result<()> {
    let steps = run_trace(poly, algo, eps);
    let converged = trace_converged(&steps);
    tracing::info!(vertices = poly.len(), ?algo, steps = steps.len(), converged, "trace");
    let report = TraceReport {
        algo,
        eps,
        converged,
        steps: steps.iter().map(StepRecord::from).collect(),
    };
    let body = serde_json::to_vec_pretty(&report)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(
        "trace",
        serde_json::json!({
            "algo": algo,
            "eps": eps,
            "polygon": format_polygon(poly),
        }),
    );
    let sidecar = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "trace written");
    Ok(())
}

fn sample(vertices: usize, tok: ReplayToken, radial_jitter: f64, convex: bool) -> Result<()> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        radial_jitter,
        ..RadialCfg::default()
    };
    let poly = if convex {
        draw_convex_polygon(cfg, tok)?
    } else {
        draw_star_polygon(cfg, tok)?
    };
    tracing::info!(seed = tok.seed, index = tok.index, vertices = poly.len(), convex, "sample");
    println!("{}", format_polygon(&poly));
    Ok(())
}

fn report(eps: f64) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "polyloc_version": polyloc::VERSION,
        "eps": eps,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
