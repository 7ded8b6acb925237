//! Text formats for polygons and points: `"x,y"` and `"x,y;x,y;..."`.

use anyhow::{bail, Context, Result};
use polyloc::Point;
use std::fs;
use std::path::Path;

/// Parse a single `x,y` pair.
pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .trim()
        .split_once(',')
        .with_context(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().with_context(|| format!("bad x in `{s}`"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y in `{s}`"))?;
    if !(x.is_finite() && y.is_finite()) {
        bail!("non-finite coordinate in `{s}`");
    }
    Ok(Point::new(x, y))
}

/// Parse `x,y;x,y;...`. Empty segments (e.g. a trailing `;`) are ignored.
pub fn parse_polygon(s: &str) -> Result<Vec<Point>> {
    s.split(';')
        .filter(|part| !part.trim().is_empty())
        .enumerate()
        .map(|(k, part)| parse_point(part).with_context(|| format!("vertex {k}")))
        .collect()
}

/// First non-empty line of a polygon list file.
pub fn read_polygon_file(path: &Path) -> Result<Vec<Point>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let line = text
        .lines()
        .find(|l| !l.trim().is_empty())
        .with_context(|| format!("{} holds no polygon", path.display()))?;
    parse_polygon(line).with_context(|| format!("parsing {}", path.display()))
}

/// Inverse of `parse_polygon`; integral coordinates print without a fraction.
pub fn format_polygon(poly: &[Point]) -> String {
    poly.iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(";")
}
