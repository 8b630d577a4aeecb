use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::geom2::{distance, reflect_across_segment, reflect_on_axis, rotate_point, Axis};
use crate::model::Figure;
use crate::Point;

/// Fresh copy of the figure's rest pose.
pub fn init_pose(figure: &Figure) -> Vec<Point> {
    figure.vertices.clone()
}

/// Add `(dx, dy)` to every vertex.
pub fn translate(vertices: &[Point], dx: f64, dy: f64) -> Vec<Point> {
    let d = Vector2::new(dx, dy);
    vertices.iter().map(|p| p + d).collect()
}

/// Rotate every vertex about `center` by `degrees` (counter-clockwise positive).
pub fn rotate(vertices: &[Point], center: Point, degrees: f64) -> Vec<Point> {
    vertices
        .iter()
        .map(|&p| rotate_point(center, degrees, p))
        .collect()
}

/// Mirror `vertices[vertex]` across the axis-parallel line through `vertices[base]`.
pub fn reflect_vertex_on_axis(
    vertices: &[Point],
    vertex: usize,
    base: usize,
    axis: Axis,
) -> Result<Vec<Point>> {
    EngineError::check_index(vertex, vertices.len())?;
    EngineError::check_index(base, vertices.len())?;
    let mut out = vertices.to_vec();
    out[vertex] = reflect_on_axis(vertices[base], vertices[vertex], axis);
    Ok(out)
}

/// Mirror `vertices[vertex]` across the line through `vertices[from]` and `vertices[to]`.
///
/// Fails with `DegenerateSegment` when `from == to` or both endpoints coincide.
pub fn reflect_vertex_across_segment(
    vertices: &[Point],
    vertex: usize,
    from: usize,
    to: usize,
) -> Result<Vec<Point>> {
    let n = vertices.len();
    EngineError::check_index(vertex, n)?;
    EngineError::check_index(from, n)?;
    EngineError::check_index(to, n)?;
    if from == to {
        return Err(EngineError::DegenerateSegment { from, to });
    }
    let mirrored = reflect_across_segment(vertices[from], vertices[to], vertices[vertex])
        .ok_or(EngineError::DegenerateSegment { from, to })?;
    let mut out = vertices.to_vec();
    out[vertex] = mirrored;
    Ok(out)
}

/// Per-coordinate rounding applied by [`quantize`].
///
/// `Round` breaks ties away from zero (`f64::round`): `1.5 -> 2`, `2.5 -> 3`,
/// `-1.5 -> -2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantizeMode {
    Round,
    Floor,
    Ceil,
}

impl QuantizeMode {
    #[inline]
    fn apply(self, v: f64) -> f64 {
        match self {
            QuantizeMode::Round => v.round(),
            QuantizeMode::Floor => v.floor(),
            QuantizeMode::Ceil => v.ceil(),
        }
    }
}

impl fmt::Display for QuantizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            QuantizeMode::Round => "round",
            QuantizeMode::Floor => "floor",
            QuantizeMode::Ceil => "ceil",
        })
    }
}

impl FromStr for QuantizeMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "round" => Ok(QuantizeMode::Round),
            "floor" => Ok(QuantizeMode::Floor),
            "ceil" => Ok(QuantizeMode::Ceil),
            other => Err(EngineError::malformed(format!(
                "unknown quantize mode {other:?}"
            ))),
        }
    }
}

/// Round every coordinate of every vertex with `mode`.
pub fn quantize(vertices: &[Point], mode: QuantizeMode) -> Vec<Point> {
    vertices.iter().map(|p| p.map(|c| mode.apply(c))).collect()
}

/// Replace each vertex with the first hole point within `radius` (inclusive).
///
/// The hole is scanned in its given order, so an earlier in-range point wins
/// over a later closer one. Vertices with no hole point in range are kept.
pub fn snap_to_hole(vertices: &[Point], hole: &[Point], radius: f64) -> Vec<Point> {
    vertices
        .iter()
        .map(|&v| {
            hole.iter()
                .copied()
                .find(|&h| distance(v, h) <= radius)
                .unwrap_or(v)
        })
        .collect()
}
