use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ops::{
    init_pose, quantize, reflect_vertex_across_segment, reflect_vertex_on_axis, rotate,
    snap_to_hole, translate, QuantizeMode,
};
use crate::error::{EngineError, Result};
use crate::geom2::Axis;
use crate::model::{check_finite, check_len, Problem, Solution};
use crate::Point;

/// One named operation, storable as JSON (`{"op": "translate", "dx": 3, "dy": 4}`)
/// or as compact text (`translate=3,4`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Transform {
    /// Reset to the figure's rest pose.
    Init,
    Translate { dx: f64, dy: f64 },
    Rotate { cx: f64, cy: f64, degrees: f64 },
    /// Mirror one vertex across the axis-parallel line through `base`.
    Flip { vertex: usize, base: usize, axis: Axis },
    /// Mirror one vertex across the line through `from` and `to`.
    Reflect { vertex: usize, from: usize, to: usize },
    Quantize { mode: QuantizeMode },
    /// Snap vertices onto hole points within `radius`.
    Snap { radius: f64 },
}

impl Transform {
    /// Apply to `vertices`, which must be index-aligned with `problem.figure`.
    ///
    /// Fails with `MalformedInput` when the result leaves the finite range
    /// (e.g. a translation overflowing to infinity).
    pub fn apply(&self, problem: &Problem, vertices: &[Point]) -> Result<Vec<Point>> {
        if !matches!(self, Transform::Init) {
            check_len(problem.vertex_count(), vertices.len())?;
        }
        let out = match *self {
            Transform::Init => init_pose(&problem.figure),
            Transform::Translate { dx, dy } => translate(vertices, dx, dy),
            Transform::Rotate { cx, cy, degrees } => rotate(vertices, Point::new(cx, cy), degrees),
            Transform::Flip { vertex, base, axis } => {
                reflect_vertex_on_axis(vertices, vertex, base, axis)?
            }
            Transform::Reflect { vertex, from, to } => {
                reflect_vertex_across_segment(vertices, vertex, from, to)?
            }
            Transform::Quantize { mode } => quantize(vertices, mode),
            Transform::Snap { radius } => snap_to_hole(vertices, &problem.hole, radius),
        };
        check_finite("vertices", &out)?;
        Ok(out)
    }
}

/// Fold `ops` over `start`. The first failing op aborts; `start` is untouched.
pub fn apply_all(problem: &Problem, start: &Solution, ops: &[Transform]) -> Result<Solution> {
    let mut cur = start.vertices.clone();
    for op in ops {
        cur = op.apply(problem, &cur)?;
    }
    Solution::new(cur)
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transform::Init => f.write_str("init"),
            Transform::Translate { dx, dy } => write!(f, "translate={dx},{dy}"),
            Transform::Rotate { cx, cy, degrees } => write!(f, "rotate={cx},{cy},{degrees}"),
            Transform::Flip { vertex, base, axis } => {
                let a = match axis {
                    Axis::X => "x",
                    Axis::Y => "y",
                };
                write!(f, "flip={vertex},{base},{a}")
            }
            Transform::Reflect { vertex, from, to } => write!(f, "reflect={vertex},{from},{to}"),
            Transform::Quantize { mode } => write!(f, "{mode}"),
            Transform::Snap { radius } => write!(f, "snap={radius}"),
        }
    }
}

fn args<'a>(name: &str, rest: Option<&'a str>, n: usize) -> Result<Vec<&'a str>> {
    let parts: Vec<&str> = rest.map(|r| r.split(',').map(str::trim).collect()).unwrap_or_default();
    if parts.len() != n {
        return Err(EngineError::malformed(format!(
            "{name} takes {n} argument(s), got {}",
            parts.len()
        )));
    }
    Ok(parts)
}

fn num(s: &str) -> Result<f64> {
    let v: f64 = s
        .parse()
        .map_err(|_| EngineError::malformed(format!("not a number: {s:?}")))?;
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EngineError::malformed(format!("not finite: {s:?}")))
    }
}

fn index(s: &str) -> Result<usize> {
    s.parse()
        .map_err(|_| EngineError::malformed(format!("not a vertex index: {s:?}")))
}

impl FromStr for Transform {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, rest) = match s.split_once('=') {
            Some((n, r)) => (n.trim(), Some(r)),
            None => (s.trim(), None),
        };
        match name {
            "init" => {
                args(name, rest, 0)?;
                Ok(Transform::Init)
            }
            "translate" => {
                let a = args(name, rest, 2)?;
                Ok(Transform::Translate {
                    dx: num(a[0])?,
                    dy: num(a[1])?,
                })
            }
            "rotate" => {
                let a = args(name, rest, 3)?;
                Ok(Transform::Rotate {
                    cx: num(a[0])?,
                    cy: num(a[1])?,
                    degrees: num(a[2])?,
                })
            }
            "flip" => {
                let a = args(name, rest, 3)?;
                let axis = match a[2] {
                    "x" => Axis::X,
                    "y" => Axis::Y,
                    other => {
                        return Err(EngineError::malformed(format!(
                            "flip axis must be x or y, got {other:?}"
                        )))
                    }
                };
                Ok(Transform::Flip {
                    vertex: index(a[0])?,
                    base: index(a[1])?,
                    axis,
                })
            }
            "reflect" => {
                let a = args(name, rest, 3)?;
                Ok(Transform::Reflect {
                    vertex: index(a[0])?,
                    from: index(a[1])?,
                    to: index(a[2])?,
                })
            }
            "round" | "floor" | "ceil" => {
                args(name, rest, 0)?;
                Ok(Transform::Quantize {
                    mode: name.parse()?,
                })
            }
            "snap" => {
                let a = args(name, rest, 1)?;
                Ok(Transform::Snap {
                    radius: num(a[0])?,
                })
            }
            other => Err(EngineError::malformed(format!("unknown transform {other:?}"))),
        }
    }
}
