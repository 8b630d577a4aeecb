//! Edge-length constraint check.
//!
//! For every figure edge `(u, v)`:
//! `stretch_ppm = |len(candidate) / len(rest) - 1| * 1e6`, and the edge is
//! valid iff `stretch_ppm <= epsilon + 1`. The `+ 1` slack is kept exactly as
//! the external scorer's tooling applies it.
//!
//! Every edge is visited; the result is a complete partition of
//! `figure.edges`. A zero-length rest edge is an error, not an invalid edge.

use crate::cfg::{PPM, STRETCH_SLACK_PPM};
use crate::error::{EngineError, Result};
use crate::geom2::distance;
use crate::model::{check_len, Edge, Problem};
use crate::Point;

/// Per-edge outcome in figure edge order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeCheck {
    pub edge: Edge,
    pub stretch_ppm: f64,
    pub valid: bool,
}

/// Partition of the figure's edges into valid / invalid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeClassification {
    pub valid: Vec<Edge>,
    pub invalid: Vec<Edge>,
    pub checks: Vec<EdgeCheck>,
}

impl EdgeClassification {
    #[inline]
    pub fn is_all_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Largest stretch over all edges (0 for an edgeless figure).
    pub fn max_stretch_ppm(&self) -> f64 {
        self.checks.iter().map(|c| c.stretch_ppm).fold(0.0, f64::max)
    }
}

/// Stretch of one edge in ppm; `None` when the rest length is zero.
pub fn stretch_ppm(rest: (Point, Point), candidate: (Point, Point)) -> Option<f64> {
    let original = distance(rest.0, rest.1);
    if original == 0.0 {
        return None;
    }
    let moved = distance(candidate.0, candidate.1);
    Some((moved / original - 1.0).abs() * PPM)
}

/// The acceptance test on a precomputed stretch.
#[inline]
pub fn within_tolerance(stretch_ppm: f64, epsilon: u64) -> bool {
    stretch_ppm <= epsilon as f64 + STRETCH_SLACK_PPM
}

/// Classify every edge of `problem.figure` against `candidate`.
pub fn classify_edges(problem: &Problem, candidate: &[Point]) -> Result<EdgeClassification> {
    let rest = &problem.figure.vertices;
    check_len(rest.len(), candidate.len())?;
    let mut out = EdgeClassification {
        checks: Vec::with_capacity(problem.figure.edges.len()),
        ..Default::default()
    };
    for &edge in &problem.figure.edges {
        let Edge(u, v) = edge;
        EngineError::check_index(u, rest.len())?;
        EngineError::check_index(v, rest.len())?;
        let stretch = stretch_ppm((rest[u], rest[v]), (candidate[u], candidate[v]))
            .ok_or(EngineError::DegenerateOriginalEdge { edge })?;
        let valid = within_tolerance(stretch, problem.epsilon);
        if valid {
            out.valid.push(edge);
        } else {
            out.invalid.push(edge);
        }
        out.checks.push(EdgeCheck {
            edge,
            stretch_ppm: stretch,
            valid,
        });
    }
    Ok(out)
}
