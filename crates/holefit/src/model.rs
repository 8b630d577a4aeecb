//! Problem / figure / solution value types.
//!
//! Invariants (enforced by the constructors and the JSON parsers)
//! - every coordinate is finite;
//! - every edge references vertex indices in `0..figure.vertices.len()`;
//! - a solution bound to a problem has exactly `figure.vertices.len()` points.
//!
//! `Problem` is read-only after construction. `Solution` is a plain value;
//! transforms build new ones instead of mutating.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{self, ProblemWire, SolutionWire};
use crate::error::{EngineError, Result};
use crate::Point;

/// Unordered vertex index pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge(pub usize, pub usize);

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// The rigid graph being fitted. Vertex positions are the rest pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub vertices: Vec<Point>,
    pub edges: Vec<Edge>,
}

impl Figure {
    /// Build a figure, checking coordinates and edge indices.
    pub fn new(vertices: Vec<Point>, edges: Vec<Edge>) -> Result<Self> {
        check_finite("figure.vertices", &vertices)?;
        let n = vertices.len();
        for e in &edges {
            if e.0 >= n || e.1 >= n {
                return Err(EngineError::malformed(format!(
                    "edge {e} references a vertex outside 0..{n}"
                )));
            }
        }
        Ok(Self { vertices, edges })
    }
}

/// Contest bonus attached to a problem; carried through, never interpreted.
#[derive(Clone, Debug, PartialEq)]
pub struct Bonus {
    pub kind: String,
    pub problem: u32,
    pub position: Point,
}

/// A hole polygon, a figure, and the stretch tolerance in ppm.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub hole: Vec<Point>,
    pub figure: Figure,
    pub epsilon: u64,
    pub bonuses: Vec<Bonus>,
}

impl Problem {
    pub fn new(hole: Vec<Point>, figure: Figure, epsilon: u64) -> Result<Self> {
        check_finite("hole", &hole)?;
        Ok(Self {
            hole,
            figure,
            epsilon,
            bonuses: Vec::new(),
        })
    }

    /// Parse and structurally validate problem JSON.
    pub fn from_json(text: &str) -> Result<Self> {
        let wire: ProblemWire = serde_json::from_str(text)
            .map_err(|e| EngineError::malformed(format!("problem json: {e}")))?;
        wire.into_problem()
    }

    /// Number of figure vertices every bound solution must carry.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.figure.vertices.len()
    }

    /// Check that `solution` can be evaluated against this problem.
    pub fn check_solution(&self, solution: &Solution) -> Result<()> {
        check_len(self.vertex_count(), solution.vertices.len())
    }
}

/// Candidate vertex positions, index-aligned with `figure.vertices`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Solution {
    pub vertices: Vec<Point>,
}

impl Solution {
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        check_finite("vertices", &vertices)?;
        Ok(Self { vertices })
    }

    /// Parse solution JSON without binding it to a problem.
    pub fn from_json(text: &str) -> Result<Self> {
        let wire: SolutionWire = serde_json::from_str(text)
            .map_err(|e| EngineError::malformed(format!("solution json: {e}")))?;
        Self::new(codec::points_from_wire(wire.vertices))
    }

    /// Parse solution JSON and check it against `problem`.
    pub fn from_json_for(problem: &Problem, text: &str) -> Result<Self> {
        let s = Self::from_json(text)?;
        problem.check_solution(&s)?;
        Ok(s)
    }

    /// Serialize as `{"vertices": [[x, y], ...]}`; integral values print as integers.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&codec::SolutionOut::from(self))
            .map_err(|e| EngineError::malformed(format!("solution json: {e}")))
    }
}

pub(crate) fn check_finite(what: &str, points: &[Point]) -> Result<()> {
    match points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        Some(i) => Err(EngineError::malformed(format!(
            "{what}[{i}] has a non-finite coordinate"
        ))),
        None => Ok(()),
    }
}

pub(crate) fn check_len(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(EngineError::malformed(format!(
            "expected {expected} vertices, got {got}"
        )))
    }
}
