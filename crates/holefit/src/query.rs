//! Read-only queries over problems and candidate poses.

use serde::Serialize;

use crate::geom2::bounding_box;
use crate::model::Problem;
use crate::Point;

/// Vertices sitting exactly on a hole point, as `(vertex index, point)`.
///
/// Ordered by vertex index, then hole order; a vertex matching several equal
/// hole points is reported once per match.
pub fn find_coincident_vertices(vertices: &[Point], hole: &[Point]) -> Vec<(usize, Point)> {
    let mut out = Vec::new();
    for (i, v) in vertices.iter().enumerate() {
        for h in hole {
            if v == h {
                out.push((i, *h));
            }
        }
    }
    out
}

/// One-line overview of a problem's size and extent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProblemSummary {
    pub hole_points: usize,
    pub figure_vertices: usize,
    pub figure_edges: usize,
    pub epsilon: u64,
    /// Hole bounding box; `None` for an empty hole.
    pub hole_min: Option<[f64; 2]>,
    pub hole_max: Option<[f64; 2]>,
    /// `"<kind> (<problem>)"` per bonus.
    pub bonuses: Vec<String>,
}

impl ProblemSummary {
    pub fn of(problem: &Problem) -> Self {
        let bounds = bounding_box(&problem.hole);
        Self {
            hole_points: problem.hole.len(),
            figure_vertices: problem.figure.vertices.len(),
            figure_edges: problem.figure.edges.len(),
            epsilon: problem.epsilon,
            hole_min: bounds.map(|(lo, _)| [lo.x, lo.y]),
            hole_max: bounds.map(|(_, hi)| [hi.x, hi.y]),
            bonuses: problem
                .bonuses
                .iter()
                .map(|b| format!("{} ({})", b.kind, b.problem))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn coincident_vertices_use_exact_equality() {
        let hole = [vector![0.0, 0.0], vector![5.0, 5.0], vector![9.0, 0.0]];
        let verts = [vector![5.0, 5.0], vector![1.0, 1.0], vector![0.0, 0.0], vector![9.0, 1e-9]];
        let hits = find_coincident_vertices(&verts, &hole);
        assert_eq!(hits, vec![(0, vector![5.0, 5.0]), (2, vector![0.0, 0.0])]);
    }

    #[test]
    fn summary_reports_sizes_and_bounds() {
        let p = Problem::from_json(
            r#"{"hole": [[2,3],[12,3],[7,20]],
                "figure": {"vertices": [[0,0],[1,0],[0,1]], "edges": [[0,1],[0,2]]},
                "epsilon": 1250,
                "bonuses": [{"bonus": "BREAK_A_LEG", "problem": 7, "position": [7, 10]}]}"#,
        )
        .unwrap();
        let s = ProblemSummary::of(&p);
        assert_eq!(s.hole_points, 3);
        assert_eq!(s.figure_vertices, 3);
        assert_eq!(s.figure_edges, 2);
        assert_eq!(s.epsilon, 1250);
        assert_eq!(s.hole_min, Some([2.0, 3.0]));
        assert_eq!(s.hole_max, Some([12.0, 20.0]));
        assert_eq!(s.bonuses, vec!["BREAK_A_LEG (7)".to_string()]);
    }
}
