use std::fmt;

use super::{build_outline, build_skeleton, compute_viewport, Path, Viewport};
use crate::error::Result;
use crate::model::{Problem, Solution};
use crate::validate::{classify_edges, EdgeClassification};

/// Everything needed to draw a problem and (optionally) a candidate pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub hole: Path,
    /// Rest pose of the figure.
    pub figure: Path,
    /// Candidate edges within tolerance.
    pub valid: Path,
    /// Candidate edges out of tolerance.
    pub invalid: Path,
    pub classification: Option<EdgeClassification>,
    labels: Labels,
}

#[derive(Clone, Debug, Default, PartialEq)]
struct Labels {
    hole: Vec<(f64, f64)>,
    solution: Vec<(f64, f64)>,
}

impl Scene {
    pub fn build(problem: &Problem, solution: Option<&Solution>) -> Result<Self> {
        let viewport = compute_viewport(&problem.hole, &problem.figure.vertices)?;
        let hole = build_outline(&problem.hole, &viewport);
        let figure = build_skeleton(&problem.figure.vertices, &problem.figure.edges)?;
        let mut labels = Labels {
            hole: problem.hole.iter().map(|p| (p.x, p.y)).collect(),
            solution: Vec::new(),
        };
        let (valid, invalid, classification) = match solution {
            Some(s) => {
                let c = classify_edges(problem, &s.vertices)?;
                labels.solution = s.vertices.iter().map(|p| (p.x, p.y)).collect();
                (
                    build_skeleton(&s.vertices, &c.valid)?,
                    build_skeleton(&s.vertices, &c.invalid)?,
                    Some(c),
                )
            }
            None => (Path::default(), Path::default(), None),
        };
        Ok(Self {
            viewport,
            hole,
            figure,
            valid,
            invalid,
            classification,
            labels,
        })
    }

    /// Standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="600" viewBox="{}">"#,
            self.viewport
        )?;
        writeln!(
            f,
            r##"<path id="hole" fill="#666" fill-rule="evenodd" stroke="none" d="{}"/>"##,
            self.hole
        )?;
        for (id, stroke, path) in [
            ("figure", "#fdd", &self.figure),
            ("output-ok", "#f00", &self.valid),
            ("output-ng", "#00f", &self.invalid),
        ] {
            if path.is_empty() {
                continue;
            }
            writeln!(
                f,
                r#"<path id="{id}" fill="none" stroke="{stroke}" stroke-linecap="round" d="{path}"/>"#
            )?;
        }
        for (i, (x, y)) in self.labels.hole.iter().chain(&self.labels.solution).enumerate() {
            let n = if i < self.labels.hole.len() {
                i
            } else {
                i - self.labels.hole.len()
            };
            writeln!(f, r#"<text x="{x}" y="{y}" font-size="3">{n}</text>"#)?;
        }
        f.write_str("</svg>\n")
    }
}
