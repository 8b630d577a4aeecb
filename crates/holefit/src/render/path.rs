use std::fmt;

use super::Viewport;
use crate::error::{EngineError, Result};
use crate::model::Edge;
use crate::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Ordered drawing commands; `Display` yields SVG path data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
}

impl Path {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// Append `points` as one contour (move to the first, line to the rest).
    fn contour(&mut self, points: &[Point], close: bool) {
        for (i, &p) in points.iter().enumerate() {
            self.cmds.push(if i == 0 {
                PathCmd::MoveTo(p)
            } else {
                PathCmd::LineTo(p)
            });
        }
        if close && !points.is_empty() {
            self.cmds.push(PathCmd::Close);
        }
    }

    /// Number of `MoveTo` commands, i.e. disconnected pieces.
    pub fn subpath_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, PathCmd::MoveTo(_)))
            .count()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cmds.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match c {
                PathCmd::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCmd::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathCmd::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Hole contour traced in input order, then the viewport rectangle.
///
/// Filled with the even-odd rule this shades the viewport outside the hole.
pub fn build_outline(points: &[Point], viewport: &Viewport) -> Path {
    let mut path = Path::default();
    path.contour(points, true);
    path.contour(&viewport.corners(), true);
    path
}

/// One independent segment per edge, in edge order.
pub fn build_skeleton(vertices: &[Point], edges: &[Edge]) -> Result<Path> {
    let mut path = Path {
        cmds: Vec::with_capacity(edges.len() * 2),
    };
    for &Edge(u, v) in edges {
        EngineError::check_index(u, vertices.len())?;
        EngineError::check_index(v, vertices.len())?;
        path.cmds.push(PathCmd::MoveTo(vertices[u]));
        path.cmds.push(PathCmd::LineTo(vertices[v]));
    }
    Ok(path)
}
