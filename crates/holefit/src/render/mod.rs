//! Derived render geometry: viewport box, hole outline, edge skeletons.
//!
//! Paths are typed command lists that print as SVG path data. The hole
//! outline is a two-contour even-odd shape (hole polygon, then the viewport
//! rectangle) so filling it shades everything outside the hole.

mod path;
mod scene;

pub use path::{build_outline, build_skeleton, Path, PathCmd};
pub use scene::Scene;

use std::fmt;

use crate::cfg::ViewCfg;
use crate::error::{EngineError, Result};
use crate::geom2::bounding_box;
use crate::Point;

/// Axis-aligned box `(xmin, ymin)`–`(xmax, ymax)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Viewport {
    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }
    /// Corners in contour order: (min,min), (max,min), (max,max), (min,max).
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.xmin, self.ymin),
            Point::new(self.xmax, self.ymin),
            Point::new(self.xmax, self.ymax),
            Point::new(self.xmin, self.ymax),
        ]
    }
}

/// SVG `viewBox` form: `x y width height`.
impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.xmin, self.ymin, self.width(), self.height())
    }
}

/// Bounding box of hole + figure points, grown by the default 5-unit margin.
pub fn compute_viewport(hole: &[Point], figure_vertices: &[Point]) -> Result<Viewport> {
    compute_viewport_with(ViewCfg::default(), hole, figure_vertices)
}

/// [`compute_viewport`] with an explicit margin.
pub fn compute_viewport_with(
    cfg: ViewCfg,
    hole: &[Point],
    figure_vertices: &[Point],
) -> Result<Viewport> {
    let (lo, hi) =
        bounding_box(hole.iter().chain(figure_vertices)).ok_or(EngineError::EmptyGeometry)?;
    Ok(Viewport {
        xmin: lo.x - cfg.margin,
        ymin: lo.y - cfg.margin,
        xmax: hi.x + cfg.margin,
        ymax: hi.y + cfg.margin,
    })
}
