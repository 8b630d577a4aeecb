//! Transform and constraint-validation engine for hole/figure fitting problems.
//!
//! A problem is a hole polygon plus a rigid figure (vertices + edges) and an
//! integer tolerance `epsilon`. Callers move the figure's vertices around with
//! the pure operations in [`transform`], classify every edge against its rest
//! length with [`validate`], and derive drawable geometry with [`render`].
//!
//! Policy
//! - Everything here is a pure function over explicit values: no I/O, no
//!   logging, no shared state. The caller owns the current `Solution`.
//! - Every operation either returns a complete new vertex sequence or an
//!   [`EngineError`]; nothing is mutated on failure.
//! - JSON parsing lives in [`model`] so callers can hand in raw text and get
//!   `MalformedInput` back for structurally broken data.

pub mod cfg;
pub mod error;
pub mod geom2;
pub mod model;
pub mod query;
pub mod render;
pub mod transform;
pub mod validate;

mod codec;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{EngineError, Result};
pub use model::{Bonus, Edge, Figure, Problem, Solution};

/// 2D point (integral coordinates are conventional, not enforced).
pub type Point = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{distance, reflect_across_segment, reflect_on_axis, rotate_point, Axis};
    pub use crate::model::{Bonus, Edge, Figure, Problem, Solution};
    pub use crate::query::{find_coincident_vertices, ProblemSummary};
    pub use crate::render::{build_outline, build_skeleton, compute_viewport, Path, Scene, Viewport};
    pub use crate::transform::{
        apply_all, init_pose, quantize, reflect_vertex_across_segment, reflect_vertex_on_axis,
        rotate, snap_to_hole, translate, QuantizeMode, Transform,
    };
    pub use crate::validate::{classify_edges, EdgeClassification};
    pub use crate::{EngineError, Point, Result};
}
