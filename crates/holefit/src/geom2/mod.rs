//! 2D point primitives (distance, rotation, reflections).
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`; angles are given in degrees and are
//!   counter-clockwise positive in the mathematical (y-up) sense.
//! - Exact quarter turns use exact sine/cosine so integral points stay integral.
//! - Degenerate inputs (zero-length mirror segment) yield `None`; callers that
//!   know the vertex indices turn that into an `EngineError`.

mod primitives;

pub use primitives::{
    bounding_box, distance, reflect_across_segment, reflect_on_axis, rotate_point, Axis,
};

#[cfg(test)]
mod tests;
