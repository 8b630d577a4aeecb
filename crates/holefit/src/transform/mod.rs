//! Named operations mapping a vertex sequence to a new vertex sequence.
//!
//! All operations are non-destructive: they borrow the current vertices and
//! return a fresh `Vec`, so a caller can keep the previous value for undo.
//! Index-taking operations validate every index before touching anything.
//!
//! - `ops`: the free functions (translate, rotate, flips, quantize, snap, init pose).
//! - `script`: the `Transform` enum, a serializable name for each operation,
//!   with `apply`/`apply_all` and a compact text form for command lines.

mod ops;
mod script;

pub use ops::{
    init_pose, quantize, reflect_vertex_across_segment, reflect_vertex_on_axis, rotate,
    snap_to_hole, translate, QuantizeMode,
};
pub use script::{apply_all, Transform};
