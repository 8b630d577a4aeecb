//! Fixed constants shared by the validator and the render helpers.
//!
//! The tolerance arithmetic must match the external scorer bit for bit, so
//! these are plain constants rather than knobs. The viewport margin is the one
//! value callers may want to change; see [`ViewCfg`].

/// Parts-per-million scale applied to the relative stretch.
pub const PPM: f64 = 1_000_000.0;

/// Slack added to `epsilon` before comparing (`stretch_ppm <= epsilon + 1`).
pub const STRETCH_SLACK_PPM: f64 = 1.0;

/// Margin added on every side of the bounding box by `compute_viewport`.
pub const VIEWPORT_MARGIN: f64 = 5.0;

/// Rendering configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewCfg {
    pub margin: f64,
}

impl Default for ViewCfg {
    fn default() -> Self {
        Self {
            margin: VIEWPORT_MARGIN,
        }
    }
}
