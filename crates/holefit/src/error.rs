//! Error type shared by every engine operation.

use crate::model::Edge;

/// Local, deterministic failures. None of these are retried; the caller keeps
/// its previous `Solution` and decides what to surface.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("segment {from}->{to} has zero length")]
    DegenerateSegment { from: usize, to: usize },
    #[error("original edge {edge} has zero length")]
    DegenerateOriginalEdge { edge: Edge },
    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },
    #[error("no points to bound")]
    EmptyGeometry,
}

impl EngineError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }

    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::IndexOutOfRange { index, len })
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
