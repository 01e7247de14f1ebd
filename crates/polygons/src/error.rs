//! Errors raised by polygon construction, mutation and indexed access.

use thiserror::Error;

use crate::cfg::MIN_EDGES;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolygonError {
    /// Edge count below the minimum, at construction or through a setter.
    #[error("polygon needs at least 3 edges, got {got}")]
    TooFewEdges { got: usize },

    /// Indexed access outside `[0, len)` of a `PolygonSequence`.
    #[error("index {index} out of range for polygon sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = PolygonError> = std::result::Result<T, E>;

/// Shared edge-count check for constructors and setters.
#[inline]
pub(crate) fn check_edges(n: usize) -> Result<()> {
    if n < MIN_EDGES {
        return Err(PolygonError::TooFewEdges { got: n });
    }
    Ok(())
}
