//! Lazy family of regular polygons sharing one circumscribed radius.
//!
//! - `PolygonSequence::get(i)` is the pure formula `Polygon(i + 3, R)`.
//! - `PolygonSequence::iter()` hands out an independent `PolygonIter` cursor;
//!   consuming one never affects `get` or another iterator. Restart by calling
//!   `iter()` again.
//!
//! No polygons are stored; each access builds a fresh instance.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use crate::cfg::{DEFAULT_EDGES, DEFAULT_RADIUS, MIN_EDGES};
use crate::error::{check_edges, PolygonError, Result};
use crate::polygon::Polygon;

/// Polygons with edge counts `3..=max_edge_count`, all with radius `shared_radius`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonSequence {
    max_edge_count: usize,
    shared_radius: f64,
}

impl PolygonSequence {
    /// Fails for `max_edge_count < 3`. The radius is not checked.
    pub fn new(max_edge_count: usize, shared_radius: f64) -> Result<Self> {
        check_edges(max_edge_count)?;
        Ok(Self {
            max_edge_count,
            shared_radius,
        })
    }

    #[inline]
    pub fn max_edge_count(&self) -> usize {
        self.max_edge_count
    }

    #[inline]
    pub fn shared_radius(&self) -> f64 {
        self.shared_radius
    }

    /// Number of polygons: `max_edge_count - 2`.
    #[inline]
    pub fn len(&self) -> usize {
        self.max_edge_count - (MIN_EDGES - 1)
    }

    /// Always false; a valid sequence holds at least the triangle.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Polygon with `index + 3` edges; `IndexOutOfRange` past `len() - 1`.
    pub fn get(&self, index: usize) -> Result<Polygon> {
        let len = self.len();
        if index >= len {
            tracing::debug!(index, len, "polygon sequence index out of range");
            return Err(PolygonError::IndexOutOfRange { index, len });
        }
        Ok(Polygon::from_parts(index + MIN_EDGES, self.shared_radius))
    }

    /// Fresh cursor over the whole sequence in ascending edge count.
    pub fn iter(&self) -> PolygonIter {
        PolygonIter {
            edges: MIN_EDGES..=self.max_edge_count,
            radius: self.shared_radius,
        }
    }
}

impl Default for PolygonSequence {
    fn default() -> Self {
        Self {
            max_edge_count: DEFAULT_EDGES,
            shared_radius: DEFAULT_RADIUS,
        }
    }
}

impl fmt::Display for PolygonSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PolygonSequence(iterable: edges={}, fixed: rad={})",
            self.max_edge_count, self.shared_radius
        )
    }
}

impl IntoIterator for PolygonSequence {
    type Item = Polygon;
    type IntoIter = PolygonIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a PolygonSequence {
    type Item = Polygon;
    type IntoIter = PolygonIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward cursor over a `PolygonSequence`; yields the edge counts left in `edges`.
#[derive(Clone, Debug)]
pub struct PolygonIter {
    edges: RangeInclusive<usize>,
    radius: f64,
}

impl Iterator for PolygonIter {
    type Item = Polygon;

    fn next(&mut self) -> Option<Polygon> {
        match self.edges.next() {
            Some(n) => Some(Polygon::from_parts(n, self.radius)),
            None => {
                tracing::trace!("polygon sequence exhausted");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Polygon> {
        let radius = self.radius;
        self.edges.nth(n).map(|e| Polygon::from_parts(e, radius))
    }
}

impl DoubleEndedIterator for PolygonIter {
    fn next_back(&mut self) -> Option<Polygon> {
        let radius = self.radius;
        self.edges.next_back().map(|e| Polygon::from_parts(e, radius))
    }
}

// `3..=max` never holds more than `usize::MAX - 2` items, so the range's
// size hint is always exact.
impl ExactSizeIterator for PolygonIter {}

impl FusedIterator for PolygonIter {}
