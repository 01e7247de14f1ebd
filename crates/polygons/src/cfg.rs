//! Numeric defaults for polygons.
//!
//! Policy
//! - Constants are fixed; the only tunable is `Tolerance`, passed explicitly
//!   where approximate comparison is wanted.

/// Smallest edge count of a polygon.
pub const MIN_EDGES: usize = 3;
/// Edge count used by `Polygon::default()` and `PolygonSequence::default()`.
pub const DEFAULT_EDGES: usize = 3;
/// Circumscribed radius used by the `Default` impls.
pub const DEFAULT_RADIUS: f64 = 6.0;

/// Absolute/relative tolerance pair for approximate comparison of derived values.
///
/// `a` and `b` are close iff `|a - b| <= max(rel * max(|a|, |b|), abs)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

impl Tolerance {
    #[inline]
    pub fn new(abs: f64, rel: f64) -> Self {
        Self { abs, rel }
    }

    #[inline]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        diff <= (self.rel * a.abs().max(b.abs())).max(self.abs)
    }
}
