//! Regular convex polygons with lazily cached derived quantities.
//!
//! Overview
//! - `Polygon`: edge count + circumscribed radius; interior angle, edge length,
//!   apothem, area and perimeter are computed on first read and cached until
//!   the next mutation.
//! - `PolygonSequence`: the family of polygons with 3..=max edges sharing one
//!   radius; indexable by a pure formula and iterable through independent
//!   cursors.
//!
//! Cache recomputations and invalidations are reported as `tracing` events
//! (TRACE and DEBUG respectively); install a subscriber to see them.

pub mod cfg;
pub mod error;
pub mod polygon;
pub mod sequence;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::Tolerance;
pub use error::{PolygonError, Result};
pub use nalgebra::Vector2 as Vec2;
pub use polygon::{Derived, Polygon, PolygonSummary};
pub use sequence::{PolygonIter, PolygonSequence};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{Tolerance, DEFAULT_EDGES, DEFAULT_RADIUS, MIN_EDGES};
    pub use crate::error::{PolygonError, Result};
    pub use crate::polygon::{Derived, Polygon, PolygonSummary};
    pub use crate::sequence::{PolygonIter, PolygonSequence};
    pub use nalgebra::Vector2 as Vec2;
}
