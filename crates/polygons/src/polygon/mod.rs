//! Regular convex polygon with lazily cached derived quantities.
//!
//! Model
//! - Primary fields: edge count `n >= 3` and circumscribed radius `R`.
//! - Derived: vertex count, interior angle, edge length, apothem, area,
//!   perimeter. Each is computed on first read and reused until a setter runs.
//! - `area` and `perimeter` read `edge_length`/`apothem` through their caches.
//!
//! Comparison
//! - `==`: same vertex count and same radius.
//! - `<`/`>`: by vertex count only. Same count with different radii is
//!   unordered (`partial_cmp == None`), keeping `PartialOrd` consistent with `==`.
//! - Only `Polygon` operands are accepted; comparing against anything else
//!   does not compile.
//!
//! The cache uses `Cell`, so a `Polygon` is `Send` but not `Sync`.

mod cache;

use std::cell::Cell;
use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};
use std::fmt;

use nalgebra::Vector2;

use crate::cfg::{Tolerance, DEFAULT_EDGES, DEFAULT_RADIUS};
use crate::error::{check_edges, Result};

pub use cache::Derived;
use cache::Cache;

/// Regular convex polygon given by edge count and circumscribed radius.
#[derive(Clone, Debug)]
pub struct Polygon {
    edge_count: usize,
    circum_radius: f64,
    cache: Cache,
}

/// Snapshot of every derived quantity of a polygon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolygonSummary {
    pub edges: usize,
    pub radius: f64,
    pub interior_angle_deg: f64,
    pub edge_length: f64,
    pub apothem: f64,
    pub area: f64,
    pub perimeter: f64,
}

impl Polygon {
    /// Build a polygon; fails for fewer than 3 edges. The radius is not checked.
    pub fn new(edge_count: usize, circum_radius: f64) -> Result<Self> {
        check_edges(edge_count)?;
        Ok(Self::from_parts(edge_count, circum_radius))
    }

    /// Caller guarantees `edge_count >= MIN_EDGES`.
    #[inline]
    pub(crate) fn from_parts(edge_count: usize, circum_radius: f64) -> Self {
        Self {
            edge_count,
            circum_radius,
            cache: Cache::default(),
        }
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn circum_radius(&self) -> f64 {
        self.circum_radius
    }

    /// Replace the edge count and drop every cached value.
    ///
    /// Applies the constructor check: for `n < 3` the polygon is left untouched
    /// and `TooFewEdges` is returned.
    pub fn set_edge_count(&mut self, n: usize) -> Result<()> {
        check_edges(n)?;
        tracing::debug!(from = self.edge_count, to = n, "polygon edge count changed");
        self.edge_count = n;
        self.cache.reset();
        Ok(())
    }

    /// Replace the circumscribed radius and drop every cached value.
    pub fn set_circum_radius(&mut self, r: f64) {
        tracing::debug!(from = self.circum_radius, to = r, "polygon radius changed");
        self.circum_radius = r;
        self.cache.reset();
    }

    pub fn vertex_count(&self) -> usize {
        self.memo(Derived::VertexCount, &self.cache.vertex_count, || {
            self.edge_count
        })
    }

    /// Interior angle in degrees: `(n - 2) * 180 / n`.
    pub fn interior_angle_deg(&self) -> f64 {
        self.memo(Derived::InteriorAngle, &self.cache.interior_angle_deg, || {
            let n = self.edge_count as f64;
            (n - 2.0) * 180.0 / n
        })
    }

    /// `2 R sin(π / n)`.
    pub fn edge_length(&self) -> f64 {
        self.memo(Derived::EdgeLength, &self.cache.edge_length, || {
            2.0 * self.circum_radius * (PI / self.edge_count as f64).sin()
        })
    }

    /// `R cos(π / n)`.
    pub fn apothem(&self) -> f64 {
        self.memo(Derived::Apothem, &self.cache.apothem, || {
            self.circum_radius * (PI / self.edge_count as f64).cos()
        })
    }

    pub fn area(&self) -> f64 {
        self.memo(Derived::Area, &self.cache.area, || {
            self.edge_count as f64 * self.edge_length() * self.apothem() / 2.0
        })
    }

    pub fn perimeter(&self) -> f64 {
        self.memo(Derived::Perimeter, &self.cache.perimeter, || {
            self.edge_count as f64 * self.edge_length()
        })
    }

    /// Whether `field` currently holds a value computed from the current inputs.
    #[inline]
    pub fn is_cached(&self, field: Derived) -> bool {
        self.cache.is_cached(field)
    }

    /// Total number of derived-value computations this instance has performed.
    ///
    /// Only the derived accessors count; `==`, `<` and `>` leave it unchanged.
    #[inline]
    pub fn recompute_count(&self) -> u64 {
        self.cache.recomputes()
    }

    /// Vertex positions, counterclockwise, centred at the origin with the first
    /// vertex on the positive x-axis. Not cached.
    pub fn vertices(&self) -> Vec<Vector2<f64>> {
        let n = self.edge_count;
        let r = self.circum_radius;
        (0..n)
            .map(|k| {
                let th = TAU * (k as f64) / (n as f64);
                Vector2::new(r * th.cos(), r * th.sin())
            })
            .collect()
    }

    /// Same edge count, and radius plus every derived value within `tol`.
    pub fn approx_eq(&self, other: &Polygon, tol: Tolerance) -> bool {
        self.vertex_count() == other.vertex_count()
            && tol.is_close(self.circum_radius, other.circum_radius)
            && tol.is_close(self.interior_angle_deg(), other.interior_angle_deg())
            && tol.is_close(self.edge_length(), other.edge_length())
            && tol.is_close(self.apothem(), other.apothem())
            && tol.is_close(self.area(), other.area())
            && tol.is_close(self.perimeter(), other.perimeter())
    }

    pub fn summary(&self) -> PolygonSummary {
        PolygonSummary {
            edges: self.edge_count,
            radius: self.circum_radius,
            interior_angle_deg: self.interior_angle_deg(),
            edge_length: self.edge_length(),
            apothem: self.apothem(),
            area: self.area(),
            perimeter: self.perimeter(),
        }
    }

    fn memo<T: Copy>(
        &self,
        field: Derived,
        slot: &Cell<Option<T>>,
        compute: impl FnOnce() -> T,
    ) -> T {
        if let Some(v) = slot.get() {
            return v;
        }
        tracing::trace!(
            field = field.name(),
            edges = self.edge_count,
            radius = self.circum_radius,
            "recomputing derived value"
        );
        let v = compute();
        self.cache.bump();
        slot.set(Some(v));
        v
    }
}

impl Default for Polygon {
    fn default() -> Self {
        Self::from_parts(DEFAULT_EDGES, DEFAULT_RADIUS)
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon(edges={}, rad={})", self.edge_count, self.circum_radius)
    }
}

// Comparisons read `edge_count` (== vertex count) so they never touch the cache.
impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.edge_count == other.edge_count && self.circum_radius == other.circum_radius
    }
}

impl PartialOrd for Polygon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.edge_count.cmp(&other.edge_count) {
            Ordering::Equal => {
                (self.circum_radius == other.circum_radius).then_some(Ordering::Equal)
            }
            ord => Some(ord),
        }
    }
}
