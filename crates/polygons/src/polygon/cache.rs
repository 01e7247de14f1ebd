//! Per-instance memo slots for the derived quantities of a `Polygon`.
//!
//! Invariants:
//! - A slot is `Some` iff its value was computed from the current primary
//!   fields (no mutation since).
//! - `reset()` empties every slot at once; the recompute counter survives.

use std::cell::Cell;

/// Derived quantities of a polygon, one cache slot each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Derived {
    VertexCount,
    InteriorAngle,
    EdgeLength,
    Apothem,
    Area,
    Perimeter,
}

impl Derived {
    pub const ALL: [Derived; 6] = [
        Derived::VertexCount,
        Derived::InteriorAngle,
        Derived::EdgeLength,
        Derived::Apothem,
        Derived::Area,
        Derived::Perimeter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Derived::VertexCount => "vertex_count",
            Derived::InteriorAngle => "interior_angle_deg",
            Derived::EdgeLength => "edge_length",
            Derived::Apothem => "apothem",
            Derived::Area => "area",
            Derived::Perimeter => "perimeter",
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Cache {
    pub(crate) vertex_count: Cell<Option<usize>>,
    pub(crate) interior_angle_deg: Cell<Option<f64>>,
    pub(crate) edge_length: Cell<Option<f64>>,
    pub(crate) apothem: Cell<Option<f64>>,
    pub(crate) area: Cell<Option<f64>>,
    pub(crate) perimeter: Cell<Option<f64>>,
    recomputes: Cell<u64>,
}

impl Cache {
    pub(crate) fn reset(&mut self) {
        let recomputes = self.recomputes.get();
        *self = Cache::default();
        self.recomputes.set(recomputes);
    }

    pub(crate) fn is_cached(&self, field: Derived) -> bool {
        match field {
            Derived::VertexCount => self.vertex_count.get().is_some(),
            Derived::InteriorAngle => self.interior_angle_deg.get().is_some(),
            Derived::EdgeLength => self.edge_length.get().is_some(),
            Derived::Apothem => self.apothem.get().is_some(),
            Derived::Area => self.area.get().is_some(),
            Derived::Perimeter => self.perimeter.get().is_some(),
        }
    }

    #[inline]
    pub(crate) fn recomputes(&self) -> u64 {
        self.recomputes.get()
    }

    #[inline]
    pub(crate) fn bump(&self) {
        self.recomputes.set(self.recomputes.get() + 1);
    }
}
