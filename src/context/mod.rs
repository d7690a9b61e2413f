// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The enumeration context: all mutable state of one top-level call.
//!
//! The context bundles the cell field, the growth frontier, the checker's
//! scratch grids, the per-rank counters, and the result registry. One
//! context serves exactly one enumeration call: it is created fresh at call
//! entry, mutated continuously by the recursive search, and dropped (or
//! consumed for its registry) at call exit. Nothing in it is shared, so
//! independent contexts may run on separate threads with no coordination.

use crate::canonical::CanonicalChecker;
use crate::geometry::Rank;
use crate::state::{CellField, GrowthFrontier, ShapeRegistry, Statistics};

#[derive(Debug)]
pub struct EnumerationContext {
    /// The tri-state working area.
    pub field: CellField,
    /// Candidate positions, scoped by depth via index ranges.
    pub frontier: GrowthFrontier,
    /// Scratch grids for the symmetry images.
    pub checker: CanonicalChecker,
    /// Per-rank fixed / one-sided / free counters.
    pub statistics: Statistics,
    /// The accumulated result.
    pub registry: ShapeRegistry,
}

impl EnumerationContext {
    /// Allocate every buffer needed to enumerate up to `target`.
    pub fn new(target: Rank) -> Self {
        let field = CellField::new(target);
        let frontier = GrowthFrontier::with_capacity(field.len());
        Self {
            field,
            frontier,
            checker: CanonicalChecker::new(target),
            statistics: Statistics::new(target),
            registry: ShapeRegistry::new(),
        }
    }

    /// Consume the context, yielding the registry.
    pub fn into_registry(self) -> ShapeRegistry {
        self.registry
    }
}
