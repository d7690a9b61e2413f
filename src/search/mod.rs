// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The recursive backtracking driver.
//!
//! The enumerator grows shapes from the seed one cell at a time, following
//! Redelmeier's untried-set discipline:
//!
//! - The frontier sub-range `[start, end)` holds the candidates available
//!   at the current depth. Candidates are tried in increasing index order.
//! - Placing a candidate appends each of its still-Free neighbors to the
//!   frontier as Discovered; the recursion at the next depth sees the range
//!   `[i+1, frontier.len())` - everything after the candidate, plus the
//!   new cells.
//! - Backtracking past a placement restores the candidate to Discovered
//!   (never to Free: a tried candidate must not be offered again within its
//!   branch, or shapes would be reached through several growth orders) and
//!   rewinds the frontier, returning exactly the cells that placement
//!   discovered to Free so later sibling branches can discover them afresh.
//!
//! Under this discipline each fixed polyomino whose row-major-first cell is
//! the seed is visited exactly once, at the depth equal to its rank, and
//! the canonicality check keeps exactly one placement per free class.

pub mod errors;

pub use errors::EnumerationError;

use crate::canonical::SymmetryClass;
use crate::context::EnumerationContext;
use crate::geometry::{Position, Rank};
use crate::render::render;
use crate::state::{Counter, ShapeRegistry};

/// The recursive search driver for one enumeration call.
///
/// Owns the placement stack (the occupied positions in growth order); all
/// other mutable state lives in the [`EnumerationContext`] passed through
/// the recursion.
#[derive(Debug)]
pub struct ShapeEnumerator {
    target: Rank,
    shape: Vec<Position>,
}

impl ShapeEnumerator {
    pub fn new(target: Rank) -> Self {
        Self {
            target,
            shape: Vec::with_capacity(target.as_usize()),
        }
    }

    /// Run the full search, populating the context's statistics and
    /// registry.
    pub fn run(mut self, ctx: &mut EnumerationContext) {
        debug_assert!(ctx.frontier.is_empty());
        ctx.field.discover(Position::SEED);
        ctx.frontier.push(Position::SEED);
        self.grow(ctx, 0, 0, 1);
    }

    /// Extend the current `depth`-cell shape with candidates from the
    /// frontier range `[start, end)`.
    ///
    /// The frontier length is identical before and after this call.
    fn grow(&mut self, ctx: &mut EnumerationContext, depth: usize, start: usize, end: usize) {
        if depth > 0 {
            self.check_and_record(ctx, depth);
        }
        if depth == self.target.as_usize() {
            return;
        }

        for i in start..end {
            let candidate = ctx.frontier.get(i);
            ctx.field.occupy(candidate);
            self.shape.push(candidate);

            let appended_from = ctx.frontier.len();
            for neighbor in ctx.field.neighbors(candidate).into_iter().flatten() {
                if ctx.field.state(neighbor) == crate::state::CellState::Free {
                    ctx.field.discover(neighbor);
                    ctx.frontier.push(neighbor);
                }
            }

            let extended_end = ctx.frontier.len();
            self.grow(ctx, depth + 1, i + 1, extended_end);

            ctx.field.release(candidate);
            self.shape.pop();
            while ctx.frontier.len() > appended_from {
                let discovered = ctx.frontier.pop();
                ctx.field.retract(discovered);
            }
        }

        // Every candidate in [start, end) was released on backtracking; the
        // range holds no occupied cells when the loop finishes.
        #[cfg(debug_assertions)]
        for i in start..end {
            debug_assert_ne!(
                ctx.field.state(ctx.frontier.get(i)),
                crate::state::CellState::Occupied
            );
        }
    }

    /// Classify the current shape, update the per-rank counters, and record
    /// the rendering of an accepted canonical representative.
    fn check_and_record(&mut self, ctx: &mut EnumerationContext, depth: usize) {
        ctx.statistics.increment(Counter::FixedShapes, depth);
        match ctx.checker.classify(&ctx.field, &self.shape) {
            SymmetryClass::Canonical => {
                ctx.statistics.increment(Counter::OneSidedShapes, depth);
                ctx.statistics.increment(Counter::FreeShapes, depth);
                let text = render(&ctx.field, &self.shape);
                ctx.registry.record(depth as u8, text);
            }
            SymmetryClass::RotationCanonical => {
                ctx.statistics.increment(Counter::OneSidedShapes, depth);
            }
            SymmetryClass::NonCanonical => {}
        }
    }
}

/// Enumerate all free polyominoes of every rank from 1 to `target_rank`.
///
/// Returns one canonical text rendering per distinct free polyomino, keyed
/// by rank. Fails fast, with no partial result, when `target_rank` is
/// outside `1..=24`.
///
/// # Example
///
/// ```
/// use polyomino_search::build_free_polyominoes;
///
/// let registry = build_free_polyominoes(3).unwrap();
/// assert_eq!(registry.shapes(3).len(), 2); // straight and bent trominoes
///
/// assert!(build_free_polyominoes(0).is_err());
/// assert!(build_free_polyominoes(25).is_err());
/// ```
pub fn build_free_polyominoes(target_rank: usize) -> Result<ShapeRegistry, EnumerationError> {
    let target = Rank::try_new(target_rank)
        .ok_or(EnumerationError::RankOutOfRange {
            requested: target_rank,
        })?;
    let mut ctx = EnumerationContext::new(target);
    ShapeEnumerator::new(target).run(&mut ctx);
    Ok(ctx.into_registry())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monomino() {
        let registry = build_free_polyominoes(1).unwrap();
        assert_eq!(registry.shapes(1), &["#".to_string()]);
    }

    #[test]
    fn test_domino_is_unique() {
        let registry = build_free_polyominoes(2).unwrap();
        assert_eq!(registry.shapes(2), &["##".to_string()]);
    }

    #[test]
    fn test_out_of_range_ranks_fail() {
        assert_eq!(
            build_free_polyominoes(0),
            Err(EnumerationError::RankOutOfRange { requested: 0 })
        );
        assert_eq!(
            build_free_polyominoes(25),
            Err(EnumerationError::RankOutOfRange { requested: 25 })
        );
    }

    #[test]
    fn test_every_rank_is_present() {
        let registry = build_free_polyominoes(5).unwrap();
        let ranks: Vec<u8> = registry.ranks().collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_frontier_is_restored_after_run() {
        let target = Rank::new(4);
        let mut ctx = EnumerationContext::new(target);
        ShapeEnumerator::new(target).run(&mut ctx);
        // Only the seed entry survives the search.
        assert_eq!(ctx.frontier.len(), 1);
    }
}
