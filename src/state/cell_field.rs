// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The cell field: a seed-anchored working area of tri-state cells.
//!
//! The field is a linear buffer of `2*(rank-1)^2 + 1` cells addressed by
//! offset from the seed (see `Position`). A cell's virtual `(column, row)`
//! pair is derived with working-area width `2*rank - 2` and the seed sitting
//! at column `rank - 2` of row 0. Under that addressing, every cell a
//! connected shape of at most `rank` cells can reach while growing
//! row-major-first from the seed is representable, and no cell before the
//! seed is - which is exactly the half-plane rule the enumeration needs.

use crate::geometry::constants::{anchor_column, field_length, field_width};
use crate::geometry::{Position, Rank};

/// Marker for one cell of the working area.
///
/// The original bit-packed encoding (occupied bit over a discovered bit) is
/// modeled as an explicit three-valued state; the legal transitions are the
/// four methods on `CellField`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Unvisited; eligible to become a frontier candidate.
    Free,
    /// Offered as a frontier candidate; not currently part of the shape.
    Discovered,
    /// Currently part of the shape being grown.
    Occupied,
}

/// The working area for one enumeration call.
#[derive(Debug)]
pub struct CellField {
    cells: Vec<CellState>,
    width: usize,
    anchor: usize,
}

impl CellField {
    /// Allocate a field sized for shapes of up to `target` cells.
    pub fn new(target: Rank) -> Self {
        let rank = target.as_usize();
        Self {
            cells: vec![CellState::Free; field_length(rank)],
            width: field_width(rank),
            anchor: anchor_column(rank),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn state(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Virtual `(column, row)` of a position.
    pub fn coords(&self, pos: Position) -> (usize, usize) {
        let k = pos.index() + self.anchor;
        (k % self.width, k / self.width)
    }

    /// Mark a free cell as offered to the frontier.
    pub fn discover(&mut self, pos: Position) {
        debug_assert_eq!(self.state(pos), CellState::Free);
        self.cells[pos.index()] = CellState::Discovered;
    }

    /// Place a frontier candidate into the shape.
    pub fn occupy(&mut self, pos: Position) {
        debug_assert_eq!(self.state(pos), CellState::Discovered);
        self.cells[pos.index()] = CellState::Occupied;
    }

    /// Remove a cell from the shape; it stays excluded from the frontier.
    pub fn release(&mut self, pos: Position) {
        debug_assert_eq!(self.state(pos), CellState::Occupied);
        self.cells[pos.index()] = CellState::Discovered;
    }

    /// Return a cell to the free pool once its frontier entry is rewound.
    pub fn retract(&mut self, pos: Position) {
        debug_assert_eq!(self.state(pos), CellState::Discovered);
        self.cells[pos.index()] = CellState::Free;
    }

    /// The four axis-aligned neighbors of a position that exist in the
    /// working area.
    ///
    /// Column checks stop the linear arithmetic from wrapping a row edge
    /// onto the far side of the adjacent row, and the offset range checks
    /// enforce the half-plane rule (no neighbor before the seed).
    pub fn neighbors(&self, pos: Position) -> [Option<Position>; 4] {
        let i = pos.index();
        let w = self.width;
        let len = self.cells.len();
        let (col, _) = self.coords(pos);
        [
            (col + 1 < w && i + 1 < len).then(|| Position(i + 1)),
            (col > 0 && i >= 1).then(|| Position(i - 1)),
            (i + w < len).then(|| Position(i + w)),
            (i >= w).then(|| Position(i - w)),
        ]
    }
}
