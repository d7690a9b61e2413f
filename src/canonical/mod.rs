// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical-form checking under the symmetries of the square.
//!
//! Every fixed placement the search visits is normalized by translating its
//! bounding box to the origin of a `rank x rank` grid, and compared against
//! its images under the 7 nontrivial elements of the dihedral group. Grids
//! are ordered row-major with an occupied cell outranking an empty one, and
//! the placement is the canonical representative of its free equivalence
//! class exactly when the identity grid compares greater-than-or-equal to
//! every image.
//!
//! All fixed placements of one free class produce the same set of 8
//! normalized grids - bounding-box anchoring cancels the translation a
//! rotation or reflection introduces - so exactly one placement per class
//! compares maximal, and the enumeration visits each fixed placement once.
//! Accepting only the maximal identity therefore keeps one shape per class.
//!
//! The rotation-only subgroup is checked separately: a placement maximal
//! among its 4 rotation images represents a one-sided polyomino, which is
//! what distinguishes chiral shapes (two one-sided forms, one free form)
//! from shapes with a mirror symmetry.

use crate::geometry::{Position, Rank, SymmetryTransform, DIHEDRAL_SQUARE};
use crate::state::CellField;
use std::cmp::Ordering;

/// How a placement compares to its symmetry images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryClass {
    /// Maximal among all 8 images: the accepted free representative.
    Canonical,
    /// Maximal among the 4 rotations but beaten by a reflection: the
    /// mirror twin of a chiral canonical shape.
    RotationCanonical,
    /// Beaten by a rotation image.
    NonCanonical,
}

/// Scratch state for canonicality checks.
///
/// The two grids are reused across every check of one enumeration call and
/// are never shared between calls.
#[derive(Debug)]
pub struct CanonicalChecker {
    side: usize,
    identity: Vec<bool>,
    image: Vec<bool>,
}

impl CanonicalChecker {
    pub fn new(target: Rank) -> Self {
        let side = target.as_usize();
        Self {
            side,
            identity: vec![false; side * side],
            image: vec![false; side * side],
        }
    }

    /// Classify the current shape.
    ///
    /// `shape` lists the occupied positions of `field`; it must be
    /// non-empty and its bounding box must fit the `rank x rank` grid,
    /// which holds for every shape of at most `rank` cells.
    pub fn classify(&mut self, field: &CellField, shape: &[Position]) -> SymmetryClass {
        debug_assert!(!shape.is_empty());

        let (min_col, min_row, w, h) = self.bounding_box(field, shape);
        debug_assert!(w <= self.side && h <= self.side);

        self.identity.fill(false);
        for &pos in shape {
            let (col, row) = field.coords(pos);
            self.identity[(row - min_row) * self.side + (col - min_col)] = true;
        }

        let mut beaten_by_reflection = false;
        for &transform in &DIHEDRAL_SQUARE[1..] {
            self.image.fill(false);
            for &pos in shape {
                let (col, row) = field.coords(pos);
                let (ic, ir) = transform.apply(col - min_col, row - min_row, w, h);
                self.image[ir * self.side + ic] = true;
            }
            if self.identity.cmp(&self.image) == Ordering::Less {
                if transform.is_rotation() {
                    // A rotation image is larger: not even one-sided canonical.
                    return SymmetryClass::NonCanonical;
                }
                beaten_by_reflection = true;
            }
        }

        if beaten_by_reflection {
            SymmetryClass::RotationCanonical
        } else {
            SymmetryClass::Canonical
        }
    }

    /// Bounding box of the shape in virtual coordinates:
    /// `(min_col, min_row, width, height)`.
    fn bounding_box(
        &self,
        field: &CellField,
        shape: &[Position],
    ) -> (usize, usize, usize, usize) {
        let mut min_col = usize::MAX;
        let mut max_col = 0;
        let mut min_row = usize::MAX;
        let mut max_row = 0;
        for &pos in shape {
            let (col, row) = field.coords(pos);
            min_col = min_col.min(col);
            max_col = max_col.max(col);
            min_row = min_row.min(row);
            max_row = max_row.max(row);
        }
        (min_col, min_row, max_col - min_col + 1, max_row - min_row + 1)
    }
}
