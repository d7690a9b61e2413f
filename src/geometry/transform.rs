// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The dihedral group of the square (order 8).
//!
//! Canonicality of a shape is decided against its 8 symmetry images: the
//! identity, the three nontrivial rotations, and the four mirror
//! compositions. Each transform maps a cell of a `w x h` bounding box onto
//! a cell of the transformed box, so images produced through these maps are
//! already translation-normalized - no per-image offset correction is
//! needed before comparing them.

/// One element of the dihedral group of the square.
///
/// Rotations are quarter turns counted clockwise; the mirrored variants
/// compose the rotation with a horizontal flip of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryTransform {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    Mirror,
    MirrorRotate90,
    MirrorRotate180,
    MirrorRotate270,
}

/// The full group, identity first, rotations before reflections.
pub const DIHEDRAL_SQUARE: [SymmetryTransform; 8] = [
    SymmetryTransform::Identity,
    SymmetryTransform::Rotate90,
    SymmetryTransform::Rotate180,
    SymmetryTransform::Rotate270,
    SymmetryTransform::Mirror,
    SymmetryTransform::MirrorRotate90,
    SymmetryTransform::MirrorRotate180,
    SymmetryTransform::MirrorRotate270,
];

impl SymmetryTransform {
    /// Whether this transform is orientation-preserving (a pure rotation).
    ///
    /// The rotation-only subgroup decides one-sided canonicality; the full
    /// group decides free canonicality.
    pub fn is_rotation(self) -> bool {
        matches!(
            self,
            SymmetryTransform::Identity
                | SymmetryTransform::Rotate90
                | SymmetryTransform::Rotate180
                | SymmetryTransform::Rotate270
        )
    }

    /// Whether the transform swaps the width and height of a bounding box.
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            SymmetryTransform::Rotate90
                | SymmetryTransform::Rotate270
                | SymmetryTransform::MirrorRotate90
                | SymmetryTransform::MirrorRotate270
        )
    }

    /// Map a cell `(col, row)` of a `w x h` box onto the transformed box.
    ///
    /// The result lies in a `h x w` box when `swaps_dimensions()` holds and
    /// in a `w x h` box otherwise.
    pub fn apply(self, col: usize, row: usize, w: usize, h: usize) -> (usize, usize) {
        debug_assert!(col < w && row < h);
        match self {
            SymmetryTransform::Identity => (col, row),
            SymmetryTransform::Rotate90 => (h - 1 - row, col),
            SymmetryTransform::Rotate180 => (w - 1 - col, h - 1 - row),
            SymmetryTransform::Rotate270 => (row, w - 1 - col),
            SymmetryTransform::Mirror => (w - 1 - col, row),
            SymmetryTransform::MirrorRotate90 => (row, col),
            SymmetryTransform::MirrorRotate180 => (col, h - 1 - row),
            SymmetryTransform::MirrorRotate270 => (h - 1 - row, w - 1 - col),
        }
    }
}
