// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Buffer-sizing constants for the polyomino search.
//!
//! All working-buffer sizes derive from the target rank. The formulas come
//! from anchoring every shape at the seed cell: a connected shape of at most
//! `rank` cells whose row-major-first cell is the seed can only occupy cells
//! whose linear offset from the seed lies in `[0, 2*(rank-1)^2]`.

/// Maximum supported rank (cells per polyomino).
///
/// Bounded because the working area grows as rank squared and the
/// enumeration itself is exponential; 24 keeps every buffer comfortably
/// small while exceeding any rank the search could finish in practice.
pub const MAX_RANK: usize = 24;

/// Width of the virtual working area for a given target rank.
///
/// A shape anchored at the seed can extend `rank - 1` columns to the right
/// of it and, on rows below the first, `rank - 2` columns to the left,
/// giving `2*rank - 2` distinct columns. Rank 1 degenerates to width 0 and
/// is clamped to a single column so coordinate derivation stays total.
pub const fn field_width(rank: usize) -> usize {
    if rank < 2 {
        1
    } else {
        2 * rank - 2
    }
}

/// Column of the seed cell within the virtual working area.
///
/// Cells on the seed row to the left of the seed would have negative
/// offsets, so placing the seed at column `rank - 2` makes exactly the
/// half-plane of cells at-or-after the seed representable.
pub const fn anchor_column(rank: usize) -> usize {
    if rank < 2 {
        0
    } else {
        rank - 2
    }
}

/// Length of the linear cell buffer for a given target rank.
///
/// The furthest reachable offset is `(rank-1) * field_width(rank)`, taken
/// by the cell `rank - 1` rows directly above the seed, so the buffer holds
/// `2*(rank-1)^2 + 1` cells.
pub const fn field_length(rank: usize) -> usize {
    2 * (rank - 1) * (rank - 1) + 1
}

/// Compile-time assertion that the largest field fits comfortably in memory.
const _: () = assert!(field_length(MAX_RANK) == 1059);
