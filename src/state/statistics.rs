// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Per-rank counters maintained by the canonicality check: every fixed
//! placement examined, the placements canonical under rotations alone
//! (one-sided shapes), and the accepted free shapes.

use crate::geometry::Rank;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counter {
    /// Every placement the search visited at this rank.
    FixedShapes,
    /// Placements minimal among their 4 rotation images.
    OneSidedShapes,
    /// Placements minimal among all 8 symmetry images (the accepted ones).
    FreeShapes,
}

/// Counter rows indexed by rank level, 0..=target.
///
/// Row 0 corresponds to the empty shape and stays zero; it is kept so rank
/// values index directly.
#[derive(Debug)]
pub struct Statistics {
    stats: Vec<[u64; Counter::COUNT]>,
}

impl Statistics {
    pub fn new(target: Rank) -> Self {
        Self {
            stats: vec![[0; Counter::COUNT]; target.as_usize() + 1],
        }
    }

    /// Increment the specified counter at the given rank level.
    pub fn increment(&mut self, counter: Counter, rank: usize) {
        self.stats[rank][counter as usize] += 1;
    }

    /// Get the current value of the specified counter at the given rank level.
    pub fn get(&self, counter: Counter, rank: usize) -> u64 {
        self.stats[rank][counter as usize]
    }
}
