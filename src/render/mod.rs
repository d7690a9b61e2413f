// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of accepted shapes.
//!
//! A shape is rendered as a rectangular block trimmed to its minimal
//! bounding box: `'#'` for occupied cells, `' '` for empty cells inside the
//! box, rows joined by `'\n'` with no trailing separator. The output
//! contains exactly one mark per cell of the shape, and no edge row or
//! column of the block is entirely blank.

use crate::geometry::Position;
use crate::state::CellField;

/// Mark character for occupied cells.
pub const MARK: char = '#';

/// Fill character for empty cells inside the bounding box.
pub const FILL: char = ' ';

/// Render the occupied cells of `field` listed in `shape`.
pub fn render(field: &CellField, shape: &[Position]) -> String {
    debug_assert!(!shape.is_empty());

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

    let width = max_col - min_col + 1;
    let height = max_row - min_row + 1;
    let mut grid = vec![FILL; width * height];
    for &pos in shape {
        let (col, row) = field.coords(pos);
        grid[(row - min_row) * width + (col - min_col)] = MARK;
    }

    let mut text = String::with_capacity(height * (width + 1));
    for row in 0..height {
        if row > 0 {
            text.push('\n');
        }
        text.extend(&grid[row * width..(row + 1) * width]);
    }
    text
}
