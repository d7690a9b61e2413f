// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

/// Parse a rendered shape back into cell coordinates, `(column, row)`.
pub fn parse_shape(text: &str) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for (row, line) in text.lines().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '#' => cells.push((col, row)),
                ' ' => {}
                other => panic!("unexpected character {:?} in shape:\n{}", other, text),
            }
        }
    }
    cells
}

/// Whether the cells form a single 4-connected region.
pub fn is_connected(cells: &[(usize, usize)]) -> bool {
    if cells.is_empty() {
        return false;
    }
    let mut visited = vec![false; cells.len()];
    let mut stack = vec![0];
    visited[0] = true;
    let mut seen = 1;
    while let Some(i) = stack.pop() {
        let (col, row) = cells[i];
        for (j, &(c, r)) in cells.iter().enumerate() {
            if !visited[j]
                && ((c == col && r.abs_diff(row) == 1) || (r == row && c.abs_diff(col) == 1))
            {
                visited[j] = true;
                seen += 1;
                stack.push(j);
            }
        }
    }
    seen == cells.len()
}

/// A signature shared by every shape of one free equivalence class.
///
/// Applies all 8 symmetries of the square to the cell set, normalizes each
/// image to its bounding-box corner, and returns the lexicographically
/// smallest sorted cell list. Two shapes are rotations/reflections/
/// translations of each other exactly when their signatures match.
pub fn free_class_signature(cells: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let w = cells.iter().map(|&(c, _)| c).max().unwrap() + 1;
    let h = cells.iter().map(|&(_, r)| r).max().unwrap() + 1;

    let mut best: Option<Vec<(usize, usize)>> = None;
    for variant in 0..8 {
        let mut image: Vec<(usize, usize)> = cells
            .iter()
            .map(|&(c, r)| {
                let (c, r) = match variant % 4 {
                    0 => (c, r),
                    1 => (h - 1 - r, c),
                    2 => (w - 1 - c, h - 1 - r),
                    _ => (r, w - 1 - c),
                };
                if variant < 4 {
                    (c, r)
                } else {
                    // Mirror within the rotated bounding box
                    let iw = if variant % 2 == 0 { w } else { h };
                    (iw - 1 - c, r)
                }
            })
            .collect();
        let min_c = image.iter().map(|&(c, _)| c).min().unwrap();
        let min_r = image.iter().map(|&(_, r)| r).min().unwrap();
        for cell in image.iter_mut() {
            *cell = (cell.0 - min_c, cell.1 - min_r);
        }
        image.sort_unstable();
        if best.as_ref().map(|b| image < *b).unwrap_or(true) {
            best = Some(image);
        }
    }
    best.unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shape() {
        assert_eq!(parse_shape("##\n# "), vec![(0, 0), (1, 0), (0, 1)]);
    }

    #[test]
    fn test_is_connected() {
        assert!(is_connected(&[(0, 0), (1, 0), (1, 1)]));
        assert!(!is_connected(&[(0, 0), (1, 1)]));
    }

    #[test]
    fn test_signature_identifies_rotations() {
        let l = parse_shape("##\n# ");
        let l_rotated = parse_shape("# \n##");
        let straight = parse_shape("###");
        assert_eq!(free_class_signature(&l), free_class_signature(&l_rotated));
        assert_ne!(free_class_signature(&l), free_class_signature(&straight));
    }
}
