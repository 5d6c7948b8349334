//! Greedy rectangle merging for IntGrid layers.
//!
//! Collision layers are authored cell by cell, but spawning one body per cell
//! is wasteful. This module covers all cells holding a given value with a small
//! set of non-overlapping rectangles.

use bevy::prelude::*;
use bevy_ldtkmap_assets::level::Grid;

/// Axis-aligned rectangle in level pixel space.
///
/// `(x, y)` is the top-left corner; y grows downward as in LDtk.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct MergedRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl MergedRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Width and height as a vector.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

/// Merge all cells equal to `value` into rectangles.
///
/// Uses a greedy width-then-height approach:
/// 1. Scan cells in row-major order
/// 2. For each unvisited matching cell:
///    a. Extend right while cells match and are unvisited
///    b. Extend that strip downward one row at a time, keeping the width, while
///       every cell of the next row matches and is unvisited
///    c. Mark all cells in the block as visited
///    d. Emit the block scaled by `cell_size`
///
/// The result is deterministic and its union is exactly the set of matching
/// cells, but it is not a minimum cover.
///
/// # Arguments
///
/// * `grid` - IntGrid values
/// * `value` - Cell value to cover
/// * `cell_size` - Pixel size of one cell
pub fn merge_rectangles(grid: &Grid, value: i32, cell_size: i32) -> Vec<MergedRect> {
    let mut rectangles = Vec::new();

    let height = grid.height();
    let width = grid.width();
    if height == 0 || width == 0 {
        return rectangles;
    }

    let rows = grid.rows();
    let mut visited = vec![vec![false; width]; height];
    let open = |visited: &[Vec<bool>], x: usize, y: usize| rows[y][x] == value && !visited[y][x];

    for y in 0..height {
        for x in 0..width {
            if !open(&visited, x, y) {
                continue;
            }

            // Extend horizontally
            let mut rect_width = 1;
            while x + rect_width < width && open(&visited, x + rect_width, y) {
                rect_width += 1;
            }

            // Extend vertically, keeping the width
            let mut rect_height = 1;
            while y + rect_height < height
                && (x..x + rect_width).all(|cx| open(&visited, cx, y + rect_height))
            {
                rect_height += 1;
            }

            for row in &mut visited[y..y + rect_height] {
                for cell in &mut row[x..x + rect_width] {
                    *cell = true;
                }
            }

            let cs = cell_size as f32;
            rectangles.push(MergedRect::new(
                x as f32 * cs,
                y as f32 * cs,
                rect_width as f32 * cs,
                rect_height as f32 * cs,
            ));
        }
    }

    rectangles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[i32]]) -> Grid {
        Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect())
    }

    /// Cells covered by the rectangles, failing on any overlap.
    fn covered_cells(rects: &[MergedRect], cell_size: f32, w: usize, h: usize) -> Vec<Vec<bool>> {
        let mut covered = vec![vec![false; w]; h];
        for rect in rects {
            let x0 = (rect.x / cell_size) as usize;
            let y0 = (rect.y / cell_size) as usize;
            let x1 = x0 + (rect.width / cell_size) as usize;
            let y1 = y0 + (rect.height / cell_size) as usize;
            for row in covered.iter_mut().take(y1).skip(y0) {
                for cell in row.iter_mut().take(x1).skip(x0) {
                    assert!(!*cell, "rectangles overlap");
                    *cell = true;
                }
            }
        }
        covered
    }

    #[test]
    fn test_merge_square_block() {
        let g = grid(&[&[1, 1, 0], &[1, 1, 0], &[0, 0, 0]]);
        let rects = merge_rectangles(&g, 1, 10);
        assert_eq!(rects, vec![MergedRect::new(0.0, 0.0, 20.0, 20.0)]);
    }

    #[test]
    fn test_merge_full_grid() {
        let g = grid(&[&[2, 2, 2, 2], &[2, 2, 2, 2], &[2, 2, 2, 2]]);
        let rects = merge_rectangles(&g, 2, 16);
        assert_eq!(rects, vec![MergedRect::new(0.0, 0.0, 64.0, 48.0)]);
    }

    #[test]
    fn test_merge_single_cell() {
        let g = grid(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]);
        let rects = merge_rectangles(&g, 1, 8);
        assert_eq!(rects, vec![MergedRect::new(8.0, 8.0, 8.0, 8.0)]);
    }

    #[test]
    fn test_merge_empty_grid() {
        assert!(merge_rectangles(&Grid::default(), 1, 16).is_empty());
    }

    #[test]
    fn test_merge_no_matches() {
        let g = grid(&[&[0, 2], &[2, 0]]);
        assert!(merge_rectangles(&g, 1, 16).is_empty());
    }

    #[test]
    fn test_merge_l_shape() {
        // Width is fixed by the first row, so the leg becomes its own rectangle
        let g = grid(&[&[1, 1, 1], &[1, 0, 0], &[1, 0, 0]]);
        let rects = merge_rectangles(&g, 1, 1);
        assert_eq!(
            rects,
            vec![
                MergedRect::new(0.0, 0.0, 3.0, 1.0),
                MergedRect::new(0.0, 1.0, 1.0, 2.0),
            ]
        );
    }

    #[test]
    fn test_merge_stops_at_partial_row() {
        let g = grid(&[&[1, 1], &[1, 1], &[1, 0]]);
        let rects = merge_rectangles(&g, 1, 1);
        assert_eq!(
            rects,
            vec![
                MergedRect::new(0.0, 0.0, 2.0, 2.0),
                MergedRect::new(0.0, 2.0, 1.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_rectangle_center_and_size() {
        let rect = MergedRect::new(16.0, 32.0, 48.0, 16.0);
        assert_eq!(rect.center(), Vec2::new(40.0, 40.0));
        assert_eq!(rect.size(), Vec2::new(48.0, 16.0));
    }

    #[test]
    fn test_merge_covers_exactly_without_overlap() {
        // Small LCG so the grids are reproducible
        let mut seed: u32 = 0x2545_f491;
        let mut next = || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) % 3
        };

        for _ in 0..200 {
            let w = 1 + (next() as usize) * 3;
            let h = 1 + (next() as usize) * 2;
            let rows: Vec<Vec<i32>> = (0..h)
                .map(|_| (0..w).map(|_| next() as i32).collect())
                .collect();
            let g = Grid::from_rows(rows.clone());

            for value in 0..3 {
                let rects = merge_rectangles(&g, value, 4);
                let covered = covered_cells(&rects, 4.0, w, h);
                for y in 0..h {
                    for x in 0..w {
                        assert_eq!(covered[y][x], rows[y][x] == value);
                    }
                }

                // Same input, same output
                assert_eq!(rects, merge_rectangles(&g, value, 4));
            }
        }
    }
}
