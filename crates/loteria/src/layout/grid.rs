//! Grid layout calculation
//!
//! This module handles the geometry of a card or board grid on a page:
//! cell dimensions, cell bounds and the positions of the cut lines that sit
//! in the gaps between cells.

use super::{GridPosition, GridSpec, Rect};

// =============================================================================
// Cell Dimensions
// =============================================================================

/// Width of one cell: `(area_width - (cols - 1) * gap) / cols`
pub fn cell_width(grid: &GridSpec) -> f32 {
    (grid.area.width - (grid.cols as f32 - 1.0) * grid.gap) / grid.cols as f32
}

/// Height of one cell: `(area_height - (rows - 1) * gap) / rows`
pub fn cell_height(grid: &GridSpec) -> f32 {
    (grid.area.height - (grid.rows as f32 - 1.0) * grid.gap) / grid.rows as f32
}

// =============================================================================
// Cell Bounds
// =============================================================================

/// Calculate the bounds of a cell at the given grid position.
///
/// Row 0 is the top row, so y is measured down from the top of the area.
pub fn cell_bounds(grid: &GridSpec, pos: GridPosition) -> Rect {
    let w = cell_width(grid);
    let h = cell_height(grid);

    let x = grid.area.left() + pos.col as f32 * (w + grid.gap);
    let y = grid.area.top() - (pos.row + 1) as f32 * h - pos.row as f32 * grid.gap;

    Rect::new(x, y, w, h)
}

/// All cell bounds in row-major order
pub fn cells(grid: &GridSpec) -> impl Iterator<Item = Rect> + '_ {
    (0..grid.cell_count()).map(|i| cell_bounds(grid, GridPosition::from_index(i, grid.cols)))
}

// =============================================================================
// Cut Positions
// =============================================================================

/// X coordinates of the internal vertical cut lines, centred in each gap
pub fn vertical_cut_positions(grid: &GridSpec) -> Vec<f32> {
    let w = cell_width(grid);
    (1..grid.cols)
        .map(|i| {
            let i = i as f32;
            grid.area.left() + i * w + (i - 1.0) * grid.gap + grid.gap / 2.0
        })
        .collect()
}

/// Y coordinates of the internal horizontal cut lines, top to bottom
pub fn horizontal_cut_positions(grid: &GridSpec) -> Vec<f32> {
    let h = cell_height(grid);
    (1..grid.rows)
        .map(|j| {
            let j = j as f32;
            grid.area.top() - j * h - (j - 1.0) * grid.gap - grid.gap / 2.0
        })
        .collect()
}

/// The four outer corners: top-left, top-right, bottom-left, bottom-right
pub fn corners(grid: &GridSpec) -> [(f32, f32); 4] {
    let a = &grid.area;
    [
        (a.left(), a.top()),
        (a.right(), a.top()),
        (a.left(), a.bottom()),
        (a.right(), a.bottom()),
    ]
}

// =============================================================================
// Tests
// =============================================================================
