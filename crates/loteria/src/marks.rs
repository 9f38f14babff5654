//! Printer's marks and decorative frames
//!
//! Cut lines run through the middle of each gap between cells, crop marks
//! cross the four outer corners of the grid, and frames outline individual
//! cells. Everything here draws from already-resolved geometry.

use crate::constants::*;
use crate::layout::{GridSpec, Rect, corners, horizontal_cut_positions, vertical_cut_positions};
use crate::surface::{Color, DrawingSurface, StrokeStyle};

/// Length of each crop mark arm (points)
pub const CROP_MARK_LENGTH: f32 = 0.15 * POINTS_PER_INCH;

fn cut_stroke() -> StrokeStyle {
    StrokeStyle::new(Color::gray(CUT_LINE_GRAY), CUT_LINE_WIDTH)
}

/// Internal cut lines spanning the full grid, centred in the gaps.
pub fn draw_cut_lines<S: DrawingSurface>(surface: &mut S, grid: &GridSpec) {
    let area = grid.area;
    let stroke = cut_stroke();

    for x in vertical_cut_positions(grid) {
        surface.line((x, area.bottom()), (x, area.top()), stroke);
    }

    for y in horizontal_cut_positions(grid) {
        surface.line((area.left(), y), (area.right(), y), stroke);
    }
}

/// Two short marks per outer grid corner, one per axis, centred on the corner.
pub fn draw_crop_marks<S: DrawingSurface>(surface: &mut S, grid: &GridSpec) {
    let stroke = cut_stroke();
    let half = CROP_MARK_LENGTH / 2.0;

    for (x, y) in corners(grid) {
        surface.line((x, y + half), (x, y - half), stroke);
    }
    for (x, y) in corners(grid) {
        surface.line((x - half, y), (x + half, y), stroke);
    }
}

/// Cut lines plus crop marks
pub fn draw_grid_marks<S: DrawingSurface>(surface: &mut S, grid: &GridSpec) {
    draw_cut_lines(surface, grid);
    draw_crop_marks(surface, grid);
}

/// Card frame inset from the cell edges
pub fn draw_card_frame<S: DrawingSurface>(surface: &mut S, cell: Rect, inset: f32) {
    surface.stroke_rect(
        cell.inset(inset),
        StrokeStyle::new(DARK_GOLDENROD, CARD_FRAME_WIDTH),
    );
}

/// Board cell frame on the exact cell edges
pub fn draw_board_cell_frame<S: DrawingSurface>(surface: &mut S, cell: Rect) {
    surface.stroke_rect(cell, StrokeStyle::new(Color::BLACK, BOARD_CELL_FRAME_WIDTH));
}

/// Rounded frame around a whole board
pub fn draw_board_frame<S: DrawingSurface>(surface: &mut S, frame: Rect) {
    surface.stroke_rounded_rect(
        frame,
        BOARD_FRAME_RADIUS,
        StrokeStyle::new(DARK_GOLDENROD, BOARD_FRAME_WIDTH),
    );
}

/// Parchment fill and rounded border, drawn first on every page
pub fn draw_background<S: DrawingSurface>(surface: &mut S) {
    let page = Rect::new(0.0, 0.0, PAGE_WIDTH_PT, PAGE_HEIGHT_PT);
    surface.fill_rect(page, PARCHMENT_FILL.into());
    surface.stroke_rounded_rect(
        page.inset(inch(0.25)),
        PARCHMENT_BORDER_RADIUS,
        StrokeStyle::new(PARCHMENT_BORDER, PARCHMENT_BORDER_WIDTH),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};

    fn lines(surface: &RecordingSurface) -> Vec<((f32, f32), (f32, f32))> {
        surface
            .current()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_cut_lines_for_4x4() {
        let grid = GridSpec::for_page(4, 4, 15.84, 612.0, 792.0, 36.0);
        let mut surface = RecordingSurface::new();
        draw_cut_lines(&mut surface, &grid);

        let lines = lines(&surface);
        assert_eq!(lines.len(), 6);

        // Vertical lines span the full grid height
        for (from, to) in &lines[..3] {
            assert_eq!(from.0, to.0);
            assert_eq!(from.1, grid.area.bottom());
            assert_eq!(to.1, grid.area.top());
        }
        // Horizontal lines span the full grid width
        for (from, to) in &lines[3..] {
            assert_eq!(from.1, to.1);
            assert_eq!(from.0, grid.area.left());
            assert_eq!(to.0, grid.area.right());
        }
    }

    #[test]
    fn test_crop_marks_are_centred_on_corners() {
        let grid = GridSpec::new(2, 2, 10.0, Rect::new(50.0, 50.0, 200.0, 300.0));
        let mut surface = RecordingSurface::new();
        draw_crop_marks(&mut surface, &grid);

        let lines = lines(&surface);
        assert_eq!(lines.len(), 8);

        let half = CROP_MARK_LENGTH / 2.0;
        for (from, to) in &lines {
            let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
            assert!(
                corners(&grid)
                    .iter()
                    .any(|c| (c.0 - mid.0).abs() < 1e-4 && (c.1 - mid.1).abs() < 1e-4)
            );

            let length = ((to.0 - from.0).powi(2) + (to.1 - from.1).powi(2)).sqrt();
            assert!((length - 2.0 * half).abs() < 1e-4);
        }
    }

    #[test]
    fn test_card_frame_is_inset() {
        let mut surface = RecordingSurface::new();
        let cell = Rect::new(10.0, 10.0, 100.0, 150.0);
        draw_card_frame(&mut surface, cell, 2.0);

        match &surface.current()[0] {
            DrawCommand::StrokeRect { rect, stroke } => {
                assert_eq!(*rect, Rect::new(12.0, 12.0, 96.0, 146.0));
                assert_eq!(stroke.width, CARD_FRAME_WIDTH);
            }
            other => panic!("Expected frame, got {:?}", other),
        }
    }
}
