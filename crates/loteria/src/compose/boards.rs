use super::draw_item;
use crate::layout::{GridPosition, cell_bounds};
use crate::marks::{draw_background, draw_board_cell_frame, draw_board_frame};
use crate::options::BoardLayout;
use crate::surface::{DrawingSurface, FontFace, TextStyle};
use crate::text::{centered, draw_fitted};
use crate::types::{Result, Selection};

/// One board per page: centred title, outer frame, then the selection
/// placed row-major into the grid.
pub fn compose_board_page<S: DrawingSurface>(
    surface: &mut S,
    selection: &Selection<'_>,
    layout: &BoardLayout,
    title_prefix: &str,
) -> Result<()> {
    let grid = layout.grid();
    let metrics = layout.cell_metrics();

    draw_background(surface);

    let band = layout.title_band();
    let title_style = TextStyle::new(FontFace::Bold, layout.title_font_size_pt);
    let title = format!("{} {}", title_prefix, selection.board_index + 1);
    let title = centered(title, &*surface, &title_style, band.x, band.width);
    draw_fitted(surface, &title, layout.title_baseline(), &title_style);

    draw_board_frame(surface, layout.frame());

    for (idx, item) in selection.items.iter().take(grid.cell_count()).enumerate() {
        let cell = cell_bounds(&grid, GridPosition::from_index(idx, grid.cols));

        draw_board_cell_frame(surface, cell);
        draw_item(surface, item, cell, &metrics, layout.caption_font_size_pt)?;
    }

    surface.show_page();
    Ok(())
}

/// Render every selection in board order. Returns the number of pages appended.
pub fn compose_boards<S: DrawingSurface>(
    surface: &mut S,
    selections: &[Selection<'_>],
    layout: &BoardLayout,
    title_prefix: &str,
) -> Result<usize> {
    for selection in selections {
        log::debug!("Board {}: {:?}", selection.board_index + 1, selection.ids());
        compose_board_page(surface, selection, layout, title_prefix)?;
    }
    Ok(selections.len())
}
