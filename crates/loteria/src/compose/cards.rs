use super::draw_item;
use crate::layout::{GridPosition, cell_bounds};
use crate::marks::{draw_background, draw_card_frame, draw_grid_marks};
use crate::options::CardLayout;
use crate::surface::DrawingSurface;
use crate::types::{Catalog, CatalogItem, Result};

/// Pages needed for `items` cards at `per_page` cards each
pub fn card_page_count(items: usize, per_page: usize) -> usize {
    items.div_ceil(per_page)
}

/// One sheet of up to `rows × cols` cards, filled row-major.
///
/// Cells past the end of `items` stay empty: no frame, caption or image.
pub fn compose_card_page<S: DrawingSurface>(
    surface: &mut S,
    items: &[CatalogItem],
    layout: &CardLayout,
) -> Result<()> {
    let grid = layout.grid();
    let metrics = layout.cell_metrics();

    draw_background(surface);
    draw_grid_marks(surface, &grid);

    for (idx, item) in items.iter().take(grid.cell_count()).enumerate() {
        let cell = cell_bounds(&grid, GridPosition::from_index(idx, grid.cols));

        draw_card_frame(surface, cell, layout.frame_inset_pt);
        draw_item(surface, item, cell, &metrics, layout.caption_font_size_pt)?;
    }

    surface.show_page();
    Ok(())
}

/// Every catalog item once, in catalog order, one page per chunk.
///
/// Returns the number of pages appended.
pub fn compose_cards<S: DrawingSurface>(
    surface: &mut S,
    catalog: &Catalog,
    layout: &CardLayout,
) -> Result<usize> {
    let per_page = layout.cells_per_page();
    let mut pages = 0;

    for (page_idx, chunk) in catalog.items().chunks(per_page).enumerate() {
        log::debug!("Card page {} ({} cards)", page_idx + 1, chunk.len());
        compose_card_page(surface, chunk, layout)?;
        pages += 1;
    }

    Ok(pages)
}
