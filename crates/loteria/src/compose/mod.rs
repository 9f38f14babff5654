//! Page composers
//!
//! Both documents share one cell convention: the caption sits in a band at
//! the top of the cell and the cover-fitted image fills the rest.

mod boards;
mod cards;

pub use boards::{compose_board_page, compose_boards};
pub use cards::{card_page_count, compose_card_page, compose_cards};

use crate::fit::draw_cover_from_path;
use crate::layout::{CellMetrics, Rect, split_cell};
use crate::surface::{DrawingSurface, FontFace, TextStyle};
use crate::text::{draw_fitted, fit_centered};
use crate::types::{CatalogItem, Result};

/// Caption above, image below
fn draw_item<S: DrawingSurface>(
    surface: &mut S,
    item: &CatalogItem,
    cell: Rect,
    metrics: &CellMetrics,
    caption_size: f32,
) -> Result<()> {
    let regions = split_cell(cell, metrics);
    let style = TextStyle::new(FontFace::Regular, caption_size);

    let caption = fit_centered(
        &item.name,
        &*surface,
        &style,
        cell.x,
        cell.width,
        regions.caption_max_width,
    );
    draw_fitted(surface, &caption, regions.caption_baseline, &style);

    draw_cover_from_path(surface, &item.image_path, regions.image)
}
