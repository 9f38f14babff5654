use crate::compose::card_page_count;
use crate::options::LayoutOptions;
use crate::types::DocumentStatistics;

/// Calculate what a run over `catalog_items` items will produce
pub fn calculate_statistics(catalog_items: usize, options: &LayoutOptions) -> DocumentStatistics {
    let per_page = options.cards.cells_per_page();
    let card_pages = card_page_count(catalog_items, per_page);

    let last_page_cards = match catalog_items % per_page {
        0 if catalog_items > 0 => per_page,
        rem => rem,
    };

    DocumentStatistics {
        catalog_items,
        cells_per_card_page: per_page,
        card_pages,
        last_page_cards,
        board_pages: options.board_count,
        cells_per_board: options.boards.cells_per_board(),
    }
}
