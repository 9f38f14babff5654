//! Document assembly
//!
//! Produces the card document and the board document from one catalog.
//! All validation (layout, catalog size, sampling) happens before the first
//! page of either document is drawn.

use crate::compose::{compose_boards, compose_cards};
use crate::constants::DEFAULT_SEED;
use crate::options::LayoutOptions;
use crate::render::PdfSurface;
use crate::sampler::{check_catalog_size, sample_boards};
use crate::surface::DrawingSurface;
use crate::types::{Catalog, Result};
use std::path::Path;

/// Everything a run needs besides the catalog
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub layout: LayoutOptions,
    pub seed: u64,
    /// TrueType font for captions and titles; built-in Helvetica when `None`
    pub font: Option<Vec<u8>>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(LayoutOptions::default(), DEFAULT_SEED)
    }
}

impl RunOptions {
    pub fn new(layout: LayoutOptions, seed: u64) -> Self {
        Self {
            layout,
            seed,
            font: None,
        }
    }

    /// Layout and catalog checks shared by every entry point
    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        self.layout.validate()?;
        check_catalog_size(catalog, self.layout.boards.cells_per_board())
    }
}

/// Finalized PDF bytes of both documents
#[derive(Debug, Clone)]
pub struct GeneratedDocuments {
    pub cards: Vec<u8>,
    pub boards: Vec<u8>,
    pub card_pages: usize,
    pub board_pages: usize,
}

/// Draw every card page onto `surface`
pub fn render_card_document<S: DrawingSurface>(
    surface: &mut S,
    catalog: &Catalog,
    options: &RunOptions,
) -> Result<usize> {
    options.validate(catalog)?;
    draw_cards(surface, catalog, options)
}

/// Sample the boards from `options.seed` and draw one page per board
pub fn render_board_document<S: DrawingSurface>(
    surface: &mut S,
    catalog: &Catalog,
    options: &RunOptions,
) -> Result<usize> {
    options.validate(catalog)?;
    draw_boards(surface, catalog, options)
}

// Callers validate `options` against `catalog` first
fn draw_cards<S: DrawingSurface>(
    surface: &mut S,
    catalog: &Catalog,
    options: &RunOptions,
) -> Result<usize> {
    compose_cards(surface, catalog, &options.layout.cards)
}

fn draw_boards<S: DrawingSurface>(
    surface: &mut S,
    catalog: &Catalog,
    options: &RunOptions,
) -> Result<usize> {
    let layout = &options.layout;
    let selections = sample_boards(
        catalog,
        options.seed,
        layout.board_count,
        layout.boards.cells_per_board(),
    )?;
    compose_boards(surface, &selections, &layout.boards, &layout.board_title)
}

fn new_surface(title: &str, font: Option<&[u8]>) -> Result<PdfSurface> {
    match font {
        Some(bytes) => PdfSurface::with_font(title, bytes),
        None => Ok(PdfSurface::new(title)),
    }
}

/// Build both PDFs in memory
pub fn generate_documents(catalog: &Catalog, options: &RunOptions) -> Result<GeneratedDocuments> {
    options.validate(catalog)?;
    let font = options.font.as_deref();

    log::info!("Generating cards ({} items)", catalog.len());
    let mut cards = new_surface("Cards", font)?;
    let card_pages = draw_cards(&mut cards, catalog, options)?;

    log::info!(
        "Generating boards ({} boards, seed {})",
        options.layout.board_count,
        options.seed
    );
    let mut boards = new_surface("Boards", font)?;
    let board_pages = draw_boards(&mut boards, catalog, options)?;

    Ok(GeneratedDocuments {
        cards: cards.finish(),
        boards: boards.finish(),
        card_pages,
        board_pages,
    })
}

/// Build both PDFs and write them to disk
pub async fn generate_pdfs(
    catalog: &Catalog,
    options: &RunOptions,
    cards_path: impl AsRef<Path>,
    boards_path: impl AsRef<Path>,
) -> Result<GeneratedDocuments> {
    let catalog = catalog.clone();
    let options = options.clone();
    let cards_path = cards_path.as_ref().to_owned();
    let boards_path = boards_path.as_ref().to_owned();

    let documents =
        tokio::task::spawn_blocking(move || generate_documents(&catalog, &options)).await??;

    tokio::fs::write(&cards_path, &documents.cards).await?;
    log::info!("Cards PDF written: {}", cards_path.display());
    tokio::fs::write(&boards_path, &documents.boards).await?;
    log::info!("Boards PDF written: {}", boards_path.display());

    Ok(documents)
}
