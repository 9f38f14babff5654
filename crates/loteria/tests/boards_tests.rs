use loteria::compose::compose_boards;
use loteria::render::{DrawCommand, RecordingSurface};
use loteria::surface::{DrawingSurface, TextMeasure};
use loteria::*;
use std::path::Path;
use tempfile::TempDir;

fn make_catalog(dir: &Path, n: i64) -> Catalog {
    let items = (1..=n)
        .map(|id| {
            let path = dir.join(format!("{id}.png"));
            image::RgbImage::from_pixel(24 + id as u32, 32, image::Rgb([20, 90, 160]))
                .save(&path)
                .unwrap();
            CatalogItem::new(id, format!("Item {id}"), path)
        })
        .collect();
    Catalog::new(items).unwrap()
}

fn options(board_count: usize, seed: u64) -> RunOptions {
    let layout = LayoutOptions {
        board_count,
        ..LayoutOptions::default()
    };
    RunOptions::new(layout, seed)
}

#[test]
fn test_one_page_per_board_with_titles() {
    let dir = TempDir::new().unwrap();
    let catalog = make_catalog(dir.path(), 20);

    let mut surface = RecordingSurface::new();
    let pages = render_board_document(&mut surface, &catalog, &options(5, 42)).unwrap();

    assert_eq!(pages, 5);
    assert_eq!(surface.page_count(), 5);

    for (idx, page) in surface.pages().iter().enumerate() {
        let texts: Vec<&str> = RecordingSurface::texts(page).collect();
        assert_eq!(texts[0], format!("Board {}", idx + 1));
        assert_eq!(texts.len(), 17);
        assert_eq!(RecordingSurface::images(page).count(), 16);

        // Outer board frame plus the page border
        let rounded = page
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeRoundedRect { .. }))
            .count();
        assert_eq!(rounded, 2);
    }
}

#[test]
fn test_title_prefix_is_configurable() {
    let dir = TempDir::new().unwrap();
    let catalog = make_catalog(dir.path(), 16);
    let mut opts = options(2, 1);
    opts.layout.board_title = "Tablero".to_string();

    let mut surface = RecordingSurface::new();
    render_board_document(&mut surface, &catalog, &opts).unwrap();

    let titles: Vec<&str> = surface
        .pages()
        .iter()
        .filter_map(|page| RecordingSurface::texts(page).next())
        .collect();
    assert_eq!(titles, vec!["Tablero 1", "Tablero 2"]);
}

#[test]
fn test_title_is_centred_on_the_page() {
    let dir = TempDir::new().unwrap();
    let catalog = make_catalog(dir.path(), 16);
    let opts = options(1, 1);

    let mut surface = RecordingSurface::new();
    render_board_document(&mut surface, &catalog, &opts).unwrap();

    let (x, text, style) = surface.pages()[0]
        .iter()
        .find_map(|c| match c {
            DrawCommand::Text { x, text, style, .. } => Some((*x, text.clone(), *style)),
            _ => None,
        })
        .unwrap();
    let width = surface.text_width(&text, style.font, style.size);
    let centre = x + width / 2.0;
    assert!((centre - constants::PAGE_WIDTH_PT / 2.0).abs() < 1e-3);
}

#[test]
fn test_same_seed_renders_identical_boards() {
    let dir = TempDir::new().unwrap();
    let catalog = make_catalog(dir.path(), 54);

    let mut first = RecordingSurface::new();
    render_board_document(&mut first, &catalog, &options(20, 42)).unwrap();
    let mut second = RecordingSurface::new();
    render_board_document(&mut second, &catalog, &options(20, 42)).unwrap();

    assert_eq!(first.pages(), second.pages());
}

#[test]
fn test_cells_follow_sampling_order() {
    let dir = TempDir::new().unwrap();
    let catalog = make_catalog(dir.path(), 30);
    let opts = options(3, 9);

    let selections = sample_boards(&catalog, 9, 3, 16).unwrap();
    let mut surface = RecordingSurface::new();
    compose_boards(&mut surface, &selections, &opts.layout.boards, "Board").unwrap();

    for (page, selection) in surface.pages().iter().zip(&selections) {
        let captions: Vec<&str> = RecordingSurface::texts(page).skip(1).collect();
        let names: Vec<&str> = selection.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(captions, names);
    }

    let mut rendered = RecordingSurface::new();
    render_board_document(&mut rendered, &catalog, &opts).unwrap();
    assert_eq!(rendered.pages(), surface.pages());
}

#[test]
fn test_small_catalog_fails_before_any_page() {
    let dir = TempDir::new().unwrap();
    let catalog = make_catalog(dir.path(), 15);

    let mut surface = RecordingSurface::new();
    let result = render_board_document(&mut surface, &catalog, &options(20, 42));

    assert!(matches!(
        result,
        Err(LoteriaError::CatalogTooSmall {
            required: 16,
            found: 15
        })
    ));
    assert_eq!(surface.page_count(), 0);
    assert!(surface.current().is_empty());
}

#[test]
fn test_board_cells_stay_inside_the_frame() {
    let dir = TempDir::new().unwrap();
    let catalog = make_catalog(dir.path(), 16);
    let layout = BoardLayout::default();
    let frame = layout.frame();

    let mut surface = RecordingSurface::new();
    render_board_document(&mut surface, &catalog, &options(1, 5)).unwrap();

    for (_, rect) in RecordingSurface::images(&surface.pages()[0]) {
        assert!(frame.contains(rect));
    }
    assert!(frame.top() < layout.title_band().bottom());
}
