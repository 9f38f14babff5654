use image::{DynamicImage, Rgba, RgbaImage};
use loteria::layout::Rect;
use loteria::render::PdfSurface;
use loteria::surface::{DrawingSurface, FontFace, TextMeasure};

// Tuffy: 2048 units per em, "W" advances 1576 units
const TUFFY: &[u8] = include_bytes!("fonts/Tuffy.ttf");

fn image_streams(bytes: &[u8]) -> Vec<lopdf::Dictionary> {
    let doc = lopdf::Document::load_mem(bytes).unwrap();
    doc.objects
        .values()
        .filter_map(|object| match object {
            lopdf::Object::Stream(stream) => Some(stream.dict.clone()),
            _ => None,
        })
        .filter(|dict| {
            dict.get(b"Subtype")
                .and_then(|s| s.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false)
        })
        .collect()
}

#[test]
fn test_embedded_font_width_uses_units_per_em() {
    let surface = PdfSurface::with_font("Fonts", TUFFY).unwrap();

    let width = surface.text_width("WWWW", FontFace::Regular, 10.0);
    let expected = 4.0 * 1576.0 / 2048.0 * 10.0;
    assert!((width - expected).abs() < 1e-3, "width {width}, expected {expected}");
}

#[test]
fn test_embedded_font_width_scales_with_size() {
    let surface = PdfSurface::with_font("Fonts", TUFFY).unwrap();

    let small = surface.text_width("El Gallo", FontFace::Regular, 10.0);
    let large = surface.text_width("El Gallo", FontFace::Regular, 20.0);
    assert!(small > 0.0);
    assert!((large - 2.0 * small).abs() < 1e-3);
}

#[test]
fn test_invalid_font_is_rejected() {
    assert!(PdfSurface::with_font("Fonts", b"not a font").is_err());
}

#[test]
fn test_transparent_image_gets_soft_mask() {
    let mut rgba = RgbaImage::from_pixel(8, 8, Rgba([180, 40, 40, 255]));
    for x in 0..8 {
        rgba.put_pixel(x, 0, Rgba([0, 0, 0, 0]));
    }

    let mut surface = PdfSurface::new("Alpha");
    surface
        .image(
            &DynamicImage::ImageRgba8(rgba),
            Rect::new(72.0, 72.0, 144.0, 144.0),
        )
        .unwrap();
    surface.show_page();
    let bytes = surface.finish();

    let images = image_streams(&bytes);
    assert!(images.iter().any(|dict| dict.has(b"SMask")));
}

#[test]
fn test_finish_flushes_pending_page() {
    let mut surface = PdfSurface::new("Pending");
    surface.fill_rect(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        loteria::surface::Color::BLACK,
    );
    assert_eq!(surface.page_count(), 0);

    let bytes = surface.finish();
    let doc = lopdf::Document::load_mem(&bytes).unwrap();
    assert_eq!(doc.get_pages().len(), 1);
}
