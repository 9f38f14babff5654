//! Cover-fit image placement
//!
//! The source image is cropped around its centre to the destination's aspect
//! ratio and then scaled to exactly fill the destination. The result always
//! covers the whole rectangle; content outside the crop box is discarded.

use crate::layout::Rect;
use crate::surface::DrawingSurface;
use crate::types::{LoteriaError, Result};
use image::DynamicImage;
use std::path::Path;

/// Pixel crop box, `left`/`top` inclusive and `right`/`bottom` exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn aspect(&self) -> f64 {
        self.width() as f64 / self.height() as f64
    }
}

/// Centred crop of an `image_width × image_height` image matching the aspect
/// ratio of a `box_width × box_height` destination.
pub fn cover_crop(image_width: u32, image_height: u32, box_width: f32, box_height: f32) -> CropBox {
    let box_aspect = box_width as f64 / box_height as f64;
    let image_aspect = image_width as f64 / image_height as f64;

    if image_aspect > box_aspect {
        // Wider than the box: trim left and right
        let new_w = ((image_height as f64 * box_aspect).round() as u32).clamp(1, image_width);
        let offset_x = (image_width - new_w) / 2;
        CropBox::new(offset_x, 0, offset_x + new_w, image_height)
    } else {
        // Taller than (or same shape as) the box: trim top and bottom
        let new_h = ((image_width as f64 / box_aspect).round() as u32).clamp(1, image_height);
        let offset_y = (image_height - new_h) / 2;
        CropBox::new(0, offset_y, image_width, offset_y + new_h)
    }
}

/// Crop `image` for `dest` and draw it filling `dest` exactly.
pub fn draw_cover<S: DrawingSurface>(surface: &mut S, image: &DynamicImage, dest: Rect) -> Result<()> {
    let crop = cover_crop(image.width(), image.height(), dest.width, dest.height);
    let cropped = image.crop_imm(crop.left, crop.top, crop.width(), crop.height());
    surface.image(&cropped, dest)
}

/// Decode the image at `path` and cover-fit it into `dest`.
///
/// The decoded image is dropped as soon as it has been drawn.
pub fn draw_cover_from_path<S: DrawingSurface>(
    surface: &mut S,
    path: &Path,
    dest: Rect,
) -> Result<()> {
    let image = image::open(path).map_err(|source| LoteriaError::ImageDecode {
        path: path.to_path_buf(),
        source,
    })?;
    draw_cover(surface, &image, dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_in_square_box() {
        let crop = cover_crop(400, 300, 100.0, 100.0);
        assert_eq!(crop, CropBox::new(50, 0, 350, 300));
    }

    #[test]
    fn test_tall_image_in_square_box() {
        let crop = cover_crop(300, 500, 100.0, 100.0);
        assert_eq!(crop, CropBox::new(0, 100, 300, 400));
    }

    #[test]
    fn test_matching_aspect_keeps_full_image() {
        let crop = cover_crop(640, 480, 160.0, 120.0);
        assert_eq!(crop, CropBox::new(0, 0, 640, 480));

        let crop = cover_crop(500, 500, 42.0, 42.0);
        assert_eq!(crop, CropBox::new(0, 0, 500, 500));
    }

    #[test]
    fn test_crop_aspect_matches_box_and_stays_inside_image() {
        let images = [(400, 300), (300, 400), (1000, 37), (37, 1000), (1, 1), (1920, 1080), (123, 457)];
        let boxes = [(100.0, 100.0), (118.53, 125.08), (250.0, 40.0), (40.0, 250.0), (3.0, 2.0)];

        for &(iw, ih) in &images {
            for &(bw, bh) in &boxes {
                let crop = cover_crop(iw, ih, bw, bh);
                assert!(crop.right <= iw && crop.bottom <= ih, "{iw}x{ih} in {bw}x{bh}");
                assert!(crop.width() >= 1 && crop.height() >= 1);

                // Half a pixel of rounding along the cropped axis
                let box_aspect = bw as f64 / bh as f64;
                let shortest = crop.width().min(crop.height()) as f64;
                let tolerance = box_aspect.max(1.0) * 0.5 / shortest + 1e-9;
                assert!(
                    (crop.aspect() - box_aspect).abs() <= tolerance,
                    "{iw}x{ih} in {bw}x{bh}: {:?}",
                    crop
                );
            }
        }
    }

    #[test]
    fn test_crop_is_centred() {
        let crop = cover_crop(401, 300, 100.0, 100.0);
        assert_eq!(crop.width(), 300);
        // Floor division puts the odd pixel on the right
        assert_eq!(crop.left, 50);
        assert_eq!(401 - crop.right, 51);
    }
}
