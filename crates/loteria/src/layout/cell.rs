//! Caption-above / image-below split of a single cell

use super::Rect;

/// Fixed measurements of the caption band and image area inside a cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    /// Height reserved for the caption at the top of the cell
    pub caption_height: f32,
    /// Baseline offset above the bottom of the caption band
    pub caption_raise: f32,
    /// Horizontal room subtracted from the cell width when fitting a caption
    pub caption_allowance: f32,
    /// Padding around the image area
    pub image_padding: f32,
}

/// Resolved regions of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRegions {
    pub caption_band: Rect,
    pub caption_baseline: f32,
    pub caption_max_width: f32,
    pub image: Rect,
}

pub fn split_cell(cell: Rect, metrics: &CellMetrics) -> CellRegions {
    let band_bottom = cell.top() - metrics.caption_height;
    let caption_band = Rect::new(cell.x, band_bottom, cell.width, metrics.caption_height);

    let pad = metrics.image_padding;
    let image = Rect::new(
        cell.x + pad,
        cell.y + pad,
        cell.width - 2.0 * pad,
        cell.height - metrics.caption_height - 2.0 * pad,
    );

    CellRegions {
        caption_band,
        caption_baseline: band_bottom + metrics.caption_raise,
        caption_max_width: cell.width - metrics.caption_allowance,
        image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_band_and_image_do_not_overlap() {
        let cell = Rect::new(36.0, 600.0, 123.0, 162.0);
        let metrics = CellMetrics {
            caption_height: 24.48,
            caption_raise: 4.32,
            caption_allowance: 10.0,
            image_padding: 4.32,
        };
        let regions = split_cell(cell, &metrics);

        assert!(cell.contains(&regions.caption_band));
        assert!(cell.contains(&regions.image));
        assert!(!regions.caption_band.overlaps(&regions.image));
        assert!(regions.caption_band.height + regions.image.height <= cell.height);
        assert_eq!(regions.caption_max_width, 113.0);
        assert!(regions.caption_baseline > regions.image.top());
    }
}
