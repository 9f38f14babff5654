use crate::constants::*;
use crate::layout::{CellMetrics, GridSpec, Rect, cell_height, cell_width};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Card sheet geometry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardLayout {
    pub rows: usize,
    pub cols: usize,
    pub margin_pt: f32,
    pub gap_pt: f32,
    pub caption_height_pt: f32,
    pub caption_raise_pt: f32,
    pub caption_allowance_pt: f32,
    pub caption_font_size_pt: f32,
    pub frame_inset_pt: f32,
    pub image_padding_pt: f32,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            margin_pt: inch(0.5),
            gap_pt: inch(0.22),
            caption_height_pt: inch(0.34),
            caption_raise_pt: inch(0.06),
            caption_allowance_pt: 10.0,
            caption_font_size_pt: CAPTION_FONT_SIZE,
            frame_inset_pt: 2.0,
            image_padding_pt: inch(0.06),
        }
    }
}

impl CardLayout {
    pub fn cells_per_page(&self) -> usize {
        self.rows * self.cols
    }

    /// The grid fills the page minus the margin
    pub fn grid(&self) -> GridSpec {
        GridSpec::for_page(
            self.rows,
            self.cols,
            self.gap_pt,
            PAGE_WIDTH_PT,
            PAGE_HEIGHT_PT,
            self.margin_pt,
        )
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics {
            caption_height: self.caption_height_pt,
            caption_raise: self.caption_raise_pt,
            caption_allowance: self.caption_allowance_pt,
            image_padding: self.image_padding_pt,
        }
    }
}

/// Board page geometry
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardLayout {
    pub rows: usize,
    pub cols: usize,
    pub margin_pt: f32,
    pub title_height_pt: f32,
    pub title_raise_pt: f32,
    pub title_font_size_pt: f32,
    /// Space between the bottom of the title band and the board frame
    pub title_spacing_pt: f32,
    /// Space between the board frame and the grid
    pub inner_margin_pt: f32,
    pub gap_pt: f32,
    pub caption_height_pt: f32,
    pub caption_raise_pt: f32,
    pub caption_allowance_pt: f32,
    pub caption_font_size_pt: f32,
    pub image_padding_pt: f32,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            rows: 4,
            cols: 4,
            margin_pt: inch(0.5),
            title_height_pt: inch(0.6),
            title_raise_pt: inch(0.10),
            title_font_size_pt: BOARD_TITLE_FONT_SIZE,
            title_spacing_pt: inch(0.10),
            inner_margin_pt: inch(0.10),
            gap_pt: inch(0.18),
            caption_height_pt: inch(0.30),
            caption_raise_pt: inch(0.06),
            caption_allowance_pt: 10.0,
            caption_font_size_pt: CAPTION_FONT_SIZE,
            image_padding_pt: inch(0.06),
        }
    }
}

impl BoardLayout {
    pub fn cells_per_board(&self) -> usize {
        self.rows * self.cols
    }

    /// Band across the top of the page holding the board title
    pub fn title_band(&self) -> Rect {
        Rect::new(
            self.margin_pt,
            PAGE_HEIGHT_PT - self.margin_pt - self.title_height_pt,
            PAGE_WIDTH_PT - 2.0 * self.margin_pt,
            self.title_height_pt,
        )
    }

    pub fn title_baseline(&self) -> f32 {
        self.title_band().bottom() + self.title_raise_pt
    }

    /// Outer decorative frame around the grid
    pub fn frame(&self) -> Rect {
        let top = self.title_band().bottom() - self.title_spacing_pt;
        Rect::new(
            self.margin_pt,
            self.margin_pt,
            PAGE_WIDTH_PT - 2.0 * self.margin_pt,
            top - self.margin_pt,
        )
    }

    pub fn grid(&self) -> GridSpec {
        GridSpec::new(
            self.rows,
            self.cols,
            self.gap_pt,
            self.frame().inset(self.inner_margin_pt),
        )
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics {
            caption_height: self.caption_height_pt,
            caption_raise: self.caption_raise_pt,
            caption_allowance: self.caption_allowance_pt,
            image_padding: self.image_padding_pt,
        }
    }
}

/// Complete configuration for one run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    pub cards: CardLayout,
    pub boards: BoardLayout,
    pub board_count: usize,
    /// Title prefix; board pages read "<prefix> <n>"
    pub board_title: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            cards: CardLayout::default(),
            boards: BoardLayout::default(),
            board_count: DEFAULT_BOARD_COUNT,
            board_title: "Board".to_string(),
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| LoteriaError::Config(format!("Failed to parse layout: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LoteriaError::Config(format!("Failed to serialize layout: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.board_count == 0 {
            return Err(LoteriaError::Config(
                "Board count must be at least 1".to_string(),
            ));
        }

        validate_grid("Card", self.cards.grid(), &self.cards.cell_metrics())?;
        validate_grid("Board", self.boards.grid(), &self.boards.cell_metrics())?;

        Ok(())
    }
}

fn validate_grid(label: &str, grid: GridSpec, metrics: &CellMetrics) -> Result<()> {
    if grid.rows == 0 || grid.cols == 0 {
        return Err(LoteriaError::Config(format!(
            "{} grid must have at least one row and one column",
            label
        )));
    }

    let w = cell_width(&grid);
    let h = cell_height(&grid);
    if w <= 0.0 || h <= 0.0 {
        return Err(LoteriaError::Config(format!(
            "{} grid cells have no area ({:.1} x {:.1} pt)",
            label, w, h
        )));
    }

    let image_w = w - 2.0 * metrics.image_padding;
    let image_h = h - metrics.caption_height - 2.0 * metrics.image_padding;
    if image_w <= 0.0 || image_h <= 0.0 {
        return Err(LoteriaError::Config(format!(
            "{} caption band and padding leave no room for the image",
            label
        )));
    }

    Ok(())
}
