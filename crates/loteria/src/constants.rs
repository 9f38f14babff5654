//! Shared constants for card and board composition
//!
//! All lengths are in PDF points unless the name says otherwise.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert inches to points
#[inline]
pub fn inch(value: f32) -> f32 {
    value * POINTS_PER_INCH
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Page
// =============================================================================

/// Page width in points (US Letter portrait: 8.5" × 11")
pub const PAGE_WIDTH_PT: f32 = 612.0;

/// Page height in points (US Letter portrait)
pub const PAGE_HEIGHT_PT: f32 = 792.0;

/// Traditional deck size; other sizes are accepted with a warning
pub const EXPECTED_DECK_SIZE: usize = 54;

// =============================================================================
// Background
// =============================================================================

pub const PARCHMENT_FILL: (f32, f32, f32) = (0.98, 0.95, 0.88);
pub const PARCHMENT_BORDER: (f32, f32, f32) = (0.5, 0.35, 0.15);
pub const PARCHMENT_BORDER_WIDTH: f32 = 3.0;
pub const PARCHMENT_BORDER_RADIUS: f32 = 12.0;

// =============================================================================
// Printer's Marks
// =============================================================================

/// Line width for cut lines (points)
pub const CUT_LINE_WIDTH: f32 = 0.5;

/// Gray level for cut lines and crop marks
pub const CUT_LINE_GRAY: f32 = 0.5;

/// Line width for card frames
pub const CARD_FRAME_WIDTH: f32 = 1.4;

/// Line width for board cell frames
pub const BOARD_CELL_FRAME_WIDTH: f32 = 1.0;

/// Line width for the outer board frame
pub const BOARD_FRAME_WIDTH: f32 = 2.0;

/// Corner radius of the outer board frame
pub const BOARD_FRAME_RADIUS: f32 = 12.0;

/// CSS darkgoldenrod
pub const DARK_GOLDENROD: (f32, f32, f32) = (0.722, 0.525, 0.043);

// =============================================================================
// Fonts
// =============================================================================

pub const CAPTION_FONT_SIZE: f32 = 10.5;
pub const BOARD_TITLE_FONT_SIZE: f32 = 22.0;

/// Text-fit never trims a caption below this many characters
pub const MIN_CAPTION_CHARS: usize = 3;

// =============================================================================
// Boards
// =============================================================================

pub const DEFAULT_BOARD_COUNT: usize = 20;
pub const DEFAULT_SEED: u64 = 42;
