//! Layout data types
//!
//! Coordinates follow PDF conventions: origin at the bottom-left of the page,
//! y growing upward. Grid rows are still counted from the top.

/// Axis-aligned rectangle; `(x, y)` is the lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Shrink by `amount` on every side
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// True if `other` lies entirely inside `self` (edges may touch)
    pub fn contains(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        other.left() >= self.left() - EPS
            && other.right() <= self.right() + EPS
            && other.bottom() >= self.bottom() - EPS
            && other.top() <= self.top() + EPS
    }

    /// True if the interiors of the two rectangles overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        const EPS: f32 = 1e-3;
        self.left() < other.right() - EPS
            && other.left() < self.right() - EPS
            && self.bottom() < other.top() - EPS
            && other.bottom() < self.top() - EPS
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major position of the `index`-th cell
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new(index / cols, index % cols)
    }
}

/// An R×C grid of equal cells with uniform gaps, tiling `area`.
///
/// Plain configuration value, passed explicitly to every layout call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    /// Gap between adjacent cells in points
    pub gap: f32,
    /// Area the grid fills exactly
    pub area: Rect,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize, gap: f32, area: Rect) -> Self {
        Self {
            rows,
            cols,
            gap,
            area,
        }
    }

    /// Grid filling a page minus a uniform margin
    pub fn for_page(
        rows: usize,
        cols: usize,
        gap: f32,
        page_width: f32,
        page_height: f32,
        margin: f32,
    ) -> Self {
        let area = Rect::new(
            margin,
            margin,
            page_width - 2.0 * margin,
            page_height - 2.0 * margin,
        );
        Self::new(rows, cols, gap, area)
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }
}
