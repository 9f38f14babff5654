//! Drawing-surface implementations
//!
//! - `PdfSurface`: serializes pages to PDF through `printpdf`
//! - `RecordingSurface`: keeps draw commands in memory for inspection
//! - `BuiltinMetrics`: Helvetica text measurement shared by both

mod metrics;
mod pdf;
mod recording;

pub use metrics::{BuiltinMetrics, char_width};
pub use pdf::PdfSurface;
pub use recording::{DrawCommand, RecordingSurface};
