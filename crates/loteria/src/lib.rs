pub mod compose;
pub mod constants;
mod csv;
pub mod document;
pub mod fit;
pub mod layout;
pub mod marks;
mod options;
pub mod render;
pub mod sampler;
mod stats;
pub mod surface;
pub mod text;
mod types;

pub use crate::csv::{CsvEncoding, decode_csv, load_catalog, parse_catalog};
pub use document::{
    GeneratedDocuments, RunOptions, generate_documents, generate_pdfs, render_board_document,
    render_card_document,
};
pub use options::*;
pub use sampler::{BoardSampler, sample_boards};
pub use stats::calculate_statistics;
pub use types::*;
