//! Layout calculation modules
//!
//! Pure geometry: grid cells, cut positions and the caption/image split
//! inside a cell. Nothing here draws.

mod cell;
mod grid;
mod types;

pub use cell::*;
pub use grid::*;
pub use types::*;
