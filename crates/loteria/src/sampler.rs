//! Reproducible board sampling
//!
//! A single ChaCha8 generator is seeded once per run and advanced across all
//! boards. Each board draws its cells without replacement from the whole
//! catalog, so different boards may share items. The catalog is only read.

use crate::types::{Catalog, LoteriaError, Result, Selection};
use rand::SeedableRng;
use rand::seq::index;
use rand_chacha::ChaCha8Rng;

pub struct BoardSampler {
    rng: ChaCha8Rng,
}

impl BoardSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw `size` distinct catalog indices, in cell order.
    pub fn draw(&mut self, catalog_len: usize, size: usize) -> Result<Vec<usize>> {
        if catalog_len < size {
            return Err(LoteriaError::CatalogTooSmall {
                required: size,
                found: catalog_len,
            });
        }
        Ok(index::sample(&mut self.rng, catalog_len, size).into_vec())
    }
}

/// Fail fast if a board of `board_size` cells cannot be filled
pub fn check_catalog_size(catalog: &Catalog, board_size: usize) -> Result<()> {
    if catalog.len() < board_size {
        return Err(LoteriaError::CatalogTooSmall {
            required: board_size,
            found: catalog.len(),
        });
    }
    Ok(())
}

/// `count` boards of `board_size` items each, reproducible from `seed`.
pub fn sample_boards(
    catalog: &Catalog,
    seed: u64,
    count: usize,
    board_size: usize,
) -> Result<Vec<Selection<'_>>> {
    check_catalog_size(catalog, board_size)?;

    let mut sampler = BoardSampler::new(seed);
    let mut boards = Vec::with_capacity(count);

    for board_index in 0..count {
        let items = sampler
            .draw(catalog.len(), board_size)?
            .into_iter()
            .map(|i| &catalog.items()[i])
            .collect();
        boards.push(Selection { board_index, items });
    }

    Ok(boards)
}
