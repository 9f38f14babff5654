use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoteriaError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Missing CSV columns: {}. Expected: id,name,filename", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },
    #[error("Image not found: {}", .0.display())]
    MissingImage(PathBuf),
    #[error("Duplicate catalog id: {0}")]
    DuplicateId(i64),
    #[error("Catalog has {found} items but a board needs {required}")]
    CatalogTooSmall { required: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, LoteriaError>;

/// One named image of the deck.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub image_path: PathBuf,
}

impl CatalogItem {
    pub fn new(id: i64, name: impl Into<String>, image_path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            name: name.into(),
            image_path: image_path.into(),
        }
    }
}

/// The full deck, sorted ascending by id.
///
/// Built once per run and never mutated afterwards; composers and the
/// sampler only ever see it through shared references.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn new(mut items: Vec<CatalogItem>) -> Result<Self> {
        items.sort_by_key(|item| item.id);

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(LoteriaError::DuplicateId(item.id));
            }
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// The items drawn for one board, in cell order (row-major).
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// Zero-based board index
    pub board_index: usize,
    pub items: Vec<&'a CatalogItem>,
}

impl Selection<'_> {
    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.id).collect()
    }
}

/// Summary of what a run will produce
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentStatistics {
    pub catalog_items: usize,
    pub cells_per_card_page: usize,
    pub card_pages: usize,
    /// Occupied cells on the final card page
    pub last_page_cards: usize,
    pub board_pages: usize,
    pub cells_per_board: usize,
}
