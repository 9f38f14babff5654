//! Catalog loading from a CSV file with `id,name,filename` columns

use crate::constants::EXPECTED_DECK_SIZE;
use crate::types::{Catalog, CatalogItem, LoteriaError, Result};
use std::path::{Path, PathBuf};

const REQUIRED_COLUMNS: [&str; 3] = ["id", "name", "filename"];
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Text encoding of the CSV file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvEncoding {
    /// UTF-8 (with or without BOM), then Windows-1252, then Latin-1
    #[default]
    Auto,
    Utf8,
    /// Windows-1252, the usual encoding of spreadsheets saved on Windows
    Cp1252,
    Latin1,
}

/// Windows-1252 characters for bytes 0x80..=0x9F; `None` where the code page
/// leaves the byte undefined
const CP1252_HIGH: [Option<char>; 32] = [
    Some('\u{20AC}'), None, Some('\u{201A}'), Some('\u{0192}'),
    Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
    Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
    Some('\u{0152}'), None, Some('\u{017D}'), None,
    None, Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
    Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
    Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
    Some('\u{0153}'), None, Some('\u{017E}'), Some('\u{0178}'),
];

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Decode Windows-1252, failing on the five undefined bytes
fn cp1252(bytes: &[u8]) -> Option<String> {
    bytes
        .iter()
        .map(|&b| match b {
            0x80..=0x9F => CP1252_HIGH[(b - 0x80) as usize],
            _ => Some(b as char),
        })
        .collect()
}

pub fn decode_csv(bytes: &[u8], encoding: CsvEncoding) -> Result<String> {
    match encoding {
        CsvEncoding::Utf8 => String::from_utf8(strip_bom(bytes).to_vec())
            .map_err(|e| LoteriaError::Config(format!("CSV is not valid UTF-8: {}", e))),
        CsvEncoding::Cp1252 => cp1252(bytes).ok_or_else(|| {
            LoteriaError::Config("CSV contains bytes undefined in Windows-1252".to_string())
        }),
        CsvEncoding::Latin1 => Ok(latin1(bytes)),
        CsvEncoding::Auto => {
            if let Ok(text) = std::str::from_utf8(strip_bom(bytes)) {
                log::info!("CSV read as UTF-8");
                return Ok(text.to_string());
            }
            if let Some(text) = cp1252(bytes) {
                log::info!("CSV is not UTF-8, read as Windows-1252");
                return Ok(text);
            }
            log::info!("CSV is neither UTF-8 nor Windows-1252, read as Latin-1");
            Ok(latin1(bytes))
        }
    }
}

/// Parse CSV text into a catalog, resolving image names against `images_dir`.
///
/// Every referenced image must exist as a file.
pub fn parse_catalog(contents: &str, images_dir: &Path) -> Result<Catalog> {
    let mut reader = csv::Reader::from_reader(contents.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);

    let positions: Vec<Option<usize>> = REQUIRED_COLUMNS.iter().map(|&name| column(name)).collect();
    let (id_col, name_col, file_col) = match positions[..] {
        [Some(i), Some(n), Some(f)] => (i, n, f),
        _ => {
            let missing = REQUIRED_COLUMNS
                .iter()
                .zip(&positions)
                .filter(|(_, pos)| pos.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(LoteriaError::MissingColumns(missing));
        }
    };

    let mut items = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let id = field(id_col)
            .parse::<i64>()
            .map_err(|e| LoteriaError::InvalidRecord {
                line,
                message: format!("id '{}' is not an integer: {}", field(id_col), e),
            })?;

        let image_path: PathBuf = images_dir.join(field(file_col));
        if !image_path.is_file() {
            return Err(LoteriaError::MissingImage(image_path));
        }

        items.push(CatalogItem::new(id, field(name_col), image_path));
    }

    if items.len() != EXPECTED_DECK_SIZE {
        log::warn!(
            "Expected {} rows, found {}",
            EXPECTED_DECK_SIZE,
            items.len()
        );
    }

    let catalog = Catalog::new(items)?;
    log::info!("Catalog and images OK ({} items)", catalog.len());
    Ok(catalog)
}

/// Read, decode and validate a catalog CSV.
pub async fn load_catalog(
    csv_path: impl AsRef<Path>,
    images_dir: impl AsRef<Path>,
    encoding: CsvEncoding,
) -> Result<Catalog> {
    let csv_path = csv_path.as_ref().to_owned();
    let images_dir = images_dir.as_ref().to_owned();

    log::info!("Reading CSV: {}", csv_path.display());
    let bytes = tokio::fs::read(&csv_path).await?;

    let catalog = tokio::task::spawn_blocking(move || {
        let contents = decode_csv(&bytes, encoding)?;
        parse_catalog(&contents, &images_dir)
    })
    .await??;

    Ok(catalog)
}
