use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

mod logger;

use logger::StderrLogger;

#[derive(Parser)]
#[command(
    name = "loteria",
    about = "Generate printable Lotería cards and boards from a CSV of images",
    version
)]
struct Cli {
    /// CSV file with columns id,name,filename
    #[arg(long)]
    csv: PathBuf,

    /// Directory holding the images named in the CSV
    #[arg(long)]
    images: PathBuf,

    /// Seed for reproducible boards
    #[arg(long, default_value_t = loteria::constants::DEFAULT_SEED)]
    seed: u64,

    /// Number of boards to generate
    #[arg(long)]
    boards: Option<usize>,

    /// Board title prefix ("Board" gives "Board 1", "Board 2", ...)
    #[arg(long)]
    title: Option<String>,

    /// CSV text encoding
    #[arg(long, default_value = "auto", value_enum)]
    encoding: EncodingArg,

    /// Output PDF for the card sheets
    #[arg(long, default_value = "cards.pdf")]
    out_cards: PathBuf,

    /// Output PDF for the boards
    #[arg(long, default_value = "boards.pdf")]
    out_boards: PathBuf,

    /// JSON file overriding layout measurements
    #[arg(long)]
    layout: Option<PathBuf>,

    /// TrueType font for captions and titles
    #[arg(long)]
    font: Option<PathBuf>,

    /// Show statistics only, don't generate PDFs
    #[arg(long)]
    stats_only: bool,

    /// Detailed progress messages
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum EncodingArg {
    Auto,
    Utf8,
    Cp1252,
    Latin1,
}

impl From<EncodingArg> for loteria::CsvEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Auto => Self::Auto,
            EncodingArg::Utf8 => Self::Utf8,
            EncodingArg::Cp1252 => Self::Cp1252,
            EncodingArg::Latin1 => Self::Latin1,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    StderrLogger::new(level).init()?;

    if !cli.csv.exists() {
        anyhow::bail!("CSV not found: {}", cli.csv.display());
    }
    if !cli.images.is_dir() {
        anyhow::bail!("Image directory not found: {}", cli.images.display());
    }

    let mut layout = match &cli.layout {
        Some(path) => loteria::LayoutOptions::load(path)
            .await
            .with_context(|| format!("Loading layout {}", path.display()))?,
        None => loteria::LayoutOptions::default(),
    };
    if let Some(boards) = cli.boards {
        layout.board_count = boards;
    }
    if let Some(title) = cli.title {
        layout.board_title = title;
    }

    let catalog = loteria::load_catalog(&cli.csv, &cli.images, cli.encoding.into()).await?;

    let stats = loteria::calculate_statistics(catalog.len(), &layout);
    println!("Lotería Statistics:");
    println!("  Catalog items: {}", stats.catalog_items);
    println!(
        "  Card pages: {} ({} per page, {} on the last)",
        stats.card_pages, stats.cells_per_card_page, stats.last_page_cards
    );
    println!(
        "  Board pages: {} ({} cells each)",
        stats.board_pages, stats.cells_per_board
    );

    if cli.stats_only {
        return Ok(());
    }

    let mut options = loteria::RunOptions::new(layout, cli.seed);
    if let Some(path) = &cli.font {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Reading font {}", path.display()))?;
        options.font = Some(bytes);
    }

    let documents =
        loteria::generate_pdfs(&catalog, &options, &cli.out_cards, &cli.out_boards).await?;

    println!(
        "Generated {} card pages → {}",
        documents.card_pages,
        cli.out_cards.display()
    );
    println!(
        "Generated {} boards (seed {}) → {}",
        documents.board_pages,
        cli.seed,
        cli.out_boards.display()
    );

    Ok(())
}
