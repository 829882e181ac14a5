use clap::Parser;
use std::path::PathBuf;

mod catalog;
mod config;
mod error;
mod matching;

use catalog::library::Catalog;
use config::Config;
use error::MatchupError;
use matching::allocate::{allocate, SkipReason};
use matching::index::{scan_images, CandidateIndex};

/// Assign scanned page images to catalog rows missing an image path
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// JSON config file; the flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing the page images
    #[arg(long)]
    images: Option<PathBuf>,

    /// SQLite catalog database file
    #[arg(long)]
    database: Option<PathBuf>,

    /// Base path joined in front of each stored filename
    #[arg(long)]
    base_path: Option<String>,

    /// Image extension, including the dot
    #[arg(long)]
    ext: Option<String>,

    /// Pages per physical book
    #[arg(long)]
    pages_per_book: Option<u32>,

    /// Compute and print assignments without writing anything
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Resolve the effective config: file (or defaults), then flag overrides
    fn into_config(self) -> Result<(Config, bool), MatchupError> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(images) = self.images {
            config.image_dir = images;
        }
        if let Some(database) = self.database {
            config.db_path = database;
        }
        if let Some(base_path) = self.base_path {
            config.db_image_base_path = base_path;
        }
        if let Some(ext) = self.ext {
            config.image_ext = ext;
        }
        if let Some(pages_per_book) = self.pages_per_book {
            config.pages_per_book = pages_per_book;
        }

        Ok((config, self.dry_run))
    }
}

fn main() -> anyhow::Result<()> {
    let (config, dry_run) = Cli::parse().into_config()?;
    run(&config, dry_run)?;
    Ok(())
}

/// One full pass: scan the folder, build the index, fetch rows,
/// allocate, persist.
fn run(config: &Config, dry_run: bool) -> Result<(), MatchupError> {
    println!("🔍 Scanning folder: {}", config.image_dir.display());
    let names = scan_images(&config.image_dir)?;
    let (index, stats) = CandidateIndex::build(names, &config.image_ext);
    println!(
        "Found images for {} pages ({} malformed filenames skipped)",
        stats.groups, stats.malformed
    );

    let catalog = Catalog::open(&config.db_path)?;
    let labels = catalog.fetch_unassigned()?;
    println!("Found {} rows to process", labels.len());

    let report = allocate(
        &labels,
        &index,
        &config.db_image_base_path,
        config.pages_per_book,
    );

    for skip in &report.skips {
        match skip.reason {
            SkipReason::NoCandidates => println!(
                "No images found for book={}, page={} (global_page={})",
                skip.label.book, skip.label.page, skip.global_page
            ),
            SkipReason::Exhausted => println!(
                "No more images for book={}, page={} (global_page={})",
                skip.label.book, skip.label.page, skip.global_page
            ),
        }
    }

    if dry_run {
        for assignment in &report.assignments {
            println!(
                "would set label {} -> {}",
                assignment.label_id, assignment.image_path
            );
        }
        println!(
            "✅ Dry run: {} rows would be updated ({} without images, {} exhausted)",
            report.assigned(),
            report.skipped(SkipReason::NoCandidates),
            report.skipped(SkipReason::Exhausted)
        );
        return Ok(());
    }

    // Writes apply in emission order, one autocommit UPDATE each, so a
    // failure aborts the run but keeps everything already written.
    let mut updated = 0;
    for assignment in &report.assignments {
        catalog
            .set_image_path(assignment.label_id, &assignment.image_path)
            .map_err(|source| MatchupError::Persist {
                id: assignment.label_id,
                source,
            })?;

        updated += 1;
        if updated % 100 == 0 {
            println!("⏳ Updated {} rows...", updated);
        }
    }

    println!(
        "✅ Successfully updated {} rows ({} without images, {} exhausted)",
        updated,
        report.skipped(SkipReason::NoCandidates),
        report.skipped(SkipReason::Exhausted)
    );

    Ok(())
}
