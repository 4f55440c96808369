//! `iedb-scrape`: extract epitope records from IEDB reference pages into a
//! CSV table.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use iedb_extraction::{HttpFetcher, Report, ScrapeConfig, Scraper};

/// Parse IEDB reference pages and generate a CSV table.
#[derive(Debug, Parser)]
#[command(name = "iedb-scrape", version)]
struct Args {
    /// File with links, one URL per line.
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file.
    #[arg(short, long)]
    output_csv: PathBuf,

    /// Force this organism on every row, overriding the extracted one.
    #[arg(long)]
    organism: Option<String>,

    /// Log file name.
    #[arg(short, long, default_value = "log.txt")]
    log: PathBuf,
}

/// Console shows INFO and up; the log file records everything.
fn init_logging(log_path: &Path) -> Result<()> {
    let log_file = File::create(log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(LevelFilter::INFO))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(log_file))
                .with_filter(LevelFilter::DEBUG),
        )
        .init();

    Ok(())
}

/// Read the link list: one URL per line, each line stripped.
fn read_links(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read link file {}", path.display()))?;
    Ok(text.lines().map(|line| line.trim().to_string()).collect())
}

fn progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.green} [{bar:40.green/dim}] {pos}/{len} {msg}")
            .expect("valid progress template")
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log)?;

    let links = read_links(&args.input)?;
    info!(
        "There are {} links to extract information from ...",
        links.len()
    );

    let fetcher = HttpFetcher::new().context("failed to build HTTP client")?;
    let scraper = Scraper::new(fetcher).with_config(ScrapeConfig::new());

    let bar = progress_bar(links.len() as u64);
    let outcome = scraper
        .run(&links, |done, _total| bar.set_position(done as u64))
        .await;
    bar.finish_and_clear();

    info!("The data has been extracted from all the links.");
    if !outcome.is_success() {
        info!(
            failed = outcome.failed_urls.len(),
            "some links yielded no record; see the log file for details"
        );
    }

    let report = Report::from_records(outcome.records)
        .with_organism_override(args.organism.clone());
    report
        .write_csv(&args.output_csv)
        .with_context(|| format!("failed to write {}", args.output_csv.display()))?;

    info!(
        rows = report.len(),
        output = %args.output_csv.display(),
        "done"
    );
    Ok(())
}
