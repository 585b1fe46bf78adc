//! Command-line interface for the harvester.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{validate_date, HarvestConfig};
use crate::error::{HarvestError, Result};
use crate::fetch::PageFetcher;
use crate::ingest::run_harvest;

/// Default output path for harvested records.
const DEFAULT_OUTPUT: &str = "data/productions.jsonl";

/// Podium Harvester - Ingest theater production metadata from the TIN Adlib archive.
#[derive(Parser)]
#[command(name = "podium-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Harvest productions starting after a date and write them as JSONL.
    Harvest {
        /// Lower bound (exclusive) for the start date, YYYY-MM-DD
        #[arg(short, long)]
        since: String,

        /// Optional upper bound (inclusive) for the start date, YYYY-MM-DD
        #[arg(short, long)]
        until: Option<String>,

        /// Output JSONL file (default: data/productions.jsonl)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Records requested per page
        #[arg(long)]
        page_size: Option<u32>,

        /// Seconds to wait between page requests
        #[arg(long)]
        delay_secs: Option<u64>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Harvest {
            since,
            until,
            output,
            page_size,
            delay_secs,
        } => harvest_command(
            &since,
            until.as_deref(),
            output.as_deref(),
            page_size,
            delay_secs,
        ),
    }
}

/// Execute the harvest command.
fn harvest_command(
    since: &str,
    until: Option<&str>,
    output: Option<&Path>,
    page_size: Option<u32>,
    delay_secs: Option<u64>,
) -> Result<()> {
    // Validate inputs before making HTTP requests
    validate_date(since)?;
    if let Some(upper) = until {
        validate_date(upper)?;
    }
    if page_size == Some(0) {
        return Err(HarvestError::InvalidPageSize);
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    ensure_writable(&output)?;

    let mut config = HarvestConfig::default();
    if let Some(size) = page_size {
        config.page_size = size;
    }
    if let Some(secs) = delay_secs {
        config.request_delay = Duration::from_secs(secs);
    }

    println!(
        "{} productions after {}{}",
        style("Harvesting").bold(),
        style(since).green(),
        until
            .map(|u| format!(" through {}", style(u).green()))
            .unwrap_or_default()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Requesting first page...");

    let fetcher = PageFetcher::over_http(config)?;
    let mut sink = BufWriter::new(File::create(&output)?);

    let mut harvested = 0usize;
    let records = match run_harvest(&fetcher, since, until, &mut sink, |page_records| {
        harvested += page_records;
        pb.set_message(format!("Harvested {harvested} records..."));
    }) {
        Ok(records) => records,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Records: {}", style(records.len()).green());
    let missing_ids = records.iter().filter(|r| r.record_id.is_empty()).count();
    if missing_ids > 0 {
        println!(
            "  Without record id: {}",
            style(missing_ids).yellow().bold()
        );
    }
    println!();
    println!(
        "{} {}",
        style("Saved to:").green().bold(),
        output.display()
    );

    Ok(())
}

/// Validate that the output location can be written before any network
/// traffic happens.
fn ensure_writable(output: &Path) -> Result<()> {
    let Some(parent) = output.parent() else {
        return Ok(());
    };
    if parent.as_os_str().is_empty() {
        return Ok(());
    }

    if !parent.exists() {
        // The default data/ directory is created on demand; an explicit
        // directory that does not exist is the user's mistake.
        if output == Path::new(DEFAULT_OUTPUT) {
            std::fs::create_dir_all(parent)?;
            return Ok(());
        }
        return Err(HarvestError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Output directory does not exist: {}", parent.display()),
        )));
    }
    if !parent.is_dir() {
        return Err(HarvestError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Output path is not a directory: {}", parent.display()),
        )));
    }
    Ok(())
}
