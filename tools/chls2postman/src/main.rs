//! CLI tool for converting Charles Proxy session exports to Postman collections.
//!
//! # Usage
//!
//! ```bash
//! # Convert a session export to a Postman collection
//! chls2postman --input capture.chlsj --output collection.json --name "My API"
//!
//! # Skip entries that lack required fields instead of aborting
//! chls2postman -i capture.chlsj -o collection.json -n "My API" --skip-malformed
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use converter::prelude::*;
use log::warn;

/// Convert a Charles Proxy session export (*.chlsj) to a Postman collection.
///
/// Reads the whole session file, converts every captured transaction into
/// a collection item, and writes the collection as a single JSON document.
/// Nothing is written on failure.
#[derive(Parser, Debug)]
#[command(name = "chls2postman")]
#[command(version, about)]
struct Args {
    /// Input file in the *.chlsj format.
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for the Postman collection.
    #[arg(short, long)]
    output: PathBuf,

    /// Name of the target Postman collection.
    #[arg(short, long)]
    name: String,

    /// Skip session entries that lack required fields instead of aborting.
    #[arg(long)]
    skip_malformed: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let session = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let on_malformed = if args.skip_malformed { Malformed::Skip } else { Malformed::Abort };
    let source = args.input.display().to_string();
    let conversion = convert_session(&session, &args.name, &source, on_malformed)
        .with_context(|| format!("Failed to convert session: {source}"))?;

    for index in &conversion.skipped {
        warn!("skipped malformed session entry at index {index}");
    }

    // Serialize fully before touching the output path, so a failed run
    // never leaves a truncated collection behind
    let document =
        serde_json::to_string(&conversion.collection).context("Failed to serialize collection")?;
    fs::write(&args.output, document)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))?;

    // Report result to stderr (so it doesn't interfere with stdout usage)
    eprintln!("Converted {} request(s)", conversion.converted());
    if !conversion.skipped.is_empty() {
        eprintln!("Skipped {} malformed entry(s)", conversion.skipped.len());
    }

    Ok(())
}
