//! Hilbert gene table generator
//!
//! Prints the Gray code, inverse Gray code and gene tables of every dimension
//! from 1 to the requested one as C array declarations.
//!
//! ```bash
//! # Tables for 1 to 10 dimensions, on stdout
//! hilbert-genes 10
//!
//! # Same thing, as a standalone header
//! hilbert-genes 10 --header N10_H --output N10.h
//!
//! # Log progress
//! hilbert-genes -vv 10 > N10.inc
//! RUST_LOG=hilbert_genes=trace hilbert-genes 4
//! ```
//!
//! Beware that output size grows as 2^N: above 20 dimensions, the generated
//! sources weigh multiple megabytes.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use hilbert_genes::{emit, Config, NumBits, MAX_DIMENSION};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Generate the lookup tables of N-dimensional Hilbert curves as C arrays
#[derive(Debug, Parser)]
#[command(name = "hilbert-genes", version, about)]
struct Cli {
    /// Highest number of dimensions to generate tables for
    #[arg(value_parser = clap::value_parser!(NumBits).range(1..=i64::from(MAX_DIMENSION)))]
    dimension: NumBits,

    /// Write the tables to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Emit a standalone C header with this include guard
    #[arg(long, value_name = "GUARD")]
    header: Option<String>,

    /// Check the consistency of every table set before writing it
    #[arg(long)]
    check: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}
//
impl Cli {
    /// Translate command-line arguments into generator configuration
    fn config(&self) -> hilbert_genes::Result<Config> {
        let config = Config::new(self.dimension)?.with_invariant_checks(self.check);
        match &self.header {
            Some(guard) => config.with_header_guard(guard.as_str()),
            None => Ok(config),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so that stdout only carries generated code
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.config().context("Invalid configuration")?;
    let out: Box<dyn Write> = match &cli.output {
        Some(path) => {
            info!(path = %path.display(), "writing tables to file");
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    emit::generate(&config, out).context("Failed to generate Hilbert tables")?;
    Ok(())
}
