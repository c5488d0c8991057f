//! Reads three IPv4-like literals from stdin and prints them, the first
//! verbatim and the other two with a validity annotation.

mod data;
mod display;
mod domain;

use anyhow::{Context, Result};
use clap::Parser;
use data::TokenReader;
use display::OutputFormat;
use domain::AddressEntry;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Number of tokens consumed from input
const ADDRESS_COUNT: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "dotquad", version, about = "Echo and validate IPv4 dotted-quad literals")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Log filter directive, written to stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Builds the log filter, falling back to `warn` on a bad directive
fn log_filter(level: &str) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("warn"), Some(e.to_string())),
    }
}

fn init_tracing(level: &str) {
    let (filter, rejected) = log_filter(level);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    if let Some(reason) = rejected {
        warn!(directive = level, %reason, "invalid --log-level, using warn");
    }
}

/// First token is echoed raw, the rest are validated
fn build_entries(tokens: Vec<String>) -> Vec<AddressEntry> {
    tokens
        .into_iter()
        .enumerate()
        .map(|(i, token)| {
            if i == 0 {
                AddressEntry::raw(token)
            } else {
                AddressEntry::validated(token)
            }
        })
        .collect()
}

fn run<R: BufRead, W: Write>(input: R, mut output: W, format: OutputFormat) -> Result<()> {
    let tokens = TokenReader::new(input).take(ADDRESS_COUNT)?;
    debug!(?tokens, "read address tokens");

    for entry in build_entries(tokens) {
        if let AddressEntry::Validated(validated) = &entry {
            info!(
                address = validated.literal().as_str(),
                valid = validated.is_valid(),
                parsed = ?validated.to_ipv4(),
                "validated address"
            );
        }
        writeln!(output, "{}", format.render(&entry)?).context("Failed to write output")?;
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), cli.format)
}
