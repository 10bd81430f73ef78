//! Marina billing shell: the interactive front end over the core library.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use marina::limits::LEGACY_CAPACITY;
use marina::{DecodeOptions, Fleet};

mod shell;

/// Interactive record management for the marina: boats, locations, and
/// outstanding balances, persisted to a comma-delimited data file.
#[derive(Debug, Parser)]
#[command(name = "marina", version)]
struct Cli {
    /// Path to the boat data file (created on exit if missing)
    file: PathBuf,

    /// Maximum number of boats kept in the fleet
    #[arg(long, default_value_t = LEGACY_CAPACITY)]
    capacity: usize,

    /// Accept legacy data quirks: unknown location kinds become slips,
    /// unparseable slip/storage numbers become 0, "trailor" is accepted
    #[arg(long)]
    legacy: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // Usage errors (e.g. a missing data-file path) exit with 1.
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    if let Err(error) = run(cli) {
        eprintln!("marina error: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing(cli.quiet, cli.verbose)?;

    let options = if cli.legacy {
        DecodeOptions::legacy()
    } else {
        DecodeOptions::strict()
    };

    let fleet = Fleet::load_path(&cli.file, Some(cli.capacity), &options)
        .with_context(|| format!("failed to read data file {}", cli.file.display()))?;
    tracing::debug!(boats = fleet.len(), file = %cli.file.display(), "fleet loaded");

    let mut shell = shell::Shell::new(fleet, cli.file, options);
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell.run(stdin.lock(), stdout.lock())?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MARINA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
