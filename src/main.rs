//! combination CLI - generate every combination of value sets
//!
//! Reads sets, one per line, from a file or stdin and writes one row per
//! combination to a file or stdout:
//!
//! ```text
//! $ printf 'card: "Heart Red" Tile\nfigure: Jack Queen\n' | combination --quote
//! {card: "Heart Red", figure: "Jack"},
//! {card: "Heart Red", figure: "Queen"},
//! {card: "Tile", figure: "Jack"},
//! {card: "Tile", figure: "Queen"},
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use combination::{FormatOptions, Style};
use log::LevelFilter;

const STDIO: &str = "-";

/// Generate combinations from a list of grouping data (sets).
///
/// A set follows the syntax `name: value value ...`. The value list is much
/// like a list of arguments in a shell: it is space-separated, and strings
/// that are not safe must be double-quoted.
#[derive(Parser, Debug)]
#[command(name = "combination")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read sets from this file, or stdin if -
    #[arg(long, default_value = STDIO)]
    sets: PathBuf,

    /// Write combinations to this file, or stdout if -
    #[arg(short, long, default_value = STDIO)]
    output: PathBuf,

    /// Write one JSON object per combination
    #[arg(long)]
    json: bool,

    /// Quote values as string literals
    #[arg(short, long)]
    quote: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn init_logging(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let sets = if is_stdio(&cli.sets) {
        combination::parse_sets(io::stdin().lock()).context("failed to read sets from stdin")?
    } else {
        let file = File::open(&cli.sets)
            .with_context(|| format!("failed to open {}", cli.sets.display()))?;
        combination::parse_sets(BufReader::new(file))
            .with_context(|| format!("failed to read sets from {}", cli.sets.display()))?
    };

    let combinations = combination::generate(sets)?;

    let options = FormatOptions::new()
        .with_quoted_values(cli.quote)
        .with_style(if cli.json { Style::JsonLines } else { Style::Literal });

    // Output is opened only once generation succeeded.
    let writer: Box<dyn Write> = if is_stdio(&cli.output) {
        Box::new(io::stdout().lock())
    } else {
        let file = File::create(&cli.output)
            .with_context(|| format!("failed to create {}", cli.output.display()))?;
        Box::new(file)
    };

    combination::to_writer_with_options(BufWriter::new(writer), &combinations, &options)
        .context("failed to write combinations")?;
    log::info!("wrote {} combinations", combinations.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_maps_to_log_level() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Debug);
        assert_eq!(log_level(2), LevelFilter::Trace);
        assert_eq!(log_level(5), LevelFilter::Trace);
    }

    #[test]
    fn test_cli_defaults_to_stdio() {
        let cli = Cli::parse_from(["combination"]);
        assert!(is_stdio(&cli.sets));
        assert!(is_stdio(&cli.output));
        assert!(!cli.json && !cli.quote);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "combination",
            "--sets",
            "in.txt",
            "-o",
            "out.txt",
            "-q",
            "-vv",
        ]);
        assert_eq!(cli.sets, PathBuf::from("in.txt"));
        assert!(!is_stdio(&cli.output));
        assert!(cli.quote);
        assert_eq!(cli.verbose, 2);
    }
}
