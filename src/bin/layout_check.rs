//! Check saved arrangements
//!
//! Usage:
//!   cargo run --bin layout_check -- boards/*.json
//!   cargo run --bin layout_check -- --default > fresh.json
//!   cargo run --bin layout_check -- --compare hidden.json guess.json

use clap::Parser;
use orapa::board::{layouts_equal, Arrangement};
use orapa::core::config::{set_config, LayoutConfig};
use orapa::core::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Validate Orapa arrangement files
#[derive(Parser, Debug)]
#[command(name = "layout_check")]
#[command(about = "Check saved Orapa arrangements for overlaps and edge contacts")]
struct Args {
    /// Arrangement JSON files
    files: Vec<PathBuf>,

    /// Print the starting arrangement as JSON and exit
    #[arg(long)]
    default: bool,

    /// Compare exactly two files instead of checking them
    #[arg(long)]
    compare: bool,

    /// TOML file with layout tolerances
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "text")]
    format: String,
}

/// JSON output structure
#[derive(Serialize)]
struct FileReport {
    file: String,
    legal: bool,
    message: String,
}

fn load(path: &Path) -> Result<Arrangement> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn run(args: &Args) -> Result<bool> {
    if let Some(path) = &args.config {
        if set_config(LayoutConfig::load(path)?).is_err() {
            tracing::warn!("Layout config already initialised; ignoring {}", path.display());
        }
    }

    if args.default {
        println!("{}", serde_json::to_string_pretty(&Arrangement::new())?);
        return Ok(true);
    }

    if args.compare {
        let [a, b] = args.files.as_slice() else {
            eprintln!("--compare needs exactly two files");
            return Ok(false);
        };
        let equal = layouts_equal(Some(&load(a)?), Some(&load(b)?));
        println!("{}", if equal { "match" } else { "no match" });
        return Ok(equal);
    }

    let mut reports = Vec::new();
    for path in &args.files {
        let mut arrangement = load(path)?;
        let verdict = arrangement.check();
        reports.push(FileReport {
            file: path.display().to_string(),
            legal: verdict.legal,
            message: verdict.message,
        });
    }

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            let mark = if report.legal { "OK" } else { "ILLEGAL" };
            println!("{:<8} {}: {}", mark, report.file, report.message);
        }
    }
    Ok(reports.iter().all(|r| r.legal))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orapa=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
