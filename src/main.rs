//! Orapa - Entry Point
//!
//! Opens (or creates) a room and runs a line-oriented loop for moving
//! pieces, checking layouts and committing boards.

use clap::Parser;
use orapa::board::Arrangement;
use orapa::command::{Command, CommandExecutor, Outcome, HELP};
use orapa::core::config::{set_config, LayoutConfig};
use orapa::core::error::Result;
use orapa::room::{BoardSide, RoomStore, Session};

use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Arrange the seven Orapa pieces and check the layout
#[derive(Parser, Debug)]
#[command(name = "orapa")]
struct Args {
    /// Room code shared with the other player
    #[arg(long, default_value = "local")]
    room: String,

    /// TOML file with layout tolerances
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("orapa=info")),
        )
        .init();

    let args = Args::parse();

    if let Some(path) = &args.config {
        let config = LayoutConfig::load(path)?;
        if set_config(config).is_err() {
            tracing::warn!("Layout config already initialised; ignoring {}", path.display());
        }
    }

    let store = RoomStore::new();
    let mut session = Session::new(store.join(&args.room)?);
    tracing::info!("Orapa starting in room {}", session.room().code());

    println!("\n=== ORAPA ===");
    println!("Room: {}", session.room().code());
    println!();
    println!("{}", HELP);
    println!();

    loop {
        print!("[{}] > ", session.side());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let command = match Command::parse(input) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match CommandExecutor::execute(&mut session, &command) {
            Ok(Outcome::Quit) => break,
            Ok(outcome) => display_outcome(&outcome),
            Err(e) => println!("{}", e),
        }
    }

    println!("\nGoodbye!");
    Ok(())
}

fn display_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Changed(shape) => println!("{} updated.", shape),
        Outcome::Unsupported(shape) => println!("{} cannot do that.", shape),
        Outcome::Verdict(verdict) => {
            let mark = if verdict.legal { "OK" } else { "X" };
            println!("[{}] {}", mark, verdict.message);
        }
        Outcome::Board {
            side,
            arrangement,
            locked,
        } => display_board(*side, arrangement, *locked),
        Outcome::Switched(side) => println!("Now showing: {}", side),
        Outcome::Committed(side) => println!("{} committed and locked.", side),
        Outcome::Match(true) => println!("The guess matches the hidden layout!"),
        Outcome::Match(false) => println!("No match (both boards must be committed and identical)."),
        Outcome::Reset(side) => println!("{} reset.", side),
        Outcome::Help => println!("{}", HELP),
        Outcome::Quit => {}
    }
}

fn display_board(side: BoardSide, arrangement: &Arrangement, locked: bool) {
    println!();
    println!("--- {}{} ---", side, if locked { " (locked)" } else { "" });
    for (id, placement) in arrangement.placements() {
        let outline: Vec<String> = arrangement
            .vertices(id)
            .iter()
            .map(|p| format!("({:.2}, {:.2})", p.x, p.y))
            .collect();
        println!(
            "  {:<3} {:<22} anchor=({:.2}, {:.2}) rot={}{}  {}",
            id.key(),
            id.name(),
            placement.anchor.x,
            placement.anchor.y,
            placement.orientation.quarter_turns(),
            if placement.mirrored { " mirrored" } else { "" },
            outline.join(" ")
        );
    }
    if !arrangement.message().is_empty() {
        println!("  Last check: {}", arrangement.message());
    }
    println!();
}
