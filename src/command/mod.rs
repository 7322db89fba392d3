//! Text commands for driving a session
//!
//! Input line -> Command::parse -> CommandExecutor::execute -> Outcome

pub mod executor;

pub use executor::{CommandExecutor, Outcome};

use crate::core::error::{OrapaError, Result};
use crate::spatial::placement::Rotation;
use crate::spatial::shapes::ShapeId;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Move { shape: ShapeId, dx: f64, dy: f64 },
    Rotate { shape: ShapeId, rotation: Rotation },
    Flip { shape: ShapeId },
    Check,
    Show,
    Switch,
    Commit,
    Match,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  up|down|left|right <shape>   - Move a piece one cell
  move <shape> <dx> <dy>       - Move a piece by any offset
  rotl|rotr <shape>            - Rotate counter-clockwise / clockwise
  flip <shape>                 - Mirror the red parallelogram
  check / c                    - Check the layout of the current board
  show / s                     - Print piece outlines
  switch                       - Toggle between your board and the opponent's
  commit                       - Lock the current board if it is legal
  match                        - Compare both committed boards
  reset                        - Start the current board over
  quit / q                     - Exit
Shapes: y, w, b, s, r, t, lb";

impl Command {
    pub fn parse(input: &str) -> Result<Command> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let unknown = || OrapaError::UnknownCommand(input.trim().to_string());
        let (&verb, args) = words.split_first().ok_or_else(unknown)?;

        let shape = |i: usize| -> Result<ShapeId> { args.get(i).ok_or_else(unknown)?.parse() };
        let number = |i: usize| -> Result<f64> {
            args.get(i)
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .ok_or_else(unknown)
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "up" => Command::Move { shape: shape(0)?, dx: 0.0, dy: 1.0 },
            "down" => Command::Move { shape: shape(0)?, dx: 0.0, dy: -1.0 },
            "left" => Command::Move { shape: shape(0)?, dx: -1.0, dy: 0.0 },
            "right" => Command::Move { shape: shape(0)?, dx: 1.0, dy: 0.0 },
            "move" | "m" => Command::Move {
                shape: shape(0)?,
                dx: number(1)?,
                dy: number(2)?,
            },
            "rotl" => Command::Rotate {
                shape: shape(0)?,
                rotation: Rotation::CounterClockwise,
            },
            "rotr" => Command::Rotate {
                shape: shape(0)?,
                rotation: Rotation::Clockwise,
            },
            "flip" => Command::Flip { shape: shape(0)? },
            "check" | "c" => Command::Check,
            "show" | "s" => Command::Show,
            "switch" => Command::Switch,
            "commit" => Command::Commit,
            "match" => Command::Match,
            "reset" => Command::Reset,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" => Command::Quit,
            _ => return Err(unknown()),
        };
        Ok(command)
    }
}
