//! Orapa - piece layouts on a bounded grid with exact contact checks

pub mod board;
pub mod command;
pub mod core;
pub mod room;
pub mod spatial;
