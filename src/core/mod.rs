pub mod config;
pub mod error;
pub mod types;

pub use config::{config, set_config, LayoutConfig};
pub use error::{OrapaError, Result};
pub use types::{Bounds, Point2, COLS, ROWS};
