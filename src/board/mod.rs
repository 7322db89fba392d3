//! One player's board: seven placements plus a cached legality verdict

mod arrangement;
mod equality;

pub use arrangement::{default_placement, Arrangement, Verdict};
pub use equality::{layouts_equal, layouts_equal_with};
