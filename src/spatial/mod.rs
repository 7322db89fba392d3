//! Piece geometry: templates, placement transforms, clamping and contact checks

pub mod clamp;
pub mod placement;
pub mod shapes;
pub mod validation;

pub use clamp::{clamp, clamp_placement};
pub use placement::{vertices, Orientation, Placement, Rotation};
pub use shapes::{ShapeId, ShapeKind};
