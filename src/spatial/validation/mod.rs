//! Contact classification and layout legality checks

mod contact;
mod geometric;
mod layout;

pub use contact::{classify, classify_with, Classification, Contact, Trigger};
pub use geometric::{GeometricValidator, Region};
pub use layout::{validate, validate_with, LayoutValidator, LayoutVerdict, Violation, LEGAL_MESSAGE};

/// Reasons an outline is not a simple polygon
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineDefect {
    InsufficientVertices { count: usize, minimum: usize },
    NonFinite,
    ZeroArea,
    SelfIntersecting,
}
