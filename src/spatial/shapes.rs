//! The seven pieces and their base outlines
//!
//! Every outline is a constant table in a canonical frame near the origin.
//! All placed geometry is generated from these tables.

use crate::core::types::Point2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::OrapaError;

/// Scale applied to the unit isosceles triangle of the transparent piece
pub const TRANSPARENT_SCALE: f64 = 0.9;

const SMALL_RIGHT_TRIANGLE: [Point2; 3] = [
    Point2::new(-1.0, -1.0),
    Point2::new(1.0, -1.0),
    Point2::new(-1.0, 1.0),
];

const MEDIUM_ISO_TRIANGLE: [Point2; 3] = [
    Point2::new(-2.0, 0.0),
    Point2::new(2.0, 0.0),
    Point2::new(0.0, 2.0),
];

const RHOMBUS: [Point2; 4] = [
    Point2::new(-1.0, 0.0),
    Point2::new(0.0, -1.0),
    Point2::new(1.0, 0.0),
    Point2::new(0.0, 1.0),
];

const PARALLELOGRAM: [Point2; 4] = [
    Point2::new(0.0, 0.0),
    Point2::new(2.0, 0.0),
    Point2::new(3.0, 1.0),
    Point2::new(1.0, 1.0),
];

const SCALED_ISO_TRIANGLE: [Point2; 3] = [
    Point2::new(-TRANSPARENT_SCALE, 0.0),
    Point2::new(TRANSPARENT_SCALE, 0.0),
    Point2::new(0.0, TRANSPARENT_SCALE),
];

const UNIT_SQUARE: [Point2; 4] = [
    Point2::new(0.0, 0.0),
    Point2::new(1.0, 0.0),
    Point2::new(1.0, 1.0),
    Point2::new(0.0, 1.0),
];

/// Geometric kind of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    SmallRightTriangle,
    MediumIsoTriangle,
    Rhombus,
    Parallelogram,
    ScaledIsoTriangle,
    UnitSquare,
}

impl ShapeKind {
    /// Base outline in the canonical frame
    pub fn template(self) -> &'static [Point2] {
        match self {
            ShapeKind::SmallRightTriangle => &SMALL_RIGHT_TRIANGLE,
            ShapeKind::MediumIsoTriangle => &MEDIUM_ISO_TRIANGLE,
            ShapeKind::Rhombus => &RHOMBUS,
            ShapeKind::Parallelogram => &PARALLELOGRAM,
            ShapeKind::ScaledIsoTriangle => &SCALED_ISO_TRIANGLE,
            ShapeKind::UnitSquare => &UNIT_SQUARE,
        }
    }

    /// The unit square only translates
    pub fn supports_rotation(self) -> bool {
        !matches!(self, ShapeKind::UnitSquare)
    }

    pub fn supports_mirror(self) -> bool {
        matches!(self, ShapeKind::Parallelogram)
    }
}

/// One of the seven piece instances on a board
///
/// The white and blue triangles share a kind but are placed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeId {
    Yellow,
    White,
    Blue,
    Rhombus,
    Red,
    Transparent,
    LightBlue,
}

impl ShapeId {
    /// All pieces in board order. Validation iterates pairs in this order.
    pub const ALL: [ShapeId; 7] = [
        ShapeId::Yellow,
        ShapeId::White,
        ShapeId::Blue,
        ShapeId::Rhombus,
        ShapeId::Red,
        ShapeId::Transparent,
        ShapeId::LightBlue,
    ];

    pub fn kind(self) -> ShapeKind {
        match self {
            ShapeId::Yellow => ShapeKind::SmallRightTriangle,
            ShapeId::White | ShapeId::Blue => ShapeKind::MediumIsoTriangle,
            ShapeId::Rhombus => ShapeKind::Rhombus,
            ShapeId::Red => ShapeKind::Parallelogram,
            ShapeId::Transparent => ShapeKind::ScaledIsoTriangle,
            ShapeId::LightBlue => ShapeKind::UnitSquare,
        }
    }

    /// Position in [`ShapeId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeId::Yellow => "Yellow triangle",
            ShapeId::White => "White triangle",
            ShapeId::Blue => "Blue triangle",
            ShapeId::Rhombus => "White square",
            ShapeId::Red => "Red parallelogram",
            ShapeId::Transparent => "Transparent triangle",
            ShapeId::LightBlue => "Light-blue square",
        }
    }

    /// Short key used by the text interface
    pub fn key(self) -> &'static str {
        match self {
            ShapeId::Yellow => "y",
            ShapeId::White => "w",
            ShapeId::Blue => "b",
            ShapeId::Rhombus => "s",
            ShapeId::Red => "r",
            ShapeId::Transparent => "t",
            ShapeId::LightBlue => "lb",
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeId {
    type Err = OrapaError;

    /// Accepts the short key or the colour word, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let id = match lower.as_str() {
            "y" | "yellow" => ShapeId::Yellow,
            "w" | "white" => ShapeId::White,
            "b" | "blue" => ShapeId::Blue,
            "s" | "square" | "rhombus" => ShapeId::Rhombus,
            "r" | "red" | "parallelogram" => ShapeId::Red,
            "t" | "t2" | "transparent" => ShapeId::Transparent,
            "lb" | "lightblue" | "light-blue" => ShapeId::LightBlue,
            _ => return Err(OrapaError::UnknownShape(s.to_string())),
        };
        Ok(id)
    }
}
