//! Placement state and outline generation
//!
//! Rotations are restricted to the four principal axes, so every rotation
//! matrix is integer-valued and rotating a template is exact.

use crate::core::types::Point2;
use crate::spatial::shapes::ShapeKind;
use serde::{Deserialize, Serialize};

/// Quarter-turn orientation, always in `0..4`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct Orientation(u8);

impl Orientation {
    pub const fn new(quarter_turns: u8) -> Self {
        Self(quarter_turns % 4)
    }

    pub fn quarter_turns(self) -> u8 {
        self.0
    }

    /// Turn by a signed number of quarter turns, wrapping modulo 4
    pub fn turned(self, steps: i32) -> Self {
        Self((self.0 as i32 + steps).rem_euclid(4) as u8)
    }

    /// Apply the rotation matrix for this orientation to a point
    fn apply(self, p: Point2) -> Point2 {
        match self.0 {
            0 => p,
            1 => Point2::new(-p.y, p.x),
            2 => Point2::new(-p.x, -p.y),
            _ => Point2::new(p.y, -p.x),
        }
    }
}

impl From<i32> for Orientation {
    fn from(value: i32) -> Self {
        Self(value.rem_euclid(4) as u8)
    }
}

impl From<Orientation> for u8 {
    fn from(value: Orientation) -> Self {
        value.0
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// +1 quarter turn
    CounterClockwise,
    /// -1 quarter turn
    Clockwise,
}

impl Rotation {
    pub fn steps(self) -> i32 {
        match self {
            Rotation::CounterClockwise => 1,
            Rotation::Clockwise => -1,
        }
    }
}

/// Mutable placement of one piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub anchor: Point2,
    #[serde(default)]
    pub orientation: Orientation,
    /// Only meaningful for kinds that support mirroring
    #[serde(default)]
    pub mirrored: bool,
}

impl Placement {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            anchor: Point2::new(x, y),
            orientation: Orientation::default(),
            mirrored: false,
        }
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_mirror(mut self, mirrored: bool) -> Self {
        self.mirrored = mirrored;
        self
    }

    /// Reset the orientation and mirror flag when `kind` does not support them
    pub fn normalize(&mut self, kind: ShapeKind) {
        if !kind.supports_rotation() {
            self.orientation = Orientation::default();
        }
        if !kind.supports_mirror() {
            self.mirrored = false;
        }
    }

    /// Outline of `kind` at this placement
    pub fn vertices(&self, kind: ShapeKind) -> Vec<Point2> {
        vertices(kind, self.anchor, self.orientation, self.mirrored)
    }
}

/// Generate the outline of a piece.
///
/// Mirror (x negated) first, then rotate, then translate by `anchor`. The
/// point count and winding of the template are preserved. Transforms the
/// kind does not support are ignored.
pub fn vertices(
    kind: ShapeKind,
    anchor: Point2,
    orientation: Orientation,
    mirrored: bool,
) -> Vec<Point2> {
    let mirror = mirrored && kind.supports_mirror();
    let orientation = if kind.supports_rotation() {
        orientation
    } else {
        Orientation::default()
    };
    kind.template()
        .iter()
        .map(|&p| {
            let p = if mirror { Point2::new(-p.x, p.y) } else { p };
            orientation.apply(p) + anchor
        })
        .collect()
}
