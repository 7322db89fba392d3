//! Arrangement state and per-piece mutations
//!
//! Every mutation clamps the touched piece back into the field and resets
//! the cached verdict to `Unknown`. Legality is only recomputed by
//! [`Arrangement::check`].

use crate::core::types::Point2;
use crate::spatial::clamp::clamp_placement;
use crate::spatial::placement::{Placement, Rotation};
use crate::spatial::shapes::ShapeId;
use crate::spatial::validation::{validate, LayoutVerdict};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cached legality of an arrangement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    #[default]
    Unknown,
    Legal,
    Illegal,
}

/// Starting placement of a piece on a fresh board
pub fn default_placement(id: ShapeId) -> Placement {
    match id {
        ShapeId::Yellow => Placement::at(3.0, 3.0),
        ShapeId::White => Placement::at(3.0, 5.0),
        ShapeId::Blue => Placement::at(7.0, 3.0),
        ShapeId::Rhombus => Placement::at(6.0, 6.0),
        ShapeId::Red => Placement::at(4.0, 2.0),
        ShapeId::Transparent => Placement::at(2.0, 2.0),
        ShapeId::LightBlue => Placement::at(1.0, 1.0),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ArrangementRecord", into = "ArrangementRecord")]
pub struct Arrangement {
    placements: [Placement; 7],
    verdict: Verdict,
    message: String,
}

/// On-disk form: pieces keyed by name, missing pieces take their defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ArrangementRecord {
    pieces: BTreeMap<ShapeId, Placement>,
    #[serde(default)]
    verdict: Verdict,
    #[serde(default)]
    message: String,
}

impl From<ArrangementRecord> for Arrangement {
    fn from(record: ArrangementRecord) -> Self {
        let mut arrangement = Arrangement::new();
        let mut adjusted = false;
        for (id, placement) in record.pieces {
            let slot = &mut arrangement.placements[id.index()];
            *slot = placement;
            clamp_placement(id.kind(), slot);
            adjusted |= *slot != placement;
        }
        // A stored verdict only describes the placements it was computed for
        if !adjusted {
            arrangement.verdict = record.verdict;
            arrangement.message = record.message;
        }
        arrangement
    }
}

impl From<Arrangement> for ArrangementRecord {
    fn from(arrangement: Arrangement) -> Self {
        let pieces = ShapeId::ALL
            .iter()
            .map(|&id| (id, arrangement.placements[id.index()]))
            .collect();
        Self {
            pieces,
            verdict: arrangement.verdict,
            message: arrangement.message,
        }
    }
}

impl Default for Arrangement {
    fn default() -> Self {
        Self::new()
    }
}

impl Arrangement {
    /// Fresh board with every piece at its starting placement
    pub fn new() -> Self {
        Self {
            placements: ShapeId::ALL.map(default_placement),
            verdict: Verdict::Unknown,
            message: String::new(),
        }
    }

    pub fn placement(&self, id: ShapeId) -> &Placement {
        &self.placements[id.index()]
    }

    pub fn placements(&self) -> impl Iterator<Item = (ShapeId, &Placement)> {
        ShapeId::ALL.iter().map(move |&id| (id, &self.placements[id.index()]))
    }

    /// Outline of one piece, ready for a polygon fill
    pub fn vertices(&self, id: ShapeId) -> Vec<Point2> {
        self.placement(id).vertices(id.kind())
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Diagnostic from the last check; empty while the verdict is unknown
    pub fn message(&self) -> &str {
        &self.message
    }

    fn invalidate(&mut self) {
        self.verdict = Verdict::Unknown;
        self.message.clear();
    }

    fn update(&mut self, id: ShapeId, f: impl FnOnce(&mut Placement)) {
        let placement = &mut self.placements[id.index()];
        f(placement);
        clamp_placement(id.kind(), placement);
        self.invalidate();
    }

    /// Replace a placement; the piece is clamped into the field
    pub fn set_placement(&mut self, id: ShapeId, placement: Placement) {
        self.update(id, |p| *p = placement);
    }

    /// Translate a piece by `(dx, dy)`
    pub fn move_by(&mut self, id: ShapeId, dx: f64, dy: f64) {
        self.update(id, |p| {
            p.anchor.x += dx;
            p.anchor.y += dy;
        });
    }

    /// Quarter-turn a piece. Returns false for pieces that cannot rotate.
    pub fn rotate(&mut self, id: ShapeId, rotation: Rotation) -> bool {
        if !id.kind().supports_rotation() {
            return false;
        }
        self.update(id, |p| p.orientation = p.orientation.turned(rotation.steps()));
        true
    }

    /// Toggle the mirror flag. Returns false for pieces that cannot mirror.
    pub fn flip(&mut self, id: ShapeId) -> bool {
        if !id.kind().supports_mirror() {
            return false;
        }
        self.update(id, |p| p.mirrored = !p.mirrored);
        true
    }

    /// Run the layout check and cache the result
    pub fn check(&mut self) -> LayoutVerdict {
        let verdict = validate(self);
        self.verdict = if verdict.legal {
            Verdict::Legal
        } else {
            Verdict::Illegal
        };
        self.message = verdict.message.clone();
        verdict
    }

    /// Field-by-field comparison; anchors within `tolerance`, the rest exact
    pub fn approx_eq(&self, other: &Arrangement, tolerance: f64) -> bool {
        self.placements
            .iter()
            .zip(other.placements.iter())
            .all(|(a, b)| {
                (a.anchor.x - b.anchor.x).abs() <= tolerance
                    && (a.anchor.y - b.anchor.y).abs() <= tolerance
                    && a.orientation == b.orientation
                    && a.mirrored == b.mirrored
            })
    }
}
