//! Layout legality over all piece pairs of one arrangement

use super::contact::{classify_with, Contact};
use crate::board::Arrangement;
use crate::core::config::{config, LayoutConfig};
use crate::core::types::Point2;
use crate::spatial::shapes::ShapeId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message returned for a legal layout
pub const LEGAL_MESSAGE: &str =
    "Layout is legal: no pieces overlap, touch along an edge, or touch at more than one point.";

/// Rule broken by a pair of pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    Overlap,
    EdgeTouch,
    MultiPointTouch,
}

impl Violation {
    pub fn from_contact(contact: Contact) -> Option<Self> {
        if !contact.is_violation() {
            return None;
        }
        Some(match contact {
            Contact::Area => Violation::Overlap,
            Contact::Edge => Violation::EdgeTouch,
            _ => Violation::MultiPointTouch,
        })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Violation::Overlap => "overlap",
            Violation::EdgeTouch => "touch along an edge",
            Violation::MultiPointTouch => "touch at more than one point",
        };
        f.write_str(text)
    }
}

/// Result of checking one arrangement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutVerdict {
    pub legal: bool,
    pub message: String,
    /// First offending pair in pair order, if any
    pub offenders: Option<(ShapeId, ShapeId, Violation)>,
}

impl LayoutVerdict {
    fn legal() -> Self {
        Self {
            legal: true,
            message: LEGAL_MESSAGE.to_string(),
            offenders: None,
        }
    }

    fn illegal(a: ShapeId, b: ShapeId, violation: Violation) -> Self {
        Self {
            legal: false,
            message: format!("{} and {} {}.", a, b, violation),
            offenders: Some((a, b, violation)),
        }
    }
}

pub struct LayoutValidator;

impl LayoutValidator {
    /// Check outlines pairwise in index order `(0,1), (0,2), ..., (5,6)`.
    ///
    /// Stops at the first violating pair.
    pub fn validate_outlines(shapes: &[(ShapeId, Vec<Point2>)], cfg: &LayoutConfig) -> LayoutVerdict {
        for i in 0..shapes.len() {
            let (id_i, outline_i) = &shapes[i];
            for (id_j, outline_j) in &shapes[i + 1..] {
                let classification = classify_with(outline_i, outline_j, cfg);
                if let Some(violation) = Violation::from_contact(classification.contact) {
                    tracing::debug!(
                        "Layout violation between {} and {}: {:?}",
                        id_i,
                        id_j,
                        classification.trigger
                    );
                    return LayoutVerdict::illegal(*id_i, *id_j, violation);
                }
            }
        }
        LayoutVerdict::legal()
    }
}

/// Check an arrangement with the global config
pub fn validate(arrangement: &Arrangement) -> LayoutVerdict {
    validate_with(arrangement, config())
}

pub fn validate_with(arrangement: &Arrangement, cfg: &LayoutConfig) -> LayoutVerdict {
    let shapes: Vec<(ShapeId, Vec<Point2>)> = ShapeId::ALL
        .iter()
        .map(|&id| (id, arrangement.vertices(id)))
        .collect();
    let verdict = LayoutValidator::validate_outlines(&shapes, cfg);
    tracing::debug!("Layout verdict: legal={} ({})", verdict.legal, verdict.message);
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::placement::Placement;

    #[test]
    fn test_messages_name_both_pieces() {
        let v = LayoutVerdict::illegal(ShapeId::Yellow, ShapeId::Blue, Violation::EdgeTouch);
        assert_eq!(v.message, "Yellow triangle and Blue triangle touch along an edge.");
        assert!(!v.legal);
    }

    #[test]
    fn test_violation_mapping() {
        assert_eq!(Violation::from_contact(Contact::Area), Some(Violation::Overlap));
        assert_eq!(Violation::from_contact(Contact::Points(2)), Some(Violation::MultiPointTouch));
        assert_eq!(Violation::from_contact(Contact::Points(1)), None);
        assert_eq!(Violation::from_contact(Contact::Disjoint), None);
    }

    #[test]
    fn test_first_pair_in_order_is_reported() {
        // every piece stacked on the same spot: (Yellow, White) comes first
        let mut arrangement = Arrangement::new();
        for id in ShapeId::ALL {
            arrangement.set_placement(id, Placement::at(5.0, 4.0));
        }
        let verdict = validate(&arrangement);
        assert!(!verdict.legal);
        assert_eq!(verdict.offenders, Some((ShapeId::Yellow, ShapeId::White, Violation::Overlap)));
    }

    #[test]
    fn test_empty_outline_list_is_legal() {
        let verdict = LayoutValidator::validate_outlines(&[], &LayoutConfig::default());
        assert!(verdict.legal);
        assert_eq!(verdict.message, LEGAL_MESSAGE);
    }
}
