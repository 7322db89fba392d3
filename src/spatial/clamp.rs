//! Keeps a piece's outline inside the playing field

use crate::core::types::{Bounds, Point2, COLS, ROWS};
use crate::spatial::placement::{vertices, Orientation, Placement};
use crate::spatial::shapes::ShapeKind;

/// Shift needed to bring the span `[min, max]` inside `[0, limit]`.
///
/// The low side is corrected first; if the span is wider than the field the
/// high side wins and the low side may stay out of bounds.
fn axis_shift(min: f64, max: f64, limit: f64) -> f64 {
    let mut shift = 0.0;
    if min < 0.0 {
        shift -= min;
    }
    if max + shift > limit {
        shift -= max + shift - limit;
    }
    shift
}

fn bounds_at(kind: ShapeKind, anchor: Point2, orientation: Orientation, mirrored: bool) -> Bounds {
    let outline = vertices(kind, anchor, orientation, mirrored);
    // Templates are never empty
    Bounds::of(&outline).unwrap_or(Bounds {
        min_x: anchor.x,
        min_y: anchor.y,
        max_x: anchor.x,
        max_y: anchor.y,
    })
}

/// Return the anchor that keeps the outline within `[0, COLS] x [0, ROWS]`.
///
/// x is resolved first, the outline is regenerated, then y is resolved. The
/// parallelogram's anchor is rounded to the grid afterwards.
pub fn clamp(kind: ShapeKind, anchor: Point2, orientation: Orientation, mirrored: bool) -> Point2 {
    if kind == ShapeKind::UnitSquare {
        let b = bounds_at(kind, anchor, orientation, mirrored);
        return Point2::new(
            anchor.x + axis_shift(b.min_x, b.max_x, COLS),
            anchor.y + axis_shift(b.min_y, b.max_y, ROWS),
        );
    }

    let mut anchor = anchor;
    let b = bounds_at(kind, anchor, orientation, mirrored);
    anchor.x += axis_shift(b.min_x, b.max_x, COLS);

    let b = bounds_at(kind, anchor, orientation, mirrored);
    anchor.y += axis_shift(b.min_y, b.max_y, ROWS);

    if kind == ShapeKind::Parallelogram {
        anchor = Point2::new(anchor.x.round_ties_even(), anchor.y.round_ties_even());
    }
    anchor
}

/// Fit a placement to its kind and the field.
///
/// Transform fields the kind does not support are reset before the anchor
/// is clamped.
pub fn clamp_placement(kind: ShapeKind, placement: &mut Placement) {
    placement.normalize(kind);
    placement.anchor = clamp(kind, placement.anchor, placement.orientation, placement.mirrored);
}
