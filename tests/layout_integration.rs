//! End-to-end checks of piece geometry and layout legality

use orapa::board::{layouts_equal, Arrangement, Verdict};
use orapa::core::types::{Bounds, Point2};
use orapa::spatial::validation::{classify, validate, Contact, Violation, LEGAL_MESSAGE};
use orapa::spatial::{vertices, Orientation, Placement, Rotation, ShapeId, ShapeKind};

const EPS: f64 = 1e-9;

fn legal_arrangement() -> Arrangement {
    let mut board = Arrangement::new();
    board.set_placement(ShapeId::Yellow, Placement::at(1.0, 1.0));
    board.set_placement(ShapeId::White, Placement::at(2.0, 5.0));
    board.set_placement(ShapeId::Blue, Placement::at(7.0, 5.0));
    board.set_placement(ShapeId::Rhombus, Placement::at(5.0, 3.0));
    board.set_placement(ShapeId::Red, Placement::at(7.0, 2.0));
    board.set_placement(ShapeId::Transparent, Placement::at(4.0, 1.0));
    board.set_placement(ShapeId::LightBlue, Placement::at(8.0, 0.0));
    board
}

#[test]
fn test_starting_layout_reports_first_overlap() {
    // The starting placements put the transparent triangle inside the
    // yellow one's right angle at (2, 2).
    let verdict = validate(&Arrangement::new());
    assert!(!verdict.legal);
    assert_eq!(
        verdict.offenders,
        Some((ShapeId::Yellow, ShapeId::Transparent, Violation::Overlap))
    );
    assert_eq!(verdict.message, "Yellow triangle and Transparent triangle overlap.");
}

#[test]
fn test_next_violation_after_fixing_overlap() {
    let mut board = Arrangement::new();
    board.set_placement(ShapeId::Transparent, Placement::at(8.5, 1.0));
    let verdict = validate(&board);
    assert_eq!(
        verdict.offenders,
        Some((ShapeId::Blue, ShapeId::Red, Violation::EdgeTouch))
    );
    assert_eq!(verdict.message, "Blue triangle and Red parallelogram touch along an edge.");
}

#[test]
fn test_spread_out_layout_is_legal() {
    let mut board = legal_arrangement();
    let verdict = board.check();
    assert!(verdict.legal);
    assert_eq!(verdict.message, LEGAL_MESSAGE);
    assert_eq!(board.verdict(), Verdict::Legal);
}

#[test]
fn test_single_corner_touch_is_legal() {
    let mut board = legal_arrangement();
    // light-blue square corner meets the yellow triangle's corner at (2, 0)
    board.set_placement(ShapeId::LightBlue, Placement::at(2.0, 0.0));
    let yellow = board.vertices(ShapeId::Yellow);
    let square = board.vertices(ShapeId::LightBlue);
    assert_eq!(classify(&yellow, &square).contact, Contact::Points(1));
    assert!(board.check().legal);
}

#[test]
fn test_blue_on_yellow_anchor_overlaps() {
    let mut board = Arrangement::new();
    let yellow = *board.placement(ShapeId::Yellow);
    board.set_placement(ShapeId::Blue, yellow);
    assert_eq!(board.verdict(), Verdict::Unknown);

    let verdict = board.check();
    assert!(!verdict.legal);
    assert_eq!(verdict.offenders, Some((ShapeId::Yellow, ShapeId::Blue, Violation::Overlap)));
    assert!(verdict.message.ends_with("overlap."));
    assert_eq!(board.verdict(), Verdict::Illegal);
}

#[test]
fn test_edge_adjacent_parallelograms() {
    let left = vertices(ShapeKind::Parallelogram, Point2::new(2.0, 3.0), Orientation::new(0), false);
    let right = vertices(ShapeKind::Parallelogram, Point2::new(4.0, 3.0), Orientation::new(0), false);
    assert_eq!(classify(&left, &right).contact, Contact::Edge);

    // stacked: the top side of one is the bottom side of the other
    let above = vertices(ShapeKind::Parallelogram, Point2::new(3.0, 4.0), Orientation::new(0), false);
    assert_eq!(classify(&left, &above).contact, Contact::Edge);
}

#[test]
fn test_every_clamped_piece_is_in_field() {
    let mut board = Arrangement::new();
    for id in ShapeId::ALL {
        board.move_by(id, 50.0, -50.0);
        board.rotate(id, Rotation::CounterClockwise);
        let b = Bounds::of(&board.vertices(id)).unwrap();
        assert!(b.within_field(EPS), "{} out of field: {:?}", id, b);
    }
}

#[test]
fn test_equality_of_fresh_and_perturbed_boards() {
    let a = Arrangement::new();
    let b = Arrangement::new();
    assert!(layouts_equal(Some(&a), Some(&b)));

    for id in ShapeId::ALL {
        let mut moved = Arrangement::new();
        moved.move_by(id, 1.0, 0.0);
        assert!(!layouts_equal(Some(&a), Some(&moved)), "{} move not detected", id);
    }
}

#[test]
fn test_saved_board_round_trip_checks_the_same() {
    let board = legal_arrangement();
    let json = serde_json::to_string_pretty(&board).unwrap();
    let mut restored: Arrangement = serde_json::from_str(&json).unwrap();
    assert!(layouts_equal(Some(&board), Some(&restored)));
    assert!(restored.check().legal);
}
