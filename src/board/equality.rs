//! Layout equality used to score a guess against a hidden board

use super::Arrangement;
use crate::core::config::config;

/// Compare two possibly-absent arrangements with the configured tolerance
pub fn layouts_equal(a: Option<&Arrangement>, b: Option<&Arrangement>) -> bool {
    layouts_equal_with(a, b, config().equality_tolerance)
}

/// Absent arrangements never compare equal, not even to each other
pub fn layouts_equal_with(a: Option<&Arrangement>, b: Option<&Arrangement>, tolerance: f64) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.approx_eq(b, tolerance),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::placement::Rotation;
    use crate::spatial::shapes::ShapeId;

    #[test]
    fn test_fresh_boards_are_equal() {
        let a = Arrangement::new();
        let b = Arrangement::new();
        assert!(layouts_equal(Some(&a), Some(&b)));
    }

    #[test]
    fn test_absent_never_equal() {
        let a = Arrangement::new();
        assert!(!layouts_equal(None, None));
        assert!(!layouts_equal(Some(&a), None));
        assert!(!layouts_equal(None, Some(&a)));
    }

    #[test]
    fn test_tolerance_applies_to_anchors() {
        let a = Arrangement::new();
        let mut b = Arrangement::new();
        b.move_by(ShapeId::Transparent, 1e-7, 0.0);
        assert!(layouts_equal_with(Some(&a), Some(&b), 1e-6));

        b.move_by(ShapeId::Transparent, 1e-3, 0.0);
        assert!(!layouts_equal_with(Some(&a), Some(&b), 1e-6));
    }

    #[test]
    fn test_discrete_fields_compare_exactly() {
        let a = Arrangement::new();
        let mut b = Arrangement::new();
        b.rotate(ShapeId::Rhombus, Rotation::Clockwise);
        // the rhombus looks the same but its orientation differs
        assert!(!layouts_equal(Some(&a), Some(&b)));

        let mut c = Arrangement::new();
        c.flip(ShapeId::Red);
        c.flip(ShapeId::Red);
        assert!(layouts_equal(Some(&a), Some(&c)));
    }

    #[test]
    fn test_verdict_cache_is_ignored() {
        let a = Arrangement::new();
        let mut b = Arrangement::new();
        b.check();
        assert!(layouts_equal(Some(&a), Some(&b)));
    }
}
