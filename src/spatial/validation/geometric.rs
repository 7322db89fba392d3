//! Outline checks and conversion into regions for the contact classifier

use super::OutlineDefect;
use crate::core::types::Point2;
use geo::{Area, BooleanOps, Coord, LineString, MultiPolygon, Polygon};

/// Closed 2D region built from one or more outlines
#[derive(Debug, Clone)]
pub struct Region {
    pub shape: MultiPolygon<f64>,
    /// True when the source outline had to be rebuilt by self-union
    pub repaired: bool,
}

pub struct GeometricValidator;

impl GeometricValidator {
    /// Check an outline for defects that make it unusable as a simple polygon
    pub fn validate_polygon(vertices: &[Point2]) -> Vec<OutlineDefect> {
        let mut errors = Vec::new();

        // Check minimum vertices
        if vertices.len() < 3 {
            errors.push(OutlineDefect::InsufficientVertices {
                count: vertices.len(),
                minimum: 3,
            });
            return errors; // Can't do further checks
        }

        if vertices.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            errors.push(OutlineDefect::NonFinite);
            return errors;
        }

        let coords: Vec<(f64, f64)> = vertices.iter().map(|p| (p.x, p.y)).collect();

        if Self::signed_area(&coords).abs() <= f64::EPSILON {
            errors.push(OutlineDefect::ZeroArea);
        }

        if Self::is_self_intersecting(&coords) {
            errors.push(OutlineDefect::SelfIntersecting);
        }

        errors
    }

    /// Shoelace formula; positive for counter-clockwise rings
    fn signed_area(coords: &[(f64, f64)]) -> f64 {
        let mut sum = 0.0;
        for i in 0..coords.len() {
            let j = (i + 1) % coords.len();
            sum += coords[i].0 * coords[j].1 - coords[j].0 * coords[i].1;
        }
        sum / 2.0
    }

    /// Check if non-adjacent edges cross or touch
    fn is_self_intersecting(coords: &[(f64, f64)]) -> bool {
        let n = coords.len();
        if n < 4 {
            return false; // Triangle can't self-intersect
        }

        for i in 0..n {
            let a1 = coords[i];
            let a2 = coords[(i + 1) % n];

            for j in (i + 2)..n {
                // Skip adjacent edges
                if j == (i + n - 1) % n {
                    continue;
                }

                let b1 = coords[j];
                let b2 = coords[(j + 1) % n];

                if Self::segments_intersect(a1, a2, b1, b2) {
                    return true;
                }
            }
        }
        false
    }

    /// Check if two line segments share any point
    fn segments_intersect(a1: (f64, f64), a2: (f64, f64), b1: (f64, f64), b2: (f64, f64)) -> bool {
        let d1 = Self::cross_product_sign(b1, b2, a1);
        let d2 = Self::cross_product_sign(b1, b2, a2);
        let d3 = Self::cross_product_sign(a1, a2, b1);
        let d4 = Self::cross_product_sign(a1, a2, b2);

        if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
            && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
        {
            return true;
        }

        (d1 == 0.0 && Self::on_segment(b1, b2, a1))
            || (d2 == 0.0 && Self::on_segment(b1, b2, a2))
            || (d3 == 0.0 && Self::on_segment(a1, a2, b1))
            || (d4 == 0.0 && Self::on_segment(a1, a2, b2))
    }

    fn cross_product_sign(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> f64 {
        (b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)
    }

    /// `p` is known to be collinear with `a`-`b`
    fn on_segment(a: (f64, f64), b: (f64, f64), p: (f64, f64)) -> bool {
        p.0 >= a.0.min(b.0) && p.0 <= a.0.max(b.0) && p.1 >= a.1.min(b.1) && p.1 <= a.1.max(b.1)
    }

    /// Build the region for an outline, repairing it if needed.
    ///
    /// Returns None when the outline cannot be turned into a region with
    /// positive area.
    pub fn region(vertices: &[Point2], area_epsilon: f64) -> Option<Region> {
        let defects = Self::validate_polygon(vertices);
        if defects.is_empty() {
            return Some(Region {
                shape: MultiPolygon::new(vec![Self::to_geo_polygon(vertices)]),
                repaired: false,
            });
        }

        let repairable = defects
            .iter()
            .all(|d| matches!(d, OutlineDefect::SelfIntersecting | OutlineDefect::ZeroArea));
        if !repairable {
            tracing::warn!("Outline cannot be repaired: {:?}", defects);
            return None;
        }

        let polygon = Self::to_geo_polygon(vertices);
        let repaired = polygon.union(&polygon);
        if repaired.0.is_empty() || repaired.unsigned_area() <= area_epsilon {
            tracing::warn!("Self-union left no area for outline {:?}", vertices);
            return None;
        }

        tracing::debug!("Repaired outline into {} polygon(s)", repaired.0.len());
        Some(Region {
            shape: repaired,
            repaired: true,
        })
    }

    fn to_geo_polygon(vertices: &[Point2]) -> Polygon<f64> {
        let coords: Vec<Coord<f64>> = vertices.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        // Polygon::new closes the ring
        Polygon::new(LineString::from(coords), vec![])
    }
}
