//! Pairwise contact classification between two outlines
//!
//! Outlines are treated as closed regions. Precedence is fixed: an overlap
//! with positive area wins over a shared edge, which wins over isolated
//! touch points.

use super::geometric::{GeometricValidator, Region};
use crate::core::config::{config, LayoutConfig};
use crate::core::types::{Bounds, Point2};
use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{Area, BooleanOps, Coord, Line, MultiPolygon};
use std::fmt;

/// How two outlines meet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Disjoint,
    /// Number of distinct isolated touch points, always at least 1
    Points(usize),
    Edge,
    Area,
}

impl Contact {
    /// Anything other than no contact or a single touch point
    pub fn is_violation(self) -> bool {
        matches!(self, Contact::Area | Contact::Edge) || matches!(self, Contact::Points(n) if n > 1)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contact::Disjoint => write!(f, "disjoint"),
            Contact::Points(n) => write!(f, "{} touch point(s)", n),
            Contact::Edge => write!(f, "edge contact"),
            Contact::Area => write!(f, "area overlap"),
        }
    }
}

/// Geometry feature that decided the classification
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    None,
    OverlapRegion { area: f64 },
    SharedSegment { start: Point2, end: Point2 },
    TouchPoints(Vec<Point2>),
    /// An outline could not be repaired; the pair is treated as overlapping
    UnrepairableOutline,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub contact: Contact,
    pub trigger: Trigger,
}

impl Classification {
    fn disjoint() -> Self {
        Self {
            contact: Contact::Disjoint,
            trigger: Trigger::None,
        }
    }
}

/// Classify two outlines with the global config
pub fn classify(a: &[Point2], b: &[Point2]) -> Classification {
    classify_with(a, b, config())
}

/// Classify two outlines.
///
/// Symmetric in its arguments with respect to [`Classification::contact`].
pub fn classify_with(a: &[Point2], b: &[Point2], cfg: &LayoutConfig) -> Classification {
    let (region_a, region_b) = match (
        GeometricValidator::region(a, cfg.area_epsilon),
        GeometricValidator::region(b, cfg.area_epsilon),
    ) {
        (Some(ra), Some(rb)) => (ra, rb),
        _ => {
            return Classification {
                contact: Contact::Area,
                trigger: Trigger::UnrepairableOutline,
            }
        }
    };

    if region_a.repaired || region_b.repaired {
        tracing::debug!("Classifying a repaired outline");
    }

    let tolerance = cfg.point_merge_tolerance;
    // Both outlines passed validation, so both are non-empty
    if let (Some(ba), Some(bb)) = (Bounds::of(a), Bounds::of(b)) {
        if !ba.expanded(tolerance).intersects(&bb) {
            return Classification::disjoint();
        }
    }

    let overlap = region_a.shape.intersection(&region_b.shape);
    let area = overlap.unsigned_area();
    if area > cfg.area_epsilon {
        return Classification {
            contact: Contact::Area,
            trigger: Trigger::OverlapRegion { area },
        };
    }

    // A sliver under the area threshold that is longer than the side of an
    // epsilon square is a shared edge blurred by round-off; shorter specks
    // are left to the boundary scan
    if let Some((start, end)) = farthest_pair(&overlap) {
        if start.distance(&end) > cfg.area_epsilon.sqrt() {
            return Classification {
                contact: Contact::Edge,
                trigger: Trigger::SharedSegment { start, end },
            };
        }
    }

    boundary_contact(&region_a, &region_b, tolerance)
}

fn to_point(c: Coord<f64>) -> Point2 {
    Point2::new(c.x, c.y)
}

/// Two most distant vertices of an intersection result
fn farthest_pair(overlap: &MultiPolygon<f64>) -> Option<(Point2, Point2)> {
    let points: Vec<Point2> = overlap
        .0
        .iter()
        .flat_map(|poly| poly.exterior().coords().copied())
        .map(to_point)
        .collect();
    let mut best: Option<(Point2, Point2)> = None;
    let mut best_distance = -1.0;
    for (i, p) in points.iter().enumerate() {
        for q in &points[i + 1..] {
            let d = p.distance(q);
            if d > best_distance {
                best_distance = d;
                best = Some((*p, *q));
            }
        }
    }
    best.or_else(|| points.first().map(|&p| (p, p)))
}

fn boundary_lines(region: &Region) -> Vec<Line<f64>> {
    region
        .shape
        .0
        .iter()
        .flat_map(|poly| std::iter::once(poly.exterior()).chain(poly.interiors().iter()))
        .flat_map(|ring| ring.lines())
        .filter(|line| line.start != line.end)
        .collect()
}

/// How two boundary segments meet, up to a tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
enum SegmentContact {
    Apart,
    Point(Point2),
    Shared(Point2, Point2),
}

/// Distance from `p` to the infinite line through `s` and `e`
fn line_distance(s: Point2, e: Point2, p: Point2) -> f64 {
    let (dx, dy) = (e.x - s.x, e.y - s.y);
    let length = dx.hypot(dy);
    if length <= f64::EPSILON {
        return p.distance(&s);
    }
    (dx * (p.y - s.y) - dy * (p.x - s.x)).abs() / length
}

/// Distance from `p` to the segment `s`-`e`
fn segment_distance(s: Point2, e: Point2, p: Point2) -> f64 {
    let (dx, dy) = (e.x - s.x, e.y - s.y);
    let length_sq = dx * dx + dy * dy;
    if length_sq <= f64::EPSILON {
        return p.distance(&s);
    }
    let t = (((p.x - s.x) * dx + (p.y - s.y) * dy) / length_sq).clamp(0.0, 1.0);
    p.distance(&Point2::new(s.x + t * dx, s.y + t * dy))
}

/// Overlap of two segments lying on a common line, measured along the longer one
fn collinear_overlap(a: (Point2, Point2), b: (Point2, Point2), tolerance: f64) -> SegmentContact {
    let (base, other) = if a.0.distance(&a.1) >= b.0.distance(&b.1) {
        (a, b)
    } else {
        (b, a)
    };
    let length = base.0.distance(&base.1);
    let (ux, uy) = ((base.1.x - base.0.x) / length, (base.1.y - base.0.y) / length);
    let along = |p: Point2| (p.x - base.0.x) * ux + (p.y - base.0.y) * uy;
    let at = |t: f64| Point2::new(base.0.x + t * ux, base.0.y + t * uy);

    let (t0, t1) = (along(other.0), along(other.1));
    let lo = t0.min(t1).max(0.0);
    let hi = t0.max(t1).min(length);
    if hi - lo > tolerance {
        SegmentContact::Shared(at(lo), at(hi))
    } else if hi - lo >= -tolerance {
        SegmentContact::Point(at(((lo + hi) / 2.0).clamp(0.0, length)))
    } else {
        SegmentContact::Apart
    }
}

fn segment_contact(la: &Line<f64>, lb: &Line<f64>, tolerance: f64) -> SegmentContact {
    let a = (to_point(la.start), to_point(la.end));
    let b = (to_point(lb.start), to_point(lb.end));

    let on_a_line = |p: Point2| line_distance(a.0, a.1, p) <= tolerance;
    let on_b_line = |p: Point2| line_distance(b.0, b.1, p) <= tolerance;
    if (on_a_line(b.0) && on_a_line(b.1)) || (on_b_line(a.0) && on_b_line(a.1)) {
        return collinear_overlap(a, b, tolerance);
    }

    match line_intersection(*la, *lb) {
        Some(LineIntersection::SinglePoint { intersection, .. }) => {
            return SegmentContact::Point(to_point(intersection));
        }
        Some(LineIntersection::Collinear { .. }) => return collinear_overlap(a, b, tolerance),
        None => {}
    }

    // An endpoint resting on the other segment but missed by round-off
    [(a.0, b), (a.1, b), (b.0, a), (b.1, a)]
        .into_iter()
        .find(|&(p, (s, e))| segment_distance(s, e, p) <= tolerance)
        .map_or(SegmentContact::Apart, |(p, _)| SegmentContact::Point(p))
}

/// Classify contact between boundaries of two regions known not to overlap
fn boundary_contact(a: &Region, b: &Region, tolerance: f64) -> Classification {
    let lines_a = boundary_lines(a);
    let lines_b = boundary_lines(b);
    let mut points: Vec<Point2> = Vec::new();

    for la in &lines_a {
        for lb in &lines_b {
            match segment_contact(la, lb, tolerance) {
                SegmentContact::Shared(start, end) => {
                    return Classification {
                        contact: Contact::Edge,
                        trigger: Trigger::SharedSegment { start, end },
                    };
                }
                SegmentContact::Point(p) => push_distinct(&mut points, p, tolerance),
                SegmentContact::Apart => {}
            }
        }
    }

    if points.is_empty() {
        return Classification::disjoint();
    }
    Classification {
        contact: Contact::Points(points.len()),
        trigger: Trigger::TouchPoints(points),
    }
}

fn push_distinct(points: &mut Vec<Point2>, p: Point2, tolerance: f64) {
    if !points.iter().any(|q| q.distance(&p) <= tolerance) {
        points.push(p);
    }
}
