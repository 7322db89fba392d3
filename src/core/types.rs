//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Field width in grid units
pub const COLS: f64 = 10.0;

/// Field height in grid units
pub const ROWS: f64 = 8.0;

/// 2D position in field units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<(f64, f64)> for Point2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Axis-aligned bounding box of an outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box of a point set. Returns None for an empty slice.
    pub fn of(points: &[Point2]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &points[1..] {
            bounds.min_x = bounds.min_x.min(p.x);
            bounds.min_y = bounds.min_y.min(p.y);
            bounds.max_x = bounds.max_x.max(p.x);
            bounds.max_y = bounds.max_y.max(p.y);
        }
        Some(bounds)
    }

    /// Grow the box by `margin` on every side
    pub fn expanded(&self, margin: f64) -> Bounds {
        Bounds {
            min_x: self.min_x - margin,
            min_y: self.min_y - margin,
            max_x: self.max_x + margin,
            max_y: self.max_y + margin,
        }
    }

    /// True when the boxes share at least one point (touching counts)
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// True when the box lies inside the playing field, border included,
    /// allowing `tolerance` of round-off on each side
    pub fn within_field(&self, tolerance: f64) -> bool {
        let field = Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: COLS,
            max_y: ROWS,
        }
        .expanded(tolerance);
        self.min_x >= field.min_x
            && self.max_x <= field.max_x
            && self.min_y >= field.min_y
            && self.max_y <= field.max_y
    }
}
