//! Axis-aligned rectangle describing the playable field

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::consts::EPSILON;

/// Axis-aligned rectangle with `min_x <= max_x` and `min_y <= max_y`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRectangle {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl AxisRectangle {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y, "inverted rectangle");
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Field spanning `[0, width] x [0, height]`
    pub fn battlefield(width: f64, height: f64) -> Self {
        Self::new(0.0, width, 0.0, height)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }

    /// Inset copy; an axis that would invert collapses to its midpoint
    pub fn shrink(&self, dx: f64, dy: f64) -> Self {
        let (min_x, max_x) = shrink_axis(self.min_x, self.max_x, dx);
        let (min_y, max_y) = shrink_axis(self.min_y, self.max_y, dy);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Membership including the boundary, with `EPSILON` slack
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x - EPSILON
            && p.x <= self.max_x + EPSILON
            && p.y >= self.min_y - EPSILON
            && p.y <= self.max_y + EPSILON
    }

    /// Membership excluding a boundary band of width `EPSILON`
    #[inline]
    pub fn strictly_contains(&self, p: Point) -> bool {
        p.x > self.min_x + EPSILON
            && p.x < self.max_x - EPSILON
            && p.y > self.min_y + EPSILON
            && p.y < self.max_y - EPSILON
    }

    /// Nearest point inside the rectangle
    #[inline]
    pub fn clamp(&self, p: Point) -> Point {
        Point::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y.clamp(self.min_y, self.max_y),
        )
    }
}

fn shrink_axis(min: f64, max: f64, inset: f64) -> (f64, f64) {
    let (lo, hi) = (min + inset, max - inset);
    if lo > hi {
        let mid = (min + max) * 0.5;
        (mid, mid)
    } else {
        (lo, hi)
    }
}
