//! Closed interval of reals, used to accumulate reachable angular offsets

use serde::{Deserialize, Serialize};

use crate::consts::EPSILON;

/// Closed interval `[min, max]`
///
/// A range with `min > max + EPSILON` is empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Degenerate range holding a single value
    pub fn around(center: f64) -> Self {
        Self {
            min: center,
            max: center,
        }
    }

    /// The empty range; pushing any value makes it degenerate around that value
    pub fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max + EPSILON
    }

    /// Length of the interval (0 when empty)
    #[inline]
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            (self.max - self.min).max(0.0)
        }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min - EPSILON && value <= self.max + EPSILON
    }

    /// Widen the range so it includes `value`
    pub fn push(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Overlap of two ranges, empty if they are disjoint
    pub fn intersect(&self, other: &Range) -> Range {
        let result = Range::new(self.min.max(other.min), self.max.min(other.max));
        if result.is_empty() {
            Range::empty()
        } else {
            result
        }
    }

    /// Smallest range covering both
    pub fn union(&self, other: &Range) -> Range {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Range::new(self.min.min(other.min), self.max.max(other.max))
    }
}

impl Default for Range {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_widens() {
        let mut range = Range::around(0.0);
        range.push(0.3);
        range.push(-0.1);
        range.push(0.2);
        assert_eq!(range, Range::new(-0.1, 0.3));
        assert!((range.width() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty() {
        let mut range = Range::empty();
        assert!(range.is_empty());
        assert_eq!(range.width(), 0.0);
        range.push(1.5);
        assert!(!range.is_empty());
        assert_eq!(range, Range::around(1.5));
    }

    #[test]
    fn test_intersect() {
        let a = Range::new(-1.0, 1.0);
        let b = Range::new(0.5, 2.0);
        assert_eq!(a.intersect(&b), Range::new(0.5, 1.0));

        let c = Range::new(3.0, 4.0);
        assert!(a.intersect(&c).is_empty());

        // Touching endpoints overlap in a single value
        let d = Range::new(1.0, 2.0);
        assert_eq!(a.intersect(&d), Range::around(1.0));
    }

    #[test]
    fn test_union() {
        let a = Range::new(-1.0, 0.0);
        let b = Range::new(2.0, 3.0);
        assert_eq!(a.union(&b), Range::new(-1.0, 3.0));
        assert_eq!(Range::empty().union(&b), b);
        assert_eq!(a.union(&Range::empty()), a);
    }

    proptest! {
        #[test]
        fn push_never_shrinks(values in proptest::collection::vec(-10.0f64..10.0, 1..40)) {
            let mut range = Range::around(0.0);
            for v in values {
                let before = range;
                range.push(v);
                prop_assert!(range.min <= before.min);
                prop_assert!(range.max >= before.max);
                prop_assert!(range.contains(v));
                prop_assert!(range.contains(0.0));
            }
        }
    }
}
