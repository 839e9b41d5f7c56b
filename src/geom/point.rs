//! Arena-convention vector helpers
//!
//! Vector arithmetic (add, sub, scale, dot, `perp_dot`, `length`,
//! `project_onto`, `rotate`) comes straight from [`glam::DVec2`]. The arena
//! measures headings from north going clockwise, which is the reverse of the
//! mathematical convention, so bearings and projections live in [`ArenaVec`].

use glam::DVec2;

use crate::consts::EPSILON;
use crate::normalize_absolute;

/// A 2D point in arena coordinates
pub type Point = DVec2;

/// Bearing and projection in the arena's angular convention
pub trait ArenaVec {
    /// Unit vector pointing along `heading`
    fn from_heading(heading: f64) -> Self;

    /// Point reached by travelling `distance` along `heading`
    fn project(&self, heading: f64, distance: f64) -> Self;

    /// Absolute bearing to `other`, in [0, 2π)
    ///
    /// Coincident points have no bearing; they map to 0 (north).
    fn bearing_to(&self, other: Self) -> f64;

    /// Heading of this vector, in [0, 2π)
    fn heading(&self) -> f64;
}

impl ArenaVec for DVec2 {
    #[inline]
    fn from_heading(heading: f64) -> Self {
        DVec2::new(heading.sin(), heading.cos())
    }

    #[inline]
    fn project(&self, heading: f64, distance: f64) -> Self {
        DVec2::new(
            self.x + heading.sin() * distance,
            self.y + heading.cos() * distance,
        )
    }

    #[inline]
    fn bearing_to(&self, other: Self) -> f64 {
        (other - *self).heading()
    }

    #[inline]
    fn heading(&self) -> f64 {
        if self.length_squared() < EPSILON * EPSILON {
            return 0.0;
        }
        normalize_absolute(self.x.atan2(self.y))
    }
}
