//! Kinematic snapshot of an agent
//!
//! Snapshots are immutable: every transition builds a new [`PredictedPoint`]
//! one tick later, so trajectories are plain `Vec`s of values.

use serde::{Deserialize, Serialize};

use crate::consts::EPSILON;
use crate::geom::{ArenaVec, Point};
use crate::normalize_absolute;

/// Whether the agent drives along its heading or against it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Forward,
    Reverse,
}

impl Facing {
    #[inline]
    pub fn signum(self) -> f64 {
        match self {
            Facing::Forward => 1.0,
            Facing::Reverse => -1.0,
        }
    }

    /// Facing implied by a signed velocity; a stopped agent keeps `previous`
    #[inline]
    pub fn from_velocity(velocity: f64, previous: Facing) -> Facing {
        if velocity > EPSILON {
            Facing::Forward
        } else if velocity < -EPSILON {
            Facing::Reverse
        } else {
            previous
        }
    }
}

/// Agent state at one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictedPoint {
    pub position: Point,
    /// Body heading in [0, 2π)
    pub heading: f64,
    /// Signed speed along `heading` (negative when reversing)
    pub velocity: f64,
    pub tick: i64,
    pub facing: Facing,
}

impl PredictedPoint {
    /// Snapshot from the host's per-tick status report
    pub fn new(position: Point, heading: f64, velocity: f64, tick: i64) -> Self {
        Self {
            position,
            heading: normalize_absolute(heading),
            velocity,
            tick,
            facing: Facing::from_velocity(velocity, Facing::Forward),
        }
    }

    /// Successor state after moving one tick with the given heading and velocity
    pub fn advance(&self, heading: f64, velocity: f64) -> Self {
        let heading = normalize_absolute(heading);
        Self {
            position: self.position.project(heading, velocity),
            heading,
            velocity,
            tick: self.tick + 1,
            facing: Facing::from_velocity(velocity, self.facing),
        }
    }

    /// Direction of travel as an absolute heading (flips when reversing)
    pub fn travel_heading(&self) -> f64 {
        match self.facing {
            Facing::Forward => self.heading,
            Facing::Reverse => normalize_absolute(self.heading + std::f64::consts::PI),
        }
    }

    /// Sign of this agent's sideways motion as seen from `observer`
    ///
    /// `+1` when circling clockwise around the observer, `-1` counter-clockwise,
    /// `0` when moving straight toward or away from it (or stopped).
    pub fn lateral_direction(&self, observer: Point) -> f64 {
        let bearing = observer.bearing_to(self.position);
        let lateral = self.velocity * (self.heading - bearing).sin();
        if lateral > EPSILON {
            1.0
        } else if lateral < -EPSILON {
            -1.0
        } else {
            0.0
        }
    }
}
