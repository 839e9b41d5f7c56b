//! Expanding wave fronts used to stop forward simulation
//!
//! A wave is the reachable frontier of a fired bullet: a circle centred on
//! the firing point whose radius grows by a fixed speed each tick. The
//! simulator only ever reads a wave, never mutates it.

use serde::{Deserialize, Serialize};

use crate::bullet_speed;
use crate::geom::Point;

/// Read-only oracle for an expanding circular front
pub trait Wave {
    /// Firing point
    fn origin(&self) -> Point;

    /// Tick at which the wave was fired (radius 0)
    fn fired_tick(&self) -> i64;

    /// Radius growth per tick
    fn expansion_speed(&self) -> f64;

    /// Radius of the front at `tick`
    fn radius_at(&self, tick: i64) -> f64 {
        self.expansion_speed() * (tick - self.fired_tick()) as f64
    }

    /// Whether the front has reached or passed `point` by `tick`
    ///
    /// Must be monotone in `tick`.
    fn has_passed(&self, point: Point, tick: i64) -> bool {
        self.radius_at(tick) >= self.origin().distance(point)
    }
}

/// Wave of a real bullet fired at a known power
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulletWave {
    pub origin: Point,
    pub fired_tick: i64,
    pub speed: f64,
}

impl BulletWave {
    pub fn new(origin: Point, fired_tick: i64, speed: f64) -> Self {
        Self {
            origin,
            fired_tick,
            speed,
        }
    }

    /// Wave for a bullet of `power`, using the arena's bullet speed rule
    pub fn from_power(origin: Point, fired_tick: i64, power: f64) -> Self {
        Self::new(origin, fired_tick, bullet_speed(power))
    }
}

impl Wave for BulletWave {
    fn origin(&self) -> Point {
        self.origin
    }

    fn fired_tick(&self) -> i64 {
        self.fired_tick
    }

    fn expansion_speed(&self) -> f64 {
        self.speed
    }
}
