//! Precise Predictor - discrete-tick movement prediction for arena combat agents
//!
//! Core modules:
//! - `geom`: Points, axis-aligned field rectangles and angular ranges
//! - `sim`: Deterministic tick model, wall smoothing and wave escape simulation
//! - `settings`: Scenario configuration loaded from JSON
//!
//! Angles follow the arena convention: 0 is north (+Y) and headings grow
//! clockwise, so a heading of π/2 points east (+X).

pub mod geom;
pub mod settings;
pub mod sim;

pub use geom::{ArenaVec, AxisRectangle, Point, Range};
pub use settings::Settings;

use std::f64::consts::{PI, TAU};

/// Arena physics constants, mirrored from the host simulation's rules
pub mod consts {
    /// Top speed of an agent (units/tick)
    pub const MAX_VELOCITY: f64 = 8.0;
    /// Speed gained per tick while accelerating
    pub const ACCELERATION: f64 = 1.0;
    /// Speed shed per tick while braking
    pub const DECELERATION: f64 = 2.0;

    /// Turn rate at rest (degrees/tick)
    pub const MAX_TURN_RATE_DEG: f64 = 10.0;
    /// Turn rate lost per unit of speed (degrees/tick)
    pub const TURN_RATE_DECAY_DEG: f64 = 0.75;

    /// Half the side of an agent's square body
    pub const BOT_HALF_WIDTH: f64 = 18.0;

    /// Bullet power limits
    pub const MIN_BULLET_POWER: f64 = 0.1;
    pub const MAX_BULLET_POWER: f64 = 3.0;

    /// Tolerance for containment and zero-crossing comparisons
    pub const EPSILON: f64 = 1e-6;

    /// Hard ceiling on simulated ticks per trajectory
    pub const MAX_PREDICTION_TICKS: usize = 500;

    /// Default wall-smoothing look-ahead
    pub const DEFAULT_STICK_LENGTH: f64 = 160.0;
}

/// Normalize an absolute heading to [0, 2π)
#[inline]
pub fn normalize_absolute(angle: f64) -> f64 {
    if (0.0..TAU).contains(&angle) {
        return angle;
    }
    let mut a = angle % TAU;
    if a < 0.0 {
        a += TAU;
    }
    // -tiny + TAU rounds up to TAU
    if a >= TAU { 0.0 } else { a }
}

/// Normalize a relative angle to [-π, π)
#[inline]
pub fn normalize_relative(angle: f64) -> f64 {
    if (-PI..PI).contains(&angle) {
        return angle;
    }
    let mut a = angle % TAU;
    if a >= PI {
        a -= TAU;
    } else if a < -PI {
        a += TAU;
    }
    a
}

/// Maximum rotation per tick at the given speed (radians)
///
/// Falls linearly from 10°/tick at rest to 4°/tick at top speed.
#[inline]
pub fn max_turn_rate(speed: f64) -> f64 {
    let speed = speed.abs().min(consts::MAX_VELOCITY);
    (consts::MAX_TURN_RATE_DEG - consts::TURN_RATE_DECAY_DEG * speed).to_radians()
}

/// Bullet travel speed for a firing power (units/tick)
#[inline]
pub fn bullet_speed(power: f64) -> f64 {
    let power = power.clamp(consts::MIN_BULLET_POWER, consts::MAX_BULLET_POWER);
    20.0 - 3.0 * power
}

/// Classic escape angle bound: asin(max velocity / bullet speed)
#[inline]
pub fn max_escape_angle(bullet_speed: f64) -> f64 {
    (consts::MAX_VELOCITY / bullet_speed).clamp(-1.0, 1.0).asin()
}
