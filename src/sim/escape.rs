//! Forward simulation against an incoming wave
//!
//! Rolls the tick model forward, steering perpendicular to the wave's origin
//! with wall smoothing, until the wave front sweeps past the agent. The
//! angular spread of the resulting positions is the escape range a targeting
//! model has to cover.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::smooth::wall_smooth;
use super::state::PredictedPoint;
use super::tick::{collide_with_walls, tick};
use super::wave::Wave;
use crate::consts::{MAX_PREDICTION_TICKS, MAX_VELOCITY};
use crate::geom::{ArenaVec, AxisRectangle, Range};
use crate::normalize_relative;

/// How the simulated agent drives while the wave is in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfOptions {
    /// Angle added to the bearing from the wave origin (π/2 orbits the origin)
    pub perpendicular_offset: f64,
    /// Keep going until the wave has also passed the starting point
    pub must_clear_start: bool,
    /// Brake to a stop instead of driving at full speed
    pub brake: bool,
}

impl Default for SurfOptions {
    fn default() -> Self {
        Self {
            perpendicular_offset: FRAC_PI_2,
            must_clear_start: false,
            brake: false,
        }
    }
}

/// Simulated path, excluding the starting state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<PredictedPoint>,
    /// False when the tick ceiling cut the simulation short
    pub converged: bool,
}

impl Trajectory {
    /// State at the moment the wave breaks over the agent
    pub fn last(&self) -> Option<&PredictedPoint> {
        self.points.last()
    }
}

/// Reachable angular offsets from the wave's initial bearing, signed so that
/// positive means "in the requested orbit direction"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EscapeAngle {
    pub range: Range,
    pub converged: bool,
}

impl EscapeAngle {
    /// Normalize an offset into [-1, 1] against the reachable range
    pub fn guess_factor(&self, offset: f64) -> f64 {
        let bound = if offset >= 0.0 {
            self.range.max
        } else {
            -self.range.min
        };
        if bound <= 0.0 {
            return 0.0;
        }
        (offset / bound).clamp(-1.0, 1.0)
    }
}

/// Candidate futures for a surfing agent: orbit either way, or stop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnWaveImpact {
    pub forward: Trajectory,
    pub reverse: Trajectory,
    pub stop: Trajectory,
}

/// Turn a requested orbit direction into ±1
///
/// `0` picks the agent's current sideways direction relative to the wave
/// origin, or clockwise when it has none. The sense is read from lateral
/// velocity rather than position, so a stationary agent resolves to `+1`.
fn resolve_direction<W: Wave + ?Sized>(
    direction: i32,
    initial: &PredictedPoint,
    wave: &W,
    brake: bool,
) -> i32 {
    debug_assert!(
        (-1..=1).contains(&direction),
        "orbit direction must be -1, 0 or 1, got {direction}"
    );
    debug_assert!(direction != 0 || brake, "zero orbit direction requires braking");

    match direction.signum() {
        0 if initial.lateral_direction(wave.origin()) < 0.0 => -1,
        0 => 1,
        d => d,
    }
}

/// Simulate the agent until `wave` passes it
///
/// Each tick the agent heads `perpendicular_offset` off the bearing from the
/// wave origin (in `direction`), wall-smoothed against `inset_field`, at full
/// speed or braking. Steps that leave `battlefield` take the arena's wall hit.
/// Stops after [`MAX_PREDICTION_TICKS`] with `converged == false` if the wave
/// never arrives.
pub fn predict_on_wave_impact<W: Wave + ?Sized>(
    battlefield: &AxisRectangle,
    inset_field: &AxisRectangle,
    stick_length: f64,
    initial: &PredictedPoint,
    wave: &W,
    direction: i32,
    options: SurfOptions,
) -> Trajectory {
    let direction = resolve_direction(direction, initial, wave, options.brake);
    let speed_cap = if options.brake { 0.0 } else { MAX_VELOCITY };
    let origin = wave.origin();
    let start = initial.position;

    let passed = |state: &PredictedPoint| {
        wave.has_passed(state.position, state.tick)
            && (!options.must_clear_start || wave.has_passed(start, state.tick))
    };

    let mut current = *initial;
    let mut points = Vec::new();
    while !passed(&current) {
        if points.len() >= MAX_PREDICTION_TICKS {
            log::warn!(
                "wave from ({:.1}, {:.1}) never passed agent within {} ticks",
                origin.x,
                origin.y,
                MAX_PREDICTION_TICKS
            );
            return Trajectory {
                points,
                converged: false,
            };
        }

        let desired =
            origin.bearing_to(current.position) + options.perpendicular_offset * direction as f64;
        let heading = wall_smooth(inset_field, stick_length, current.position, desired, direction);
        current = collide_with_walls(
            &tick(&current, heading, speed_cap, f64::INFINITY),
            battlefield,
        );
        points.push(current);
    }

    Trajectory {
        points,
        converged: true,
    }
}

/// Widest angular deviation the agent can reach before `wave` arrives
///
/// Orbits both ways and folds every visited bearing into a range seeded at
/// zero, so the result always contains 0.
pub fn get_better_maximum_escape_angle<W: Wave + ?Sized>(
    battlefield: &AxisRectangle,
    inset_field: &AxisRectangle,
    stick_length: f64,
    initial: &PredictedPoint,
    wave: &W,
    direction: i32,
) -> EscapeAngle {
    let direction = resolve_direction(direction, initial, wave, false);
    let origin = wave.origin();
    let base_bearing = origin.bearing_to(initial.position);

    let mut range = Range::around(0.0);
    let mut converged = true;
    for orbit in [direction, -direction] {
        let trajectory = predict_on_wave_impact(
            battlefield,
            inset_field,
            stick_length,
            initial,
            wave,
            orbit,
            SurfOptions::default(),
        );
        converged &= trajectory.converged;
        for state in &trajectory.points {
            let offset = normalize_relative(origin.bearing_to(state.position) - base_bearing);
            range.push(offset * direction as f64);
        }
    }

    log::debug!(
        "escape range [{:.4}, {:.4}] at tick {} (converged: {})",
        range.min,
        range.max,
        initial.tick,
        converged
    );
    EscapeAngle { range, converged }
}

/// The three futures a surfing movement picks between
pub fn generate_on_wave_impact<W: Wave + ?Sized>(
    battlefield: &AxisRectangle,
    inset_field: &AxisRectangle,
    stick_length: f64,
    initial: &PredictedPoint,
    wave: &W,
    direction: i32,
) -> OnWaveImpact {
    let direction = resolve_direction(direction, initial, wave, false);
    let run = |orbit: i32, brake: bool| {
        predict_on_wave_impact(
            battlefield,
            inset_field,
            stick_length,
            initial,
            wave,
            orbit,
            SurfOptions {
                brake,
                ..SurfOptions::default()
            },
        )
    };

    OnWaveImpact {
        forward: run(direction, false),
        reverse: run(-direction, false),
        stop: run(direction, true),
    }
}
