//! One-tick transition reproducing the arena's movement physics
//!
//! Order matters and matches the host: the turn is clamped using the speed
//! from the *previous* tick, then the speed is updated, then the agent moves
//! along its new heading by its new speed.

use std::f64::consts::{FRAC_PI_2, PI};

use super::state::PredictedPoint;
use crate::consts::*;
use crate::geom::{AxisRectangle, Point};
use crate::{max_turn_rate, normalize_absolute, normalize_relative};

/// Advance `state` by one tick toward `desired_heading`
///
/// `desired_heading` is the absolute direction the agent wants to travel,
/// `speed_cap` the commanded top speed and `remaining_distance` how far it
/// still wants to go in that direction (`f64::INFINITY` for "keep going").
/// The agent always turns through the smaller angle and drives in reverse
/// when its back is closer to the desired direction than its front.
pub fn tick(
    state: &PredictedPoint,
    desired_heading: f64,
    speed_cap: f64,
    remaining_distance: f64,
) -> PredictedPoint {
    let offset = normalize_relative(desired_heading - state.heading);
    let (turn, multiplier) = quickest_turn(offset);
    let heading = get_new_heading(state.heading, turn, state.velocity);
    let velocity =
        multiplier * get_new_velocity(state.velocity * multiplier, speed_cap, remaining_distance);

    state.advance(heading, velocity)
}

/// Resolve a relative turn into the smaller equivalent turn
///
/// Returns `(turn, multiplier)`. When the offset exceeds a quarter turn the
/// agent's rear is treated as its front: the turn is measured from the rear
/// and `multiplier` is `-1` to signal driving backwards.
#[inline]
pub fn quickest_turn(offset: f64) -> (f64, f64) {
    if offset.abs() > FRAC_PI_2 {
        (normalize_relative(offset + PI), -1.0)
    } else {
        (offset, 1.0)
    }
}

/// Heading after turning by `turn`, limited by the turn rate at `velocity`
#[inline]
pub fn get_new_heading(heading: f64, turn: f64, velocity: f64) -> f64 {
    let max_turn = max_turn_rate(velocity);
    normalize_absolute(heading + turn.clamp(-max_turn, max_turn))
}

/// Velocity after one tick of driving toward a point `distance` ahead
///
/// Accelerates by [`ACCELERATION`] while there is room to stop later and
/// otherwise follows the braking schedule that lands exactly on `distance`.
/// The speed cap is clamped to `[0, MAX_VELOCITY]`.
pub fn get_new_velocity(velocity: f64, speed_cap: f64, distance: f64) -> f64 {
    debug_assert!(speed_cap >= 0.0, "negative speed cap {speed_cap}");
    let speed_cap = speed_cap.max(0.0).min(MAX_VELOCITY);

    if distance < 0.0 {
        // Mirror symmetry: a target behind is a target ahead with velocity negated
        -forward_velocity(-velocity, speed_cap, -distance)
    } else {
        forward_velocity(velocity, speed_cap, distance)
    }
}

fn forward_velocity(velocity: f64, speed_cap: f64, distance: f64) -> f64 {
    let goal = if distance == f64::INFINITY {
        speed_cap
    } else {
        get_max_velocity(distance).min(speed_cap)
    };

    if velocity >= 0.0 {
        (velocity - DECELERATION).max(goal.min(velocity + ACCELERATION))
    } else {
        // Moving backwards: brake first, possibly crossing zero mid-tick
        (velocity - ACCELERATION).max(goal.min(velocity + max_decel(-velocity)))
    }
}

/// Fastest speed from which the agent can still come to rest within `distance`
///
/// Finds the smallest whole number of braking ticks `t` with
/// `t(t+1)/2 · DECELERATION >= distance`, then spreads the leftover distance
/// evenly over those ticks.
pub fn get_max_velocity(distance: f64) -> f64 {
    let decel_time = ((((4.0 * 2.0 / DECELERATION) * distance + 1.0).sqrt() - 1.0) / 2.0)
        .ceil()
        .max(1.0);
    if decel_time.is_infinite() {
        return MAX_VELOCITY;
    }

    let decel_dist = (decel_time / 2.0) * (decel_time - 1.0) * DECELERATION;
    (decel_time - 1.0) * DECELERATION + (distance - decel_dist) / decel_time
}

/// Speed change available when braking from `speed` toward and past zero
///
/// Braking runs at [`DECELERATION`] until the agent stops; whatever is left
/// of the tick is spent accelerating the other way at [`ACCELERATION`].
#[inline]
pub fn max_decel(speed: f64) -> f64 {
    let decel_time = speed / DECELERATION;
    let accel_time = 1.0 - decel_time;
    decel_time.min(1.0) * DECELERATION + accel_time.max(0.0) * ACCELERATION
}

/// Apply the arena's wall-hit rule to a freshly ticked state
///
/// An agent whose body left `battlefield` is pushed back along its line of
/// travel to the nearest legal position and stopped dead.
pub fn collide_with_walls(state: &PredictedPoint, battlefield: &AxisRectangle) -> PredictedPoint {
    let field = battlefield.shrink(BOT_HALF_WIDTH, BOT_HALF_WIDTH);
    let p = state.position;
    if field.contains(p) {
        return *state;
    }

    let mut adjust_x = edge_adjustment(p.x, field.min_x, field.max_x);
    let mut adjust_y = edge_adjustment(p.y, field.min_y, field.max_y);

    if state.heading % FRAC_PI_2 != 0.0 {
        let tan = state.heading.tan();
        if adjust_x == 0.0 {
            adjust_x = adjust_y * tan;
        } else if adjust_y == 0.0 {
            adjust_y = adjust_x / tan;
        } else if (adjust_x / tan).abs() > adjust_y.abs() {
            adjust_y = adjust_x / tan;
        } else if (adjust_y * tan).abs() > adjust_x.abs() {
            adjust_x = adjust_y * tan;
        }
    }

    log::trace!(
        "wall hit at tick {}: ({:.2}, {:.2}) adjusted by ({:.2}, {:.2})",
        state.tick,
        p.x,
        p.y,
        adjust_x,
        adjust_y
    );

    PredictedPoint {
        position: field.clamp(Point::new(p.x + adjust_x, p.y + adjust_y)),
        velocity: 0.0,
        ..*state
    }
}

fn edge_adjustment(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max - value
    } else if value < min {
        min - value
    } else {
        0.0
    }
}
