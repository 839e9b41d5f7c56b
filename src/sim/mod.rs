//! Deterministic movement prediction
//!
//! Everything here is a pure function of its inputs:
//! - One tick model mirroring the arena's physics exactly
//! - No shared or global state between calls
//! - Bounded loops only (see [`consts::MAX_PREDICTION_TICKS`](crate::consts::MAX_PREDICTION_TICKS))

pub mod escape;
pub mod smooth;
pub mod state;
pub mod tick;
pub mod wave;

pub use escape::{
    EscapeAngle, OnWaveImpact, SurfOptions, Trajectory, generate_on_wave_impact,
    get_better_maximum_escape_angle, predict_on_wave_impact,
};
pub use smooth::wall_smooth;
pub use state::{Facing, PredictedPoint};
pub use tick::{
    collide_with_walls, get_max_velocity, get_new_heading, get_new_velocity, max_decel,
    quickest_turn, tick,
};
pub use wave::{BulletWave, Wave};
