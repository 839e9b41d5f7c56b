//! Scenario settings
//!
//! Describes one prediction query: the field, the agent's snapshot and the
//! incoming wave. Stored as JSON; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{BOT_HALF_WIDTH, DEFAULT_STICK_LENGTH};
use crate::geom::{AxisRectangle, Point};
use crate::sim::{BulletWave, PredictedPoint};

/// Which way the agent orbits the wave origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrbitDirection {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl OrbitDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrbitDirection::Clockwise => "Clockwise",
            OrbitDirection::CounterClockwise => "CounterClockwise",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clockwise" | "cw" | "1" | "+1" => Some(OrbitDirection::Clockwise),
            "counterclockwise" | "counter-clockwise" | "ccw" | "-1" => {
                Some(OrbitDirection::CounterClockwise)
            }
            _ => None,
        }
    }

    /// +1 for clockwise, -1 for counter-clockwise
    pub fn signum(&self) -> i32 {
        match self {
            OrbitDirection::Clockwise => 1,
            OrbitDirection::CounterClockwise => -1,
        }
    }
}

/// Agent snapshot as reported by the host each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    pub x: f64,
    pub y: f64,
    /// Radians, 0 = north, clockwise
    pub heading: f64,
    pub velocity: f64,
    pub tick: i64,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            x: 400.0,
            y: 450.0,
            heading: std::f64::consts::FRAC_PI_2,
            velocity: 8.0,
            tick: 0,
        }
    }
}

/// Incoming bullet wave
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveSettings {
    pub x: f64,
    pub y: f64,
    pub fired_tick: i64,
    pub bullet_power: f64,
}

impl Default for WaveSettings {
    fn default() -> Self {
        Self {
            x: 400.0,
            y: 100.0,
            fired_tick: 0,
            bullet_power: 2.0,
        }
    }
}

/// Prediction scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub battlefield_width: f64,
    pub battlefield_height: f64,
    /// Inset applied to the battlefield before wall smoothing
    pub wall_margin: f64,
    /// Wall-smoothing look-ahead
    pub stick_length: f64,

    // === Query ===
    pub agent: AgentSettings,
    pub wave: WaveSettings,
    pub direction: OrbitDirection,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            battlefield_width: 800.0,
            battlefield_height: 600.0,
            wall_margin: BOT_HALF_WIDTH,
            stick_length: DEFAULT_STICK_LENGTH,

            agent: AgentSettings::default(),
            wave: WaveSettings::default(),
            direction: OrbitDirection::Clockwise,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Full battlefield (where the agent's centre may legally be, plus its body)
    pub fn battlefield(&self) -> AxisRectangle {
        AxisRectangle::battlefield(self.battlefield_width, self.battlefield_height)
    }

    /// Field the wall-smoothing stick must stay inside
    pub fn inset_field(&self) -> AxisRectangle {
        self.battlefield().shrink(self.wall_margin, self.wall_margin)
    }

    pub fn initial_state(&self) -> PredictedPoint {
        let agent = &self.agent;
        PredictedPoint::new(
            Point::new(agent.x, agent.y),
            agent.heading,
            agent.velocity,
            agent.tick,
        )
    }

    pub fn bullet_wave(&self) -> BulletWave {
        let wave = &self.wave;
        BulletWave::from_power(Point::new(wave.x, wave.y), wave.fired_tick, wave.bullet_power)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Wave;

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "stick_length": 120.0, "agent": { "x": 100.0 } }"#).unwrap();
        assert_eq!(settings.stick_length, 120.0);
        assert_eq!(settings.agent.x, 100.0);
        assert_eq!(settings.agent.y, AgentSettings::default().y);
        assert_eq!(settings.battlefield_width, 800.0);
        assert_eq!(settings.direction, OrbitDirection::Clockwise);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{ \"stick_length\": \"long\" }").is_err());
        assert!(Settings::load("/nonexistent/settings.json").is_err());
    }

    #[test]
    fn test_derived_geometry() {
        let settings = Settings::default();
        assert_eq!(
            settings.inset_field(),
            AxisRectangle::new(18.0, 782.0, 18.0, 582.0)
        );
        let state = settings.initial_state();
        assert_eq!(state.position, Point::new(400.0, 450.0));
        assert_eq!(state.velocity, 8.0);
        assert_eq!(settings.bullet_wave().expansion_speed(), 14.0);
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!(
            OrbitDirection::from_str("CCW"),
            Some(OrbitDirection::CounterClockwise)
        );
        assert_eq!(OrbitDirection::from_str("clockwise"), Some(OrbitDirection::Clockwise));
        assert_eq!(OrbitDirection::from_str("sideways"), None);
        assert_eq!(OrbitDirection::CounterClockwise.signum(), -1);
        assert_eq!(OrbitDirection::Clockwise.as_str(), "Clockwise");
    }
}
