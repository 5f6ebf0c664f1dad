//! Runtime game configuration.
//!
//! `GameConfig` mirrors the constants of [`crate::config::game`] and can be
//! overridden from a JSON file. It is validated once when a game state is
//! built, so a bad value is rejected at startup rather than mid-game.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::game::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for `{field}`: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rotate_degrees: f64,
    pub view_fov: f64,
    pub num_rays: usize,
    pub ray_length: f64,
    pub ray_steps: usize,
    pub forward_distance: f64,
    pub shooting_delay_ticks: u32,
    pub shot_lifetime_ticks: u32,
    pub shot_speed: f64,
    pub last_actions_len: usize,
    pub max_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rotate_degrees: PLAYER_ROTATE_DEGREES,
            view_fov: PLAYER_VIEW_FOV,
            num_rays: PLAYER_NUM_RAYS,
            ray_length: PLAYER_RAY_LENGTH,
            ray_steps: RAY_TRACER_STEPS,
            forward_distance: PLAYER_FORWARD_DISTANCE,
            shooting_delay_ticks: PLAYER_SHOOTING_DELAY_TICKS,
            shot_lifetime_ticks: SHOT_LIFETIME_TICKS,
            shot_speed: SHOT_SPEED,
            last_actions_len: PLAYER_LAST_ACTIONS_LEN,
            max_ticks: MAX_TICKS,
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_rays == 0 {
            return Err(out_of_range("num_rays", "at least one ray is required"));
        }
        if self.ray_steps == 0 {
            return Err(out_of_range("ray_steps", "at least one march step is required"));
        }
        if !(self.view_fov > 0.0 && self.view_fov <= 360.0) {
            return Err(out_of_range("view_fov", format!("{} is not in (0, 360]", self.view_fov)));
        }
        if !(self.rotate_degrees > 0.0 && self.rotate_degrees < 360.0) {
            return Err(out_of_range(
                "rotate_degrees",
                format!("{} is not in (0, 360)", self.rotate_degrees),
            ));
        }
        positive("ray_length", self.ray_length)?;
        positive("forward_distance", self.forward_distance)?;
        positive("shot_speed", self.shot_speed)?;
        if self.shot_lifetime_ticks == 0 {
            return Err(out_of_range("shot_lifetime_ticks", "a shot must live at least one tick"));
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(out_of_range(field, format!("{value} must be a positive finite number")))
    }
}

fn out_of_range(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::OutOfRange { field, reason: reason.into() }
}
