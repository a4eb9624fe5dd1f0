//! Game tuning configuration
//!
//! Loaded from an optional JSON file; anything missing falls back to the
//! defaults in [`crate::consts`].

use std::fmt;
use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a configuration could not be used
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Immutable game configuration, passed into the simulation at construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Arena ===
    pub screen_width: f64,
    pub screen_height: f64,
    pub wall_thickness: f64,

    // === Paddle ===
    pub paddle_width: f64,
    pub paddle_height: f64,
    /// Distance from the right wall line to the paddle center
    pub paddle_inset: f64,
    pub paddle_speed: f64,

    // === Ball ===
    pub ball_size: f64,
    pub initial_ball_speed: f64,
    pub ball_acceleration: f64,
    pub max_ball_speed: f64,
    pub serve_angle_min: f64,
    pub serve_angle_max: f64,
    pub max_deflection: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            wall_thickness: WALL_THICKNESS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,

            ball_size: BALL_SIZE,
            initial_ball_speed: INITIAL_BALL_SPEED,
            ball_acceleration: BALL_ACCELERATION,
            max_ball_speed: MAX_BALL_SPEED,
            serve_angle_min: SERVE_ANGLE_MIN,
            serve_angle_max: SERVE_ANGLE_MAX,
            max_deflection: MAX_DEFLECTION,
        }
    }
}

impl Config {
    pub fn wall_left(&self) -> f64 {
        self.wall_thickness
    }

    pub fn wall_right(&self) -> f64 {
        self.screen_width - self.wall_thickness
    }

    pub fn wall_top(&self) -> f64 {
        self.screen_height - self.wall_thickness
    }

    pub fn wall_bottom(&self) -> f64 {
        self.wall_thickness
    }

    /// Fixed x of the paddle center
    pub fn paddle_x(&self) -> f64 {
        self.wall_right() - self.paddle_inset
    }

    pub fn paddle_half_height(&self) -> f64 {
        self.paddle_height / 2.0
    }

    pub fn paddle_min_y(&self) -> f64 {
        self.wall_bottom() + self.paddle_half_height()
    }

    pub fn paddle_max_y(&self) -> f64 {
        self.wall_top() - self.paddle_half_height()
    }

    /// Clamp a paddle center to the playable band
    pub fn clamp_paddle_y(&self, y: f64) -> f64 {
        // max/min rather than clamp: an unvalidated config must not panic
        y.max(self.paddle_min_y()).min(self.paddle_max_y())
    }

    pub fn ball_half_size(&self) -> f64 {
        self.ball_size / 2.0
    }

    /// Spawn point for the ball (screen center)
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            self.screen_width,
            self.screen_height,
            self.paddle_width,
            self.paddle_height,
            self.paddle_speed,
            self.ball_size,
            self.initial_ball_speed,
            self.max_ball_speed,
        ];
        if positive.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(ConfigError::Invalid("sizes and speeds must be positive"));
        }
        if !self.ball_acceleration.is_finite() || self.ball_acceleration < 0.0 {
            return Err(ConfigError::Invalid("ball_acceleration must not be negative"));
        }
        if self.max_ball_speed < self.initial_ball_speed {
            return Err(ConfigError::Invalid(
                "max_ball_speed must be at least initial_ball_speed",
            ));
        }
        if !self.serve_angle_min.is_finite()
            || !self.serve_angle_max.is_finite()
            || !(self.serve_angle_max - self.serve_angle_min).is_finite()
        {
            return Err(ConfigError::Invalid("serve angle range must be finite"));
        }
        if self.serve_angle_min > self.serve_angle_max {
            return Err(ConfigError::Invalid("serve angle range is inverted"));
        }
        if !self.max_deflection.is_finite() {
            return Err(ConfigError::Invalid("max_deflection must be finite"));
        }
        if !self.wall_thickness.is_finite() || self.wall_thickness < 0.0 {
            return Err(ConfigError::Invalid("wall_thickness must not be negative"));
        }
        if self.paddle_min_y() > self.paddle_max_y() {
            return Err(ConfigError::Invalid("arena is too short for the paddle"));
        }
        if self.paddle_x() <= self.wall_left() {
            return Err(ConfigError::Invalid("paddle sits outside the arena"));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
