//! Wall Pong - A single-player wall pong arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, game state)
//! - `game`: Fixed-timestep host that wires the simulation to its collaborators
//! - `highscores`: Best-effort high score persistence
//! - `audio`: Sound cue descriptions and the audio sink seam
//! - `input`: Abstract controls (the host owns key mapping)
//! - `snapshot`: Read-only view handed to a renderer each frame

pub mod audio;
pub mod game;
pub mod highscores;
pub mod input;
pub mod sim;
pub mod snapshot;

pub use game::Game;
pub use highscores::{FileStore, HighScoreStore, MemoryStore, StoreError};
pub use sim::{Config, GameEvent, GamePhase, GameState, TickInput, tick};
pub use snapshot::Snapshot;

use glam::DVec2;

/// Game configuration constants
///
/// These are the defaults behind [`sim::Config::default`]; the simulation
/// itself only ever reads a `Config`.
pub mod consts {
    use std::f64::consts::PI;

    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f64 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the host will try to catch up on
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 600.0;
    pub const WALL_THICKNESS: f64 = 20.0;

    /// Paddle defaults - sits near the open right side
    pub const PADDLE_WIDTH: f64 = 15.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    /// Gap between the right wall line and the paddle center
    pub const PADDLE_INSET: f64 = 20.0;
    pub const PADDLE_SPEED: f64 = 400.0;

    /// Ball defaults
    pub const BALL_SIZE: f64 = 10.0;
    pub const INITIAL_BALL_SPEED: f64 = 300.0;
    /// Speed added on every left-wall or paddle bounce
    pub const BALL_ACCELERATION: f64 = 20.0;
    pub const MAX_BALL_SPEED: f64 = 800.0;

    /// Serve direction range (radians), leftward into the open arena
    pub const SERVE_ANGLE_MIN: f64 = 3.0 * PI / 4.0;
    pub const SERVE_ANGLE_MAX: f64 = 5.0 * PI / 4.0;
    /// Largest deflection off the horizontal for an edge hit on the paddle
    pub const MAX_DEFLECTION: f64 = PI / 3.0;

    pub const HIGH_SCORE_FILE: &str = "highscore.txt";
    pub const CONFIG_FILE: &str = "wall_pong.json";
}

/// Decompose a speed and heading into a velocity vector
#[inline]
pub fn velocity_from_angle(speed: f64, angle: f64) -> DVec2 {
    DVec2::new(speed * angle.cos(), speed * angle.sin())
}

/// Rescale a velocity to `speed`, keeping its direction.
///
/// A zero vector has no direction and stays zero.
#[inline]
pub fn rescale(velocity: DVec2, speed: f64) -> DVec2 {
    velocity.normalize_or_zero() * speed
}
