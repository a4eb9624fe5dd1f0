//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Randomness only through an injected `AngleSource`
//! - No rendering, audio, or storage dependencies

pub mod collision;
pub mod config;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::Rect;
pub use config::{Config, ConfigError};
pub use serve::{AngleSource, FixedAngle};
pub use state::{Ball, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};
