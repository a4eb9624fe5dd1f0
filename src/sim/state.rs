//! Game state and core simulation types
//!
//! Ball and paddle kinematics plus the session that owns them.

use std::f64::consts::PI;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::config::Config;
use super::serve::AngleSource;
use crate::{rescale, velocity_from_angle};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Game is paused
    Paused,
    /// Ball left the arena; waits for an explicit restart
    GameOver,
}

/// Something the host should react to (sound, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new ball was served (initial setup or restart)
    GameStart,
    /// Ball was returned by the paddle; `score` is the new score
    PaddleHit { score: u32 },
    /// Ball escaped past the paddle
    GameOver {
        score: u32,
        high_score: u32,
        /// High score was raised by this run and should be persisted
        new_record: bool,
    },
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Scalar speed; `vel.length() == speed` after every bounce
    pub speed: f64,
    /// Heading used to derive the last velocity from an angle (radians)
    pub angle: f64,
    /// Half the ball's size
    pub radius: f64,
}

impl Ball {
    /// Serve a fresh ball from the arena center
    pub fn serve(config: &Config, angle: f64) -> Self {
        let speed = config.initial_ball_speed;
        Self {
            pos: config.center(),
            vel: velocity_from_angle(speed, angle),
            speed,
            angle,
            radius: config.ball_half_size(),
        }
    }

    /// Integrate position. Boundaries are the caller's job.
    pub fn update(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }

    /// Reflect off the top or bottom wall (no speed change)
    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Reflect off the left wall and ramp up speed
    pub fn bounce_horizontal(&mut self, config: &Config) {
        self.vel.x = -self.vel.x;
        self.accelerate(config);
    }

    /// Deflect off the paddle based on where it was struck
    ///
    /// The relative hit position in `[-1, 1]` maps to a heading of
    /// `π - hit·max_deflection`, so the ball always leaves toward the left;
    /// a center hit goes straight back and edge hits angle up or down.
    pub fn bounce_paddle(&mut self, paddle_y: f64, config: &Config) {
        let relative_hit = relative_hit(self.pos.y, paddle_y, config.paddle_half_height());

        self.angle = PI - relative_hit * config.max_deflection;
        self.vel = velocity_from_angle(self.speed, self.angle);
        self.accelerate(config);
    }

    /// Ramp speed by one increment (capped) and renormalize velocity
    fn accelerate(&mut self, config: &Config) {
        self.speed = (self.speed + config.ball_acceleration).min(config.max_ball_speed);
        self.vel = rescale(self.vel, self.speed);
    }

    /// Axis-aligned bounds of the ball
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, DVec2::splat(self.radius))
    }
}

/// Normalized offset of a contact point from the paddle center, in `[-1, 1]`
pub fn relative_hit(ball_y: f64, paddle_y: f64, paddle_half_height: f64) -> f64 {
    let hit = (ball_y - paddle_y) / paddle_half_height;
    if hit.is_nan() {
        return 0.0;
    }
    hit.clamp(-1.0, 1.0)
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center x, fixed for the paddle's lifetime
    pub x: f64,
    /// Center y
    pub y: f64,
    /// Vertical velocity from the last update (no inertia)
    pub vel_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Paddle {
    /// Paddle at its fixed x, vertically centered
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.paddle_x(),
            y: config.clamp_paddle_y(config.center().y),
            vel_y: 0.0,
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    /// Move from held input. Up wins when both are held.
    pub fn update(&mut self, dt: f64, up: bool, down: bool, config: &Config) {
        self.vel_y = if up {
            config.paddle_speed
        } else if down {
            -config.paddle_speed
        } else {
            0.0
        };

        self.y = config.clamp_paddle_y(self.y + self.vel_y * dt);
    }

    /// Collision rectangle (left, right, bottom, top)
    pub fn collision_bounds(&self) -> Rect {
        Rect::from_center(
            DVec2::new(self.x, self.y),
            DVec2::new(self.width / 2.0, self.height / 2.0),
        )
    }
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Successful paddle returns this run
    pub score: u32,
    /// Best score across sessions; never decreases
    pub high_score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Events raised since the last drain
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl GameState {
    /// Start a session with a persisted high score
    pub fn new(config: Config, high_score: u32, angles: &mut dyn AngleSource) -> Self {
        let angle = angles.next_angle(config.serve_angle_min, config.serve_angle_max);
        let ball = Ball::serve(&config, angle);
        let paddle = Paddle::new(&config);
        Self {
            config,
            ball,
            paddle,
            score: 0,
            high_score,
            phase: GamePhase::Running,
            time_ticks: 0,
            events: vec![GameEvent::GameStart],
        }
    }

    /// Flip between Running and Paused. No effect after game over.
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    /// Start a new run. Only acts in GameOver; returns whether it did.
    pub fn restart(&mut self, angles: &mut dyn AngleSource) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }

        let angle = angles.next_angle(self.config.serve_angle_min, self.config.serve_angle_max);
        self.ball = Ball::serve(&self.config, angle);
        self.paddle = Paddle::new(&self.config);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::GameStart);
        true
    }

    /// End the run, raising the high score if it was beaten
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }

        let new_record = self.score > self.high_score;
        if new_record {
            self.high_score = self.score;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver {
            score: self.score,
            high_score: self.high_score,
            new_record,
        });
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events raised since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events waiting to be drained
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }
}
