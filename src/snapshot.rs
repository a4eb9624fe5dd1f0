//! Read-only view of the game for a renderer

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameState, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub bounds: Rect,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ball: BallView,
    pub paddle: PaddleView,
    pub score: u32,
    pub high_score: u32,
    /// Current ball speed (px/s)
    pub speed: f64,
    /// Ball speed as a whole percentage of the serve speed
    pub speed_percent: u32,
    pub phase: GamePhase,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let ball = &state.ball;
        let paddle = &state.paddle;
        Self {
            ball: BallView {
                x: ball.pos.x,
                y: ball.pos.y,
                radius: ball.radius,
            },
            paddle: PaddleView {
                x: paddle.x,
                y: paddle.y,
                width: paddle.width,
                height: paddle.height,
                bounds: paddle.collision_bounds(),
            },
            score: state.score,
            high_score: state.high_score,
            speed: ball.speed,
            speed_percent: speed_percent(ball.speed, state.config.initial_ball_speed),
            phase: state.phase,
        }
    }
}

/// Truncated percentage of `speed` relative to `initial`
pub fn speed_percent(speed: f64, initial: f64) -> u32 {
    if initial <= 0.0 {
        return 0;
    }
    // `as` saturates, so NaN and negatives land on 0
    (speed / initial * 100.0) as u32
}
