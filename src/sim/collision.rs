//! Collision detection and response for the walled arena
//!
//! Everything is axis-aligned: the ball is treated as a square of side
//! `ball_size`, the paddle as its collision rectangle. Each check corrects the
//! ball's position back to the surface it touched before reflecting.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::config::Config;
use super::state::{Ball, Paddle};

/// Axis-aligned rectangle in arena coordinates (y grows upward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Rect {
    pub fn from_center(center: DVec2, half_extents: DVec2) -> Self {
        Self {
            left: center.x - half_extents.x,
            right: center.x + half_extents.x,
            bottom: center.y - half_extents.y,
            top: center.y + half_extents.y,
        }
    }

    /// Inclusive overlap test: touching edges count as overlapping
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right >= other.left
            && self.left <= other.right
            && self.top >= other.bottom
            && self.bottom <= other.top
    }
}

/// Bounce off the top wall if the ball's top edge reached it
pub fn check_top_wall(ball: &mut Ball, config: &Config) -> bool {
    let limit = config.wall_top() - ball.radius;
    if ball.pos.y >= limit {
        ball.pos.y = limit;
        ball.bounce_vertical();
        return true;
    }
    false
}

/// Bounce off the bottom wall if the ball's bottom edge reached it
pub fn check_bottom_wall(ball: &mut Ball, config: &Config) -> bool {
    let limit = config.wall_bottom() + ball.radius;
    if ball.pos.y <= limit {
        ball.pos.y = limit;
        ball.bounce_vertical();
        return true;
    }
    false
}

/// Bounce off the left wall (accelerates, never scores)
pub fn check_left_wall(ball: &mut Ball, config: &Config) -> bool {
    let limit = config.wall_left() + ball.radius;
    if ball.pos.x <= limit {
        ball.pos.x = limit;
        ball.bounce_horizontal(config);
        return true;
    }
    false
}

/// Deflect off the paddle when overlapping it while moving toward it
///
/// The `vel.x > 0` guard keeps a ball that is still overlapping after its
/// deflection from being counted twice.
pub fn check_paddle(ball: &mut Ball, paddle: &Paddle, config: &Config) -> bool {
    if ball.vel.x <= 0.0 {
        return false;
    }

    let paddle_rect = paddle.collision_bounds();
    if !ball.bounds().overlaps(&paddle_rect) {
        return false;
    }

    ball.pos.x = paddle_rect.left - ball.radius;
    ball.bounce_paddle(paddle.y, config);
    true
}

/// Whether the ball has fully left through the open right side
pub fn has_exited(ball: &Ball, config: &Config) -> bool {
    ball.bounds().left > config.wall_right() + config.ball_size
}
