//! Simulation tick
//!
//! Core game loop that advances the simulation by one step.

use super::collision::{check_bottom_wall, check_left_wall, check_paddle, check_top_wall, has_exited};
use super::state::{GameEvent, GamePhase, GameState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Up held (wins over down)
    pub up: bool,
    /// Down held
    pub down: bool,
    /// Pause toggle (edge-triggered)
    pub pause: bool,
}

/// Advance the game state by `dt` seconds
///
/// Order within a running tick is fixed: paddle, ball, top wall, bottom wall,
/// left wall, paddle contact, right-side exit. Wall corrections happen before
/// the paddle test so a corner graze resolves against the corrected position.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f64) {
    // Handle pause toggle
    if input.pause {
        state.toggle_pause();
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Running {
        return;
    }

    if !dt.is_finite() || dt <= 0.0 {
        return;
    }

    state.time_ticks += 1;

    let config = &state.config;
    state.paddle.update(dt, input.up, input.down, config);
    state.ball.update(dt);

    check_top_wall(&mut state.ball, config);
    check_bottom_wall(&mut state.ball, config);
    if check_left_wall(&mut state.ball, config) {
        log::debug!("Left wall bounce, speed now {:.0}", state.ball.speed);
    }

    if check_paddle(&mut state.ball, &state.paddle, config) {
        state.score += 1;
        log::debug!("Paddle hit, score {} speed {:.0}", state.score, state.ball.speed);
        let score = state.score;
        state.push_event(GameEvent::PaddleHit { score });
    }

    if has_exited(&state.ball, &state.config) {
        log::info!("Ball escaped, final score {}", state.score);
        state.game_over();
    }
}
