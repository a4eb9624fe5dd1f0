//! Wall Pong entry point
//!
//! Headless native host: there is no window here, so an autopilot holds the
//! controls and the run is reported through the log. Set `RUST_LOG=debug` to
//! see every bounce and sound cue.

use std::time::{SystemTime, UNIX_EPOCH};

use wall_pong::audio::LogAudio;
use wall_pong::consts::{CONFIG_FILE, HIGH_SCORE_FILE, SIM_DT};
use wall_pong::input::Control;
use wall_pong::{Config, FileStore, Game, GamePhase, Snapshot};

/// Give up after this much simulated time
const TIME_LIMIT_SECS: f64 = 600.0;
/// Autopilot ignores offsets smaller than this (px)
const DEADZONE: f64 = 12.0;

fn main() {
    env_logger::init();
    log::info!("Wall Pong (native) starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(12345);

    let config = Config::load(CONFIG_FILE);
    let store = FileStore::new(HIGH_SCORE_FILE);
    log::info!("High score file: {}", store.path().display());
    let mut game = Game::new(config, store, LogAudio::new(seed), seed);
    log::info!("Game initialized with seed: {}", seed);

    let mut elapsed = 0.0;
    while game.phase() == GamePhase::Running && elapsed < TIME_LIMIT_SECS {
        let snap = game.snapshot();
        steer(&mut game, &snap);
        game.advance(SIM_DT);
        elapsed += SIM_DT;
    }

    let snap = game.snapshot();
    match snap.phase {
        GamePhase::GameOver => log::info!(
            "Game over after {:.1}s: score {}, high score {}, final speed {}%",
            elapsed,
            snap.score,
            snap.high_score,
            snap.speed_percent
        ),
        _ => log::info!(
            "Stopped after {:.0}s with the ball still in play: score {}",
            elapsed,
            snap.score
        ),
    }
}

/// Chase the ball while it approaches, drift back to center otherwise
fn steer<S, A>(game: &mut Game<S, A>, snap: &Snapshot)
where
    S: wall_pong::HighScoreStore,
    A: wall_pong::audio::AudioSink,
{
    let target = if game.state().ball.vel.x > 0.0 {
        snap.ball.y
    } else {
        game.state().config.center().y
    };

    let offset = target - snap.paddle.y;
    let (up, down) = if offset > DEADZONE {
        (true, false)
    } else if offset < -DEADZONE {
        (false, true)
    } else {
        (false, false)
    };

    if up {
        game.press(Control::Up);
    } else {
        game.release(Control::Up);
    }
    if down {
        game.press(Control::Down);
    } else {
        game.release(Control::Down);
    }
}
