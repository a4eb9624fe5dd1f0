use std::f64::consts::PI;

use glam::DVec2;
use wall_pong::audio::{AudioSink, SoundEffect};
use wall_pong::consts::SIM_DT;
use wall_pong::input::Control;
use wall_pong::sim::FixedAngle;
use wall_pong::*;

#[derive(Default)]
struct Recorder(Vec<SoundEffect>);

impl AudioSink for Recorder {
    fn play(&mut self, effect: SoundEffect) {
        self.0.push(effect);
    }
}

fn count(effects: &[SoundEffect], effect: SoundEffect) -> usize {
    effects.iter().filter(|e| **e == effect).count()
}

/// Serve straight at the paddle so a motionless paddle returns every ball
fn straight_serve_config() -> Config {
    Config {
        serve_angle_min: 0.0,
        serve_angle_max: 0.0,
        ..Config::default()
    }
}

#[test]
fn test_left_wall_bounce_from_center() {
    let config = Config::default();
    let mut state = GameState::new(config.clone(), 0, &mut FixedAngle(PI));
    state.drain_events();

    let mut ticks = 0;
    while state.ball.vel.x < 0.0 && ticks < 1000 {
        tick(&mut state, &TickInput::default(), SIM_DT);
        ticks += 1;
    }

    // 375 px at 300 px/s
    assert!((140..=160).contains(&ticks), "took {} ticks", ticks);
    assert!(state.ball.vel.x > 0.0);
    assert_eq!(state.ball.speed, config.initial_ball_speed + config.ball_acceleration);
    assert!((state.ball.vel.length() - state.ball.speed).abs() < 1e-6);
    assert_eq!(state.ball.pos.x, config.wall_left() + config.ball_half_size());
    assert_eq!(state.score, 0);
    assert!(state.drain_events().is_empty());
}

#[test]
fn test_paddle_overlap_scores_once() {
    let mut state = GameState::new(Config::default(), 0, &mut FixedAngle(PI));
    state.drain_events();
    state.ball.pos = DVec2::new(755.0, 300.0);
    state.ball.vel = DVec2::new(300.0, 0.0);

    tick(&mut state, &TickInput::default(), SIM_DT);
    assert_eq!(state.score, 1);
    assert!(state.ball.vel.x < 0.0);

    // Still touching the paddle face, but now moving away
    let paddle_rect = state.paddle.collision_bounds();
    assert_eq!(state.ball.bounds().right, paddle_rect.left);
    assert!(state.ball.bounds().overlaps(&paddle_rect));
    state.ball.pos.x += 1.0;
    tick(&mut state, &TickInput::default(), SIM_DT / 100.0);
    assert!(state.ball.bounds().overlaps(&paddle_rect));
    assert_eq!(state.score, 1);

    let hits = state
        .drain_events()
        .into_iter()
        .filter(|e| matches!(e, GameEvent::PaddleHit { .. }))
        .count();
    assert_eq!(hits, 1);
}

#[test]
fn test_rally_then_new_high_score_is_saved() {
    let mut game = Game::with_angle_source(
        straight_serve_config(),
        MemoryStore::with_value(3),
        Recorder::default(),
        Box::new(FixedAngle(0.0)),
    );
    assert_eq!(game.state().high_score, 3);

    let mut frames = 0;
    while game.state().score < 5 && frames < 20_000 {
        game.advance(SIM_DT);
        frames += 1;
    }
    assert_eq!(game.state().score, 5);
    assert_eq!(game.phase(), GamePhase::Running);
    assert!(game.store().saves.is_empty());

    // Step aside and let the next return go by
    game.press(Control::Up);
    while game.phase() == GamePhase::Running && frames < 40_000 {
        game.advance(SIM_DT);
        frames += 1;
    }

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.state().score, 5);
    assert_eq!(game.state().high_score, 5);
    assert_eq!(game.store().saves, vec![5]);
    assert_eq!(count(&game.audio().0, SoundEffect::PaddleHit), 5);
    assert_eq!(count(&game.audio().0, SoundEffect::GameOver), 1);
}

#[test]
fn test_lower_score_is_not_saved() {
    let mut game = Game::with_angle_source(
        straight_serve_config(),
        MemoryStore::with_value(10),
        Recorder::default(),
        Box::new(FixedAngle(0.0)),
    );

    // Dodge the very first serve
    game.press(Control::Up);
    let mut frames = 0;
    while game.phase() == GamePhase::Running && frames < 10_000 {
        game.advance(SIM_DT);
        frames += 1;
    }

    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().high_score, 10);
    assert!(game.store().saves.is_empty());
}

#[test]
fn test_restart_from_game_over() {
    let mut game = Game::with_angle_source(
        straight_serve_config(),
        MemoryStore::new(),
        Recorder::default(),
        Box::new(FixedAngle(0.0)),
    );
    game.press(Control::Up);
    let mut frames = 0;
    while game.phase() == GamePhase::Running && frames < 10_000 {
        game.advance(SIM_DT);
        frames += 1;
    }
    assert_eq!(game.phase(), GamePhase::GameOver);

    // Nothing moves after game over
    let frozen = game.state().clone();
    game.advance(SIM_DT);
    assert_eq!(game.state().ball, frozen.ball);

    // Pause does nothing after game over
    game.press(Control::Pause);
    assert_eq!(game.phase(), GamePhase::GameOver);

    game.release(Control::Up);
    game.press(Control::Restart);
    let config = &game.state().config;
    assert_eq!(game.phase(), GamePhase::Running);
    assert_eq!(game.state().score, 0);
    assert_eq!(game.state().ball.pos, config.center());
    assert_eq!(game.state().ball.speed, config.initial_ball_speed);
    assert_eq!(game.state().paddle.y, config.center().y);
    assert_eq!(count(&game.audio().0, SoundEffect::GameStart), 2);

    // A second restart request while running is ignored
    game.press(Control::Restart);
    assert_eq!(count(&game.audio().0, SoundEffect::GameStart), 2);
}

#[test]
fn test_pause_freezes_simulation() {
    let mut game = Game::with_angle_source(
        Config::default(),
        MemoryStore::new(),
        Recorder::default(),
        Box::new(FixedAngle(PI)),
    );
    game.press(Control::Pause);
    let snap = game.snapshot();
    for _ in 0..60 {
        game.advance(SIM_DT);
    }
    assert_eq!(game.snapshot(), snap);
    assert_eq!(snap.phase, GamePhase::Paused);

    game.press(Control::Pause);
    game.advance(SIM_DT);
    assert_ne!(game.snapshot().ball, snap.ball);
}
