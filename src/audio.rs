//! Sound cues
//!
//! The simulation never plays audio itself. It raises events, the host maps
//! them to a [`SoundEffect`] and hands that to an [`AudioSink`]. Playback
//! success is never reported back.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// New ball served
    GameStart,
    /// Ball escaped
    GameOver,
}

impl SoundEffect {
    /// The cue for a simulation event
    pub fn for_event(event: &GameEvent) -> Self {
        match event {
            GameEvent::GameStart => SoundEffect::GameStart,
            GameEvent::PaddleHit { .. } => SoundEffect::PaddleHit,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
        }
    }
}

/// A sine tone with a linear frequency sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_secs: f32,
}

impl Tone {
    pub const fn beep(hz: f32, duration_secs: f32) -> Self {
        Self {
            start_hz: hz,
            end_hz: hz,
            duration_secs,
        }
    }

    pub const fn sweep(start_hz: f32, end_hz: f32, duration_secs: f32) -> Self {
        Self {
            start_hz,
            end_hz,
            duration_secs,
        }
    }
}

/// Paddle hit variations; one is picked per hit
pub const PADDLE_BEEPS: [Tone; 2] = [Tone::beep(330.0, 0.1), Tone::beep(220.0, 0.1)];
/// Ascending sweep on serve
pub const GAME_START_TONE: Tone = Tone::sweep(220.0, 440.0, 0.3);
/// Descending sweep on game over
pub const GAME_OVER_TONE: Tone = Tone::sweep(440.0, 110.0, 0.5);

/// Something that can voice sound effects
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Resolves cues to tones and logs them (headless hosts)
#[derive(Debug, Clone)]
pub struct LogAudio {
    rng: Pcg32,
}

impl LogAudio {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Pick the tone for an effect (paddle hits vary at random)
    pub fn tone_for(&mut self, effect: SoundEffect) -> Tone {
        match effect {
            SoundEffect::PaddleHit => PADDLE_BEEPS[self.rng.random_range(0..PADDLE_BEEPS.len())],
            SoundEffect::GameStart => GAME_START_TONE,
            SoundEffect::GameOver => GAME_OVER_TONE,
        }
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        let tone = self.tone_for(effect);
        log::debug!(
            "♪ {:?}: {}→{} Hz for {} ms",
            effect,
            tone.start_hz,
            tone.end_hz,
            (tone.duration_secs * 1000.0).round()
        );
    }
}
