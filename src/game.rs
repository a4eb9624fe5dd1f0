//! Game host
//!
//! Owns a [`GameState`] and its collaborators: runs fixed-timestep ticks from
//! variable frame times, applies control edges, and routes simulation events
//! to audio and high score persistence.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SoundEffect};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::highscores::{HighScoreStore, load_or_default};
use crate::input::{Control, InputState};
use crate::sim::{AngleSource, Config, GameEvent, GamePhase, GameState, TickInput, tick};
use crate::snapshot::Snapshot;

/// Game instance holding all state
pub struct Game<S: HighScoreStore, A: AudioSink> {
    state: GameState,
    store: S,
    audio: A,
    angles: Box<dyn AngleSource>,
    input: InputState,
    accumulator: f64,
}

impl<S: HighScoreStore, A: AudioSink> Game<S, A> {
    /// New game with a seeded serve generator
    pub fn new(config: Config, store: S, audio: A, seed: u64) -> Self {
        Self::with_angle_source(config, store, audio, Box::new(Pcg32::seed_from_u64(seed)))
    }

    /// New game with an explicit serve angle source
    pub fn with_angle_source(
        config: Config,
        mut store: S,
        audio: A,
        mut angles: Box<dyn AngleSource>,
    ) -> Self {
        let high_score = load_or_default(&mut store);
        let state = GameState::new(config, high_score, angles.as_mut());
        let mut game = Self {
            state,
            store,
            audio,
            angles,
            input: InputState::default(),
            accumulator: 0.0,
        };
        game.dispatch_events();
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    /// Apply a control press
    pub fn press(&mut self, control: Control) {
        if self.input.set(control, true) {
            return;
        }
        match control {
            Control::Pause => {
                self.state.toggle_pause();
                log::info!("Pause toggled: {:?}", self.state.phase);
            }
            Control::Restart => {
                self.restart();
            }
            Control::Up | Control::Down => {}
        }
    }

    /// Apply a control release
    pub fn release(&mut self, control: Control) {
        self.input.set(control, false);
    }

    /// Start a new run if the last one is over
    pub fn restart(&mut self) -> bool {
        if !self.state.restart(self.angles.as_mut()) {
            return false;
        }
        self.accumulator = 0.0;
        log::info!("Game restarted (high score {})", self.state.high_score);
        self.dispatch_events();
        true
    }

    /// Run simulation ticks for a frame of `dt` seconds
    ///
    /// Returns the number of fixed ticks run.
    pub fn advance(&mut self, dt: f64) -> u32 {
        if !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt.min(MAX_FRAME_DT);

        let input = TickInput {
            up: self.input.up,
            down: self.input.down,
            pause: false,
        };

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }

        // Drop whatever could not be caught up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }

        self.dispatch_events();
        substeps
    }

    /// Route pending simulation events to audio and persistence
    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            if let GameEvent::GameOver {
                high_score,
                new_record: true,
                ..
            } = event
            {
                log::info!("New high score: {}", high_score);
                if let Err(e) = self.store.save(high_score) {
                    log::warn!("Could not save high score: {}", e);
                }
            }
            self.audio.play(SoundEffect::for_event(&event));
        }
    }
}
