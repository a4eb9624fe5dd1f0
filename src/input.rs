//! Abstract player controls
//!
//! The host maps its own keys (arrows, W/S, space, R, ...) onto [`Control`].

/// A player-facing control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Up,
    Down,
    /// Toggle pause (Running/Paused only)
    Pause,
    /// Start over (GameOver only)
    Restart,
}

/// Held directional controls; the last write before a tick wins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
}

impl InputState {
    /// Record a press or release. Returns false for edge-only controls.
    pub fn set(&mut self, control: Control, pressed: bool) -> bool {
        match control {
            Control::Up => self.up = pressed,
            Control::Down => self.down = pressed,
            Control::Pause | Control::Restart => return false,
        }
        true
    }
}
