//! Session status and the per-game rule interface

use serde::{Deserialize, Serialize};

use super::input::FrameInput;

/// Lifecycle of one play-through. `Ended` is terminal; there is no
/// transition back to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Playing,
    Ended,
}

/// One mini-game's rules, driven one engine frame at a time.
///
/// Implementations own their entire entity set and collision policy; the
/// frame clock and reward bridge are generic over this interface. `step`
/// must be a no-op once the session has ended.
pub trait GameSession {
    /// Advance one engine frame with this frame's action signals
    fn step(&mut self, input: &FrameInput);

    fn status(&self) -> SessionStatus;

    /// Current score; non-decreasing while the session runs
    fn score(&self) -> u64;

    fn is_ended(&self) -> bool {
        self.status() == SessionStatus::Ended
    }
}
