//! Sound cue seam.
//!
//! The engine requests two kinds of cues: a per-color chime when a
//! lit cell is hit, and a game-over cue when a round ends. Muting is
//! handled inside the engine, so implementations always play what
//! they are asked to.

use crate::core::ColorId;

/// Player of the game's sound cues.
pub trait Mixer {
    /// Play the cue for a scored color.
    fn play_color(&mut self, color: ColorId);

    /// Play the end-of-round cue.
    fn play_game_over(&mut self);
}

/// Silent mixer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMixer;

impl Mixer for NullMixer {
    fn play_color(&mut self, _color: ColorId) {}

    fn play_game_over(&mut self) {}
}
