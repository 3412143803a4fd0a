//! Sound cues emitted by the simulation.
//!
//! The simulation never plays audio. It writes [`SoundCue`] messages, and
//! [`crate::systems::audio::forward_sound_cues`] hands them to whoever holds
//! the receiving end of the [`CueBridge`](crate::resources::cues::CueBridge)
//! channel. Volumes, looping and asset lookup are that consumer's business.

use bevy_ecs::message::Message;

use crate::resources::wind::WindCue;

#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// The wind picked a new direction.
    WindShift,
    /// A gust hit.
    Gust,
    /// The craft started moving (engine loop should start).
    EngineStart,
    /// The round was restarted (engine loop should stop).
    EngineStop,
    GameOver,
    Win,
}

impl From<WindCue> for SoundCue {
    fn from(cue: WindCue) -> Self {
        match cue {
            WindCue::Shift => SoundCue::WindShift,
            WindCue::Gust => SoundCue::Gust,
        }
    }
}
