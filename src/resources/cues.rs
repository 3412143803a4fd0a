//! Channel bridge for sound cues.
//!
//! Mirrors how an audio thread would be fed: the ECS side owns a
//! [`crossbeam_channel::Sender`], the presentation side drains the matching
//! receiver at its own pace (possibly from another thread).

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::sound::SoundCue;

/// Sender half of the sound cue channel.
#[derive(Resource, Clone)]
pub struct CueBridge {
    pub tx_cue: Sender<SoundCue>,
}

/// Create the cue channel, register [`CueBridge`] and the `Messages<SoundCue>`
/// mailbox, and return the receiving end.
pub fn setup_cues(world: &mut World) -> Receiver<SoundCue> {
    let (tx_cue, rx_cue) = unbounded::<SoundCue>();
    world.insert_resource(CueBridge { tx_cue });
    world.insert_resource(Messages::<SoundCue>::default());
    rx_cue
}
